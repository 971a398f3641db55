//! Steps merging derived records through the typed entry point.

use amalgam::{Options, merge};
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};

use crate::fixtures::{Endpoint, RecordContext, Session};

fn endpoint(host: String, port: u16, alias: String) -> Endpoint {
    Endpoint {
        host,
        port,
        aliases: vec![alias],
    }
}

fn current_options(record_context: &RecordContext) -> Options {
    record_context.options.take().unwrap_or_default()
}

fn stored_endpoint(record_context: &RecordContext) -> Result<Endpoint> {
    record_context
        .endpoint
        .with_ref(Clone::clone)
        .ok_or_else(|| anyhow!("endpoint missing"))
}

#[given("an endpoint \"{host}\" on port {port:u16} with alias \"{alias}\"")]
fn given_endpoint(record_context: &RecordContext, host: String, port: u16, alias: String) {
    record_context.endpoint.set(endpoint(host, port, alias));
}

#[given("an update \"{host}\" on port {port:u16} with alias \"{alias}\"")]
fn given_update(record_context: &RecordContext, host: String, port: u16, alias: String) {
    record_context.update.set(endpoint(host, port, alias));
}

#[given("overwrite is disabled for records")]
fn disable_overwrite(record_context: &RecordContext) {
    let mut options = current_options(record_context);
    options.overwrite = false;
    record_context.options.set(options);
}

#[given("a session with an unexported token")]
fn given_session(record_context: &RecordContext) {
    record_context.session.set(Session::new("admin", "secret"));
}

#[given("unexported fields are rejected")]
fn reject_unexported(record_context: &RecordContext) {
    let mut options = current_options(record_context);
    options.error_on_unexported = true;
    record_context.options.set(options);
}

#[when("the update is merged into the endpoint")]
fn merge_update(record_context: &RecordContext) -> Result<()> {
    let mut target = record_context
        .endpoint
        .take()
        .ok_or_else(|| anyhow!("endpoint missing"))?;
    let update = record_context
        .update
        .take()
        .ok_or_else(|| anyhow!("update missing"))?;
    let options = current_options(record_context);
    merge(&mut target, update, Some(&options))?;
    record_context.endpoint.set(target);
    Ok(())
}

#[when("the session is merged")]
fn merge_session(record_context: &RecordContext) -> Result<()> {
    let mut target = record_context
        .session
        .take()
        .ok_or_else(|| anyhow!("session missing"))?;
    let options = current_options(record_context);
    if let Err(err) = merge(&mut target, Session::new("guest", "other"), Some(&options)) {
        record_context.error.set(err.to_string());
    }
    Ok(())
}

#[then("the endpoint host is \"{expected}\"")]
fn assert_host(record_context: &RecordContext, expected: String) -> Result<()> {
    let merged = stored_endpoint(record_context)?;
    ensure!(merged.host == expected, "unexpected host {}", merged.host);
    Ok(())
}

#[then("the endpoint port is {expected:u16}")]
fn assert_port(record_context: &RecordContext, expected: u16) -> Result<()> {
    let merged = stored_endpoint(record_context)?;
    ensure!(merged.port == expected, "unexpected port {}", merged.port);
    Ok(())
}

#[then("the endpoint aliases are \"{expected}\"")]
fn assert_aliases(record_context: &RecordContext, expected: String) -> Result<()> {
    let merged = stored_endpoint(record_context)?;
    let want: Vec<&str> = expected.split(',').map(str::trim).collect();
    ensure!(merged.aliases == want, "unexpected aliases {:?}", merged.aliases);
    Ok(())
}

#[then("the record merge fails with \"{message}\"")]
fn assert_record_failure(record_context: &RecordContext, message: String) -> Result<()> {
    let err = record_context
        .error
        .take()
        .ok_or_else(|| anyhow!("record merge unexpectedly succeeded"))?;
    ensure!(err == message, "unexpected error: {err}");
    Ok(())
}
