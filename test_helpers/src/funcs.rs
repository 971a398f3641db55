//! Stub merge functions for exercising dispatch.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use amalgam::{MergeError, MergeResult, Number, Options, Value};

/// A merge function that ignores its inputs and returns `value`.
#[must_use]
pub fn returns(
    value: Value,
) -> impl Fn(Value, Value, &Options) -> MergeResult<Value> + Send + Sync + 'static {
    move |_: Value, _: Value, _: &Options| Ok(value.clone())
}

/// A merge function that always fails with `message`.
#[must_use]
pub fn failing(
    message: &'static str,
) -> impl Fn(Value, Value, &Options) -> MergeResult<Value> + Send + Sync + 'static {
    move |_: Value, _: Value, _: &Options| Err(MergeError::custom(message))
}

/// A merge function adding integer operands instead of overwriting.
///
/// The sum keeps the target's representation: document numbers stay
/// [`Value::Number`], everything else becomes [`Value::Int`].
///
/// # Errors
///
/// Fails when either side is not an integer or the sum overflows.
pub fn sum_ints(target: Value, source: Value, _: &Options) -> MergeResult<Value> {
    let (Some(lhs), Some(rhs)) = (target.as_i64(), source.as_i64()) else {
        return Err(MergeError::type_mismatch(&target, &source));
    };
    let sum = lhs
        .checked_add(rhs)
        .ok_or_else(|| MergeError::custom("integer overflow"))?;
    Ok(match target {
        Value::Number(_) => Value::Number(Number::from(sum)),
        _ => Value::Int(sum),
    })
}

/// Counts how often the wrapped default behaviour runs.
#[derive(Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Number of invocations observed so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// A merge function that records the call, then overwrites.
    #[must_use]
    pub fn func(
        &self,
    ) -> impl Fn(Value, Value, &Options) -> MergeResult<Value> + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        move |_: Value, source: Value, _: &Options| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(source)
        }
    }
}
