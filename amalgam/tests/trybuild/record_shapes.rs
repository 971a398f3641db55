//! Trybuild fixture deriving `Record` for named, tuple, unit and generic
//! structs.

use amalgam::{Record, Reflect, merge};

#[derive(Clone, Debug, Record)]
struct Named {
    label: String,
    #[merge(exported)]
    weight: f64,
}

#[derive(Clone, Debug, Record)]
struct Pair(pub u8, pub Option<String>);

#[derive(Clone, Debug, Record)]
struct Marker;

#[derive(Clone, Debug, Record)]
struct Wrapper<T> {
    pub inner: T,
    pub history: Vec<T>,
}

fn main() {
    let mut named = Named {
        label: String::from("a"),
        weight: 1.0,
    };
    let _ = merge(
        &mut named,
        Named {
            label: String::from("b"),
            weight: 2.0,
        },
        None,
    );

    let mut pair = Pair(1, None);
    let _ = merge(&mut pair, Pair(2, Some(String::from("two"))), None);

    let mut marker = Marker;
    let _ = merge(&mut marker, Marker, None);

    let mut wrapper = Wrapper {
        inner: Pair(0, None),
        history: Vec::new(),
    };
    let _ = merge(
        &mut wrapper,
        Wrapper {
            inner: Pair(1, None),
            history: vec![Pair(2, None)],
        },
        None,
    );
    let _: amalgam::ValueType = <Wrapper<bool> as Reflect>::value_type();
}
