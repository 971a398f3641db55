//! Unit tests for the value tree and its type descriptors.

use rstest::rstest;

use super::*;

struct Baz;

#[rstest]
#[case(Value::Nil, true)]
#[case(Value::Mapping(Mapping::nil(ValueType::Any)), true)]
#[case(Value::Sequence(Sequence::nil(ValueType::Int)), true)]
#[case(Value::Optional(Optional::none(ValueType::String)), true)]
#[case(Value::Handle(Handle::none::<u8>()), true)]
#[case(Value::Mapping(Mapping::dynamic()), false)]
#[case(Value::Sequence(Sequence::new(ValueType::Int)), false)]
#[case(Value::Optional(Optional::some(ValueType::Int, Value::Int(0))), false)]
#[case(Value::Handle(Handle::new(0_u8)), false)]
#[case(Value::Int(0), false)]
#[case(Value::from(""), false)]
#[case(Value::Bool(false), false)]
#[case(Value::Number(Number::from(0_i64)), false)]
fn classifies_emptiness(#[case] value: Value, #[case] empty: bool) {
    assert_eq!(value.is_nil(), empty);
}

#[rstest]
#[case(Value::Int(1), "int")]
#[case(Value::Uint(1), "uint")]
#[case(Value::Float(1.0), "float")]
#[case(Value::Number(Number::from(0.5)), "number")]
#[case(Value::from("x"), "string")]
#[case(Value::Nil, "nil")]
#[case(Value::Mapping(Mapping::dynamic()), "map<string, any>")]
#[case(Value::Sequence(Sequence::new(ValueType::Int)), "seq<int>")]
#[case(Value::Optional(Optional::none(ValueType::String)), "option<string>")]
#[case(
    Value::Record(Record::new(RecordType::of::<Baz>("Baz"), Vec::new())),
    "Baz"
)]
fn names_types(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(value.type_name(), expected);
}

#[rstest]
fn record_types_compare_by_path() {
    let ours = RecordType::of::<Baz>("Baz");
    let theirs = RecordType::new("Baz", "elsewhere::Baz");
    assert_ne!(ours, theirs);
    assert_eq!(ours.to_string(), theirs.to_string());
}

#[rstest]
fn kind_matches_value_type_kind() {
    let samples = [
        Value::Bool(true),
        Value::Int(1),
        Value::from("x"),
        Value::Mapping(Mapping::dynamic()),
        Value::Sequence(Sequence::new(ValueType::Any)),
        Value::Handle(Handle::new(1_u32)),
    ];
    for sample in samples {
        assert_eq!(sample.kind(), sample.value_type().kind());
    }
    assert_eq!(Value::Nil.kind(), None);
}

#[rstest]
fn nil_mapping_materialises_on_insert() {
    let mut mapping = Mapping::nil(ValueType::Int);
    assert!(mapping.is_empty());
    assert_eq!(mapping.insert("a", 1), None);
    assert!(!mapping.is_nil());
    assert_eq!(mapping.get("a"), Some(&Value::Int(1)));
}

#[rstest]
fn sequence_extend_keeps_order_and_duplicates() {
    let mut items = Sequence::from_items(ValueType::Int, [1, 2]);
    items.extend(Sequence::from_items(ValueType::Int, [2, 3]));
    assert_eq!(
        items.items(),
        &[Value::Int(1), Value::Int(2), Value::Int(2), Value::Int(3)]
    );
}

#[rstest]
fn take_field_reports_missing_fields() {
    let mut record = Record::new(
        RecordType::of::<Baz>("Baz"),
        vec![Field::new("Foo", ValueType::Int, Value::Int(1))],
    );
    assert!(matches!(record.take_field("Foo"), Ok(Value::Int(1))));
    assert_eq!(record.get("Foo"), Some(&Value::Nil));
    let err = record.take_field("Bar").err().map(|e| e.to_string());
    assert_eq!(err.as_deref(), Some("record of type Baz has no field `Bar`"));
}

#[rstest]
fn handles_compare_by_identity() {
    let handle = Handle::new(String::from("shared"));
    let copy = handle.clone();
    assert_eq!(handle, copy);
    assert_ne!(handle, Handle::new(String::from("shared")));
    assert_eq!(
        Value::Handle(handle).as_handle::<String>().map(String::as_str),
        Some("shared")
    );
}

#[rstest]
fn pointer_descends_through_records() {
    let record = Record::new(
        RecordType::of::<Baz>("Baz"),
        vec![Field::new(
            "inner",
            ValueType::Any,
            Value::Mapping(Mapping::from_entries(ValueType::Any, [("k", 1)])),
        )],
    );
    let value = Value::Optional(Optional::some(
        ValueType::Record(record.record_type()),
        Value::Record(record),
    ));
    assert_eq!(value.pointer(&["inner", "k"]), Some(&Value::Int(1)));
}

#[rstest]
#[case(Number::from(1_i64), Some(1), Some(1), true)]
#[case(Number::from(-1_i64), Some(-1), None, true)]
#[case(Number::from(u64::MAX), None, Some(u64::MAX), true)]
#[case(Number::from(0.5), None, None, false)]
fn document_numbers_report_integer_views(
    #[case] number: Number,
    #[case] signed: Option<i64>,
    #[case] unsigned: Option<u64>,
    #[case] integer: bool,
) {
    assert_eq!(number.as_i64(), signed);
    assert_eq!(number.as_u64(), unsigned);
    assert_eq!(number.is_integer(), integer);
    assert_eq!(Value::Number(number).as_i64(), signed);
}
