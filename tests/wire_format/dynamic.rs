use crate::common::*;
use binpack::{FieldShape, ScalarKind};

fn point_value(p: &Point) -> Value {
    Value::Composite(vec![p.x.into(), p.y.into()])
}

fn track_value(t: &Track) -> Value {
    Value::Composite(vec![
        t.id.into(),
        Value::Bytes(t.name.clone()),
        Value::Sequence(t.points.iter().map(point_value).collect()),
        point_value(&t.origin),
        Value::Sequence(t.corners.iter().map(point_value).collect()),
        Value::Bytes(t.digest.to_vec()),
        Value::Absent,
        Value::Absent,
        t.ratio.into(),
    ])
}

#[test]
fn derived_shape_describes_layout() {
    let shape = Track::shape();
    assert_eq!(
        shape.to_string(),
        "{id: u64, name: bytes, points: [{x: i32, y: i32}], origin: {x: i32, y: i32}, \
         corners: [{x: i32, y: i32}; 2], digest: bytes[4], cached: Option<String>, \
         _reserved: bool, ratio: f64}"
    );
    shape.validate().unwrap();

    match &shape {
        Shape::Composite(fields) => {
            assert_eq!(fields.len(), 9);
            assert!(fields[6].is_skipped());
            assert!(fields[7].is_skipped());
            assert_eq!(fields[2].annotation.prefix_kind("points").unwrap(), PrefixKind::Uint32);
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn dynamic_matches_typed_bytes() {
    let track = sample_track();
    let shape = Track::shape();
    let value = track_value(&track);

    for order in ORDERS {
        let typed = to_vec(order, &track).unwrap();
        let mut dynamic = Vec::new();
        encode_value(&mut dynamic, Config::new(order), &shape, &value).unwrap();
        assert_eq!(dynamic, typed, "{:?}", order);

        let mut back = Value::Absent;
        decode_value(&mut cursor(&typed), Config::new(order), &shape, &mut back).unwrap();
        assert_eq!(back, value);
    }
}

#[test]
fn scoping_example_through_shape() {
    let value = Value::Composite(vec![
        Value::Sequence(vec![0x1122u16.into(), 0x3344u16.into()]),
        0x11223344u32.into(),
    ]);
    let mut buf = Vec::new();
    encode_value(&mut buf, Config::new(ByteOrder::Big), &Scoped::shape(), &value).unwrap();
    assert_eq!(buf, [0x02, 0x00, 0x22, 0x11, 0x44, 0x33, 0x11, 0x22, 0x33, 0x44]);
}

#[test]
fn validate_reports_layout_errors_up_front() {
    let nested = Shape::Composite(vec![FieldShape::parse(
        "rows",
        "lenprefix=uint8",
        Shape::variable(Shape::variable(Shape::Scalar(ScalarKind::U16))),
    )]);
    assert!(matches!(nested.validate(), Err(Error::NestedSequence(_))));

    let missing = Shape::Composite(vec![FieldShape::parse(
        "rows",
        "",
        Shape::variable(Shape::Scalar(ScalarKind::U16)),
    )]);
    assert!(matches!(missing.validate(), Err(Error::MissingLengthPrefix { .. })));

    let opaque = Shape::Composite(vec![FieldShape::parse(
        "flag",
        "",
        Shape::Opaque("bool".to_string()),
    )]);
    assert!(matches!(opaque.validate(), Err(Error::UnsupportedShape(_))));
}

#[test]
fn value_must_match_shape() {
    let mut buf = Vec::new();
    let err = encode_value(
        &mut buf,
        Config::default(),
        &Point::shape(),
        &Value::Composite(vec![1i32.into(), 2u32.into()]),
    )
    .unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
    // The first member matched and was written.
    assert_eq!(buf, [0, 0, 0, 1]);
}

#[test]
fn truncated_input_keeps_skipped_values() {
    let shape = Shape::Composite(vec![
        FieldShape::parse("keep", "-", Shape::Scalar(ScalarKind::U8)),
        FieldShape::parse("n", "", Shape::Scalar(ScalarKind::U32)),
    ]);
    let mut slot = Value::Composite(vec![42u8.into(), 0u32.into()]);
    let err = decode_value(&mut cursor(&[1, 2]), Config::default(), &shape, &mut slot).unwrap_err();
    assert!(matches!(err, Error::ShortRead { .. }));
    assert_eq!(slot, Value::Composite(vec![42u8.into(), 0u32.into()]));
}

#[derive(Pack, Debug, Default, PartialEq)]
struct Payload {
    #[binpack("lenprefix=uint32")]
    data: Vec<u8>,
}

#[test]
fn hand_built_byte_sequence_matches_typed() {
    let typed = to_vec(ByteOrder::Big, &Payload { data: vec![1, 2, 3] }).unwrap();

    let shape = Shape::Composite(vec![FieldShape::parse(
        "data",
        "lenprefix=uint32",
        Shape::Variable(Box::new(Shape::Scalar(ScalarKind::U8))),
    )]);
    let value = Value::Composite(vec![Value::Bytes(vec![1, 2, 3])]);
    let mut buf = Vec::new();
    encode_value(&mut buf, Config::default(), &shape, &value).unwrap();
    assert_eq!(buf, typed);

    let mut slot = Value::Absent;
    decode_value(&mut cursor(&typed), Config::default(), &shape, &mut slot).unwrap();
    assert_eq!(slot, value);
}
