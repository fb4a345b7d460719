use crate::common::*;

#[derive(Pack, Debug, Default, PartialEq)]
struct Samples {
    #[binpack("lenprefix=uint16")]
    values: Vec<u32>,
}

#[derive(Pack, Debug, Default, PartialEq)]
struct Blob {
    #[binpack("lenprefix=uint32")]
    data: Vec<u8>,
}

#[derive(Pack, Debug, Default, PartialEq)]
struct Signed {
    #[binpack("lenprefix=int16")]
    values: Vec<u8>,
}

fn samples(values: &[u32]) -> Vec<u8> {
    to_vec(
        ByteOrder::Big,
        &Samples {
            values: values.to_vec(),
        },
    )
    .unwrap()
}

#[test]
fn zero_capacity_allocates() {
    let mut slot = Samples::default();
    decode(&mut cursor(&samples(&[1, 2, 3])), ByteOrder::Big, &mut slot).unwrap();
    assert_eq!(slot.values, [1, 2, 3]);
}

#[test]
fn sufficient_capacity_keeps_storage() {
    let mut slot = Samples {
        values: Vec::with_capacity(16),
    };
    slot.values.extend([9, 9, 9, 9, 9]);
    let ptr = slot.values.as_ptr();

    decode(&mut cursor(&samples(&[1, 2, 3])), ByteOrder::Big, &mut slot).unwrap();
    assert_eq!(slot.values, [1, 2, 3]);
    assert_eq!(slot.values.as_ptr(), ptr);
    assert_eq!(slot.values.capacity(), 16);

    // Growing within capacity reuses it too.
    decode(&mut cursor(&samples(&[4; 10])), ByteOrder::Big, &mut slot).unwrap();
    assert_eq!(slot.values, [4; 10]);
    assert_eq!(slot.values.as_ptr(), ptr);
}

#[test]
fn insufficient_capacity_is_an_error() {
    let mut slot = Samples {
        values: Vec::with_capacity(2),
    };
    slot.values.push(7);

    let mut source = cursor(&samples(&[1, 2, 3]));
    let err = decode(&mut source, ByteOrder::Big, &mut slot).unwrap_err();
    match err {
        Error::InsufficientCapacity { field, len, capacity } => {
            assert_eq!(field, "values");
            assert_eq!(len, 3);
            assert_eq!(capacity, 2);
        }
        other => panic!("unexpected: {:?}", other),
    }
    // Only the prefix was consumed and the slot is untouched.
    assert_eq!(source.position(), 2);
    assert_eq!(slot.values, [7]);
}

#[test]
fn truncated_input_is_short_read() {
    let bytes = samples(&[1, 2]);
    let err = from_slice::<Samples>(&bytes[..bytes.len() - 1], ByteOrder::Big).unwrap_err();
    assert!(matches!(err, Error::ShortRead { expected: 4 }));

    let err = from_slice::<Samples>(&[0], ByteOrder::Big).unwrap_err();
    assert!(matches!(err, Error::ShortRead { expected: 2 }));
}

#[test]
fn byte_payload_short_read_reports_full_length() {
    let err = from_slice::<Signed>(&[0, 4, 1, 2], ByteOrder::Big).unwrap_err();
    assert!(matches!(err, Error::ShortRead { expected: 4 }));
}

#[test]
fn negative_prefix_is_invalid() {
    let err = from_slice::<Signed>(&[0xFF, 0xFE], ByteOrder::Big).unwrap_err();
    assert!(matches!(err, Error::InvalidLength { value: -2, .. }));
}

#[test]
fn prefix_over_limit_is_rejected_before_allocating() {
    let bytes = samples(&[0; 101]);
    let cfg = Config::new(ByteOrder::Big).with_limits(Limits::with_small_limits());

    let mut slot = Samples::default();
    let err = decode_with(&mut cursor(&bytes), cfg, &mut slot).unwrap_err();
    assert!(matches!(err, Error::LimitExceeded { len: 101, max: 100, .. }));
    assert_eq!(slot.values.capacity(), 0);

    let mut slot = Samples::default();
    decode_with(&mut cursor(&bytes), Config::new(ByteOrder::Big), &mut slot).unwrap();
    assert_eq!(slot.values.len(), 101);
}

#[test]
fn sequences_past_sixteen_mebi_round_trip() {
    let blob = Blob {
        data: vec![7u8; 16 * 1024 * 1024 + 1],
    };
    let bytes = to_vec(ByteOrder::Big, &blob).unwrap();
    let back: Blob = from_slice(&bytes, ByteOrder::Big).unwrap();
    assert_eq!(back, blob);
}

#[test]
fn pre_sized_slot_is_not_limited() {
    let bytes = samples(&[5; 150]);
    let cfg = Config::new(ByteOrder::Big).with_limits(Limits::with_small_limits());

    let mut slot = Samples {
        values: Vec::with_capacity(200),
    };
    let ptr = slot.values.as_ptr();
    decode_with(&mut cursor(&bytes), cfg, &mut slot).unwrap();
    assert_eq!(slot.values, vec![5; 150]);
    assert_eq!(slot.values.as_ptr(), ptr);
}

#[test]
fn trailing_bytes_rejected_by_from_slice() {
    let mut bytes = samples(&[1]);
    bytes.push(0);
    let err = from_slice::<Samples>(&bytes, ByteOrder::Big).unwrap_err();
    assert!(matches!(err, Error::TrailingBytes(1)));

    // Streaming decode stops where the value ends.
    let mut source = cursor(&bytes);
    let mut slot = Samples::default();
    decode(&mut source, ByteOrder::Big, &mut slot).unwrap();
    assert_eq!(source.position() as usize, bytes.len() - 1);
}

#[test]
fn nested_vec_members_reuse_independently() {
    let track = sample_track();
    let bytes = to_vec(ByteOrder::Little, &track).unwrap();

    let mut slot = Track {
        points: Vec::with_capacity(8),
        name: Vec::with_capacity(1),
        ..Track::default()
    };
    let err = decode(&mut cursor(&bytes), ByteOrder::Little, &mut slot).unwrap_err();
    assert!(matches!(err, Error::InsufficientCapacity { ref field, .. } if field == "name"));

    slot.name = Vec::new();
    let points_ptr = slot.points.as_ptr();
    decode(&mut cursor(&bytes), ByteOrder::Little, &mut slot).unwrap();
    assert_eq!(slot.name, track.name);
    assert_eq!(slot.points, track.points);
    assert_eq!(slot.points.as_ptr(), points_ptr);
}
