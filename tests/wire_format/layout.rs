use crate::common::*;

#[derive(Pack, Debug, Default, PartialEq)]
struct Inner {
    a: u16,
    #[binpack("endian=big")]
    b: u16,
}

#[derive(Pack, Debug, Default, PartialEq)]
struct Outer {
    #[binpack("endian=little")]
    inner: Inner,
    c: u16,
}

#[derive(Pack, Debug, Default, PartialEq)]
struct Overflow {
    id: u8,
    #[binpack("lenprefix=uint8")]
    data: Vec<u8>,
    tail: u8,
}

macro_rules! prefixed {
    ($name:ident, $annotation:tt) => {
        #[derive(Pack, Debug, Default, PartialEq)]
        struct $name {
            #[binpack($annotation)]
            items: Vec<u16>,
        }
    };
}

prefixed!(Int8Items, "lenprefix=int8");
prefixed!(Uint8Items, "lenprefix=uint8");
prefixed!(Int16Items, "lenprefix=int16");
prefixed!(Uint16Items, "lenprefix=uint16");
prefixed!(Int32Items, "lenprefix=int32");
prefixed!(Uint32Items, "lenprefix=uint32");
prefixed!(Int64Items, "lenprefix=int64");
prefixed!(Uint64Items, "lenprefix=uint64");

#[test]
fn byte_order_scoping_example() {
    let value = Scoped {
        a: vec![0x1122, 0x3344],
        b: 0x11223344,
    };
    let bytes = to_vec(ByteOrder::Big, &value).unwrap();
    assert_eq!(bytes, [0x02, 0x00, 0x22, 0x11, 0x44, 0x33, 0x11, 0x22, 0x33, 0x44]);
}

#[test]
fn override_scopes_nest() {
    let value = Outer {
        inner: Inner { a: 0x0102, b: 0x0304 },
        c: 0x0506,
    };
    let bytes = to_vec(ByteOrder::Big, &value).unwrap();
    assert_eq!(bytes, [0x02, 0x01, 0x03, 0x04, 0x05, 0x06]);
    assert_eq!(roundtrip(ByteOrder::Big, &value), value);

    // Ambient little leaves `inner` unchanged and flips `c`.
    let bytes = to_vec(ByteOrder::Little, &value).unwrap();
    assert_eq!(bytes, [0x02, 0x01, 0x03, 0x04, 0x06, 0x05]);
}

#[test]
fn composites_have_no_padding() {
    let p = Point { x: 1, y: -2 };
    assert_eq!(
        to_vec(ByteOrder::Big, &p).unwrap(),
        [0, 0, 0, 1, 0xFF, 0xFF, 0xFF, 0xFE]
    );
    assert_eq!(
        to_vec(ByteOrder::Little, &p).unwrap(),
        [1, 0, 0, 0, 0xFE, 0xFF, 0xFF, 0xFF]
    );
}

#[test]
fn fixed_arrays_have_no_prefix() {
    assert_eq!(to_vec(ByteOrder::Big, &[1u16, 2, 3]).unwrap(), [0, 1, 0, 2, 0, 3]);
    assert_eq!(to_vec(ByteOrder::Big, &[9u8, 8, 7]).unwrap(), [9, 8, 7]);
    assert_eq!(to_vec(ByteOrder::Big, &[Pair(1, 1); 2]).unwrap(), [0, 1, 1, 0, 0, 1, 1, 0]);
}

#[test]
fn floats_use_ieee_bits() {
    assert_eq!(to_vec(ByteOrder::Big, &1.0f32).unwrap(), [0x3F, 0x80, 0x00, 0x00]);
    assert_eq!(to_vec(ByteOrder::Little, &-2.0f64).unwrap(), (-2.0f64).to_le_bytes());

    let nan = f64::from_bits(0x7FF8_0000_0000_0001);
    let back: f64 = roundtrip(ByteOrder::Big, &nan);
    assert_eq!(back.to_bits(), nan.to_bits());
}

#[test]
fn tuple_and_unit_structs() {
    assert_eq!(to_vec(ByteOrder::Big, &Pair(0x0102, 0x0304)).unwrap(), [1, 2, 4, 3]);
    assert_eq!(roundtrip(ByteOrder::Little, &Pair(5, 6)), Pair(5, 6));

    assert!(to_vec(ByteOrder::Big, &Marker).unwrap().is_empty());
    let _: Marker = from_slice(&[], ByteOrder::Big).unwrap();
}

#[test]
fn generic_composite() {
    let value = Tagged {
        tag: 3,
        inner: Point { x: 4, y: 5 },
    };
    assert_eq!(
        to_vec(ByteOrder::Big, &value).unwrap(),
        [3, 0, 0, 0, 4, 0, 0, 0, 5]
    );
    assert_eq!(roundtrip(ByteOrder::Little, &value), value);
}

#[test]
fn every_prefix_kind_has_its_width() {
    fn check<T: Pack + Default + std::fmt::Debug + PartialEq>(value: T, width: usize) {
        for order in ORDERS {
            let bytes = to_vec(order, &value).unwrap();
            assert_eq!(bytes.len(), width + 4, "{:?}", order);
            assert_eq!(roundtrip(order, &value), value);
        }
    }

    let items = vec![0xAAAA, 0x5555];
    check(Int8Items { items: items.clone() }, 1);
    check(Uint8Items { items: items.clone() }, 1);
    check(Int16Items { items: items.clone() }, 2);
    check(Uint16Items { items: items.clone() }, 2);
    check(Int32Items { items: items.clone() }, 4);
    check(Uint32Items { items: items.clone() }, 4);
    check(Int64Items { items: items.clone() }, 8);
    check(Uint64Items { items }, 8);
}

#[test]
fn prefix_value_follows_member_order() {
    let bytes = to_vec(ByteOrder::Big, &Int32Items { items: vec![7] }).unwrap();
    assert_eq!(bytes, [0, 0, 0, 1, 0, 7]);
}

#[test]
fn overflow_writes_nothing_for_the_member() {
    let value = Overflow {
        id: 9,
        data: vec![0; 256],
        tail: 1,
    };
    let mut buf = Vec::new();
    let err = encode(&mut buf, ByteOrder::Big, &value).unwrap_err();
    match err {
        Error::SequenceTooLarge { field, len, kind, max } => {
            assert_eq!(field, "data");
            assert_eq!(len, 256);
            assert_eq!(kind, PrefixKind::Uint8);
            assert_eq!(max, 255);
        }
        other => panic!("unexpected: {:?}", other),
    }
    // The member before the failure stays written.
    assert_eq!(buf, [9]);

    let at_max = Overflow {
        id: 9,
        data: vec![0; 255],
        tail: 1,
    };
    assert_eq!(to_vec(ByteOrder::Big, &at_max).unwrap().len(), 1 + 1 + 255 + 1);
}

#[test]
fn signed_prefix_max() {
    assert!(to_vec(ByteOrder::Big, &Int8Items { items: vec![0; 127] }).is_ok());
    let err = to_vec(ByteOrder::Big, &Int8Items { items: vec![0; 128] }).unwrap_err();
    assert!(matches!(err, Error::SequenceTooLarge { max: 127, .. }));
}

#[test]
fn write_errors_surface_as_io() {
    let mut sink = FailingSink::new(3);
    let err = encode(&mut sink, ByteOrder::Big, &Point { x: 1, y: 2 }).unwrap_err();
    assert!(matches!(err, Error::Write(_)));
    assert!(err.is_io());
}
