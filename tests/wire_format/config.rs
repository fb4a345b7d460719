use crate::common::*;

#[test]
fn config_from_json_drives_decoding() {
    let cfg: Config =
        serde_json::from_str(r#"{"byte_order":"little","limits":{"max_sequence_len":2}}"#).unwrap();
    cfg.validate().unwrap();

    let value = Scoped {
        a: vec![1, 2, 3],
        b: 7,
    };
    let bytes = to_vec(ByteOrder::Little, &value).unwrap();
    let mut slot = Scoped::default();
    let err = decode_with(&mut cursor(&bytes), cfg, &mut slot).unwrap_err();
    assert!(matches!(err, Error::LimitExceeded { len: 3, max: 2, .. }));
}

#[test]
fn zero_limit_is_invalid() {
    let cfg: Config =
        serde_json::from_str(r#"{"byte_order":"big","limits":{"max_sequence_len":0}}"#).unwrap();
    assert!(cfg.validate().is_err());
}

#[test]
fn byte_order_names() {
    assert_eq!(serde_json::to_string(&ByteOrder::Little).unwrap(), "\"little\"");
    assert_eq!(serde_json::to_string(&PrefixKind::Uint16).unwrap(), "\"uint16\"");
}
