use studydeck_core::{checksum, dehexify_id, field_checksum, hexify_id, ids_to_str, IdError};

#[test]
fn hexify_reinterprets_negative_ids_as_unsigned() {
    assert_eq!(hexify_id(-1), "ffffffffffffffff");
    assert_eq!(hexify_id(0), "0");
    assert_eq!(hexify_id(255), "ff");
    assert_eq!(hexify_id(i64::MIN), "8000000000000000");
}

#[test]
fn dehexify_reinterprets_upper_half_as_negative() {
    assert_eq!(dehexify_id("ffffffffffffffff"), Ok(-1));
    assert_eq!(dehexify_id("7fffffffffffffff"), Ok(i64::MAX));
    assert_eq!(dehexify_id(" 0x1A "), Ok(26));
}

#[test]
fn ids_round_trip_through_hex() {
    for id in [i64::MIN, -1_234_567_890_123, -1, 0, 1, 1_700_000_000_000, i64::MAX] {
        assert_eq!(dehexify_id(&hexify_id(id)), Ok(id));
    }
}

#[test]
fn dehexify_rejects_non_hex_input() {
    let err = dehexify_id("not-hex").unwrap_err();
    assert!(matches!(err, IdError::InvalidHex { ref input, .. } if input == "not-hex"));
    assert_eq!(dehexify_id(""), Err(IdError::Empty));
}

#[test]
fn ids_to_str_renders_sql_style_list() {
    assert_eq!(ids_to_str(&[1, -2, 3]), "(1,-2,3)");
    assert_eq!(ids_to_str(&[]), "()");
}

#[test]
fn checksum_is_md5_hex() {
    assert_eq!(checksum("hello"), "5d41402abc4b2a76b9719d911017c592");
    assert_eq!(checksum(b""), "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn field_checksum_is_pinned() {
    assert_eq!(field_checksum("hello"), 1_564_557_354);
    assert_eq!(field_checksum(""), 3_558_706_393);
    assert_eq!(field_checksum("\u{65e5}\u{672c}"), 1_304_351_462);
}
