use studydeck_core::{join_fields, split_fields, FIELD_SEPARATOR};

#[test]
fn fields_join_with_unit_separator() {
    assert_eq!(join_fields(&["front", "back"]), "front\u{1f}back");
    assert_eq!(FIELD_SEPARATOR, '\u{1f}');
}

#[test]
fn split_inverts_join_including_empty_fields() {
    let fields = vec!["", "back", ""];
    assert_eq!(split_fields(&join_fields(&fields)), fields);
}

#[test]
fn empty_string_is_one_empty_field() {
    assert_eq!(split_fields(""), vec![String::new()]);
}
