//! Note field packing.
//!
//! Fields of one note are stored as a single string separated by the ASCII
//! unit separator, which never appears in user text.

/// Separator between note fields (0x1F).
pub const FIELD_SEPARATOR: char = '\u{1f}';

pub fn join_fields<S: AsRef<str>>(fields: &[S]) -> String {
    let mut out = String::new();
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            out.push(FIELD_SEPARATOR);
        }
        out.push_str(field.as_ref());
    }
    out
}

/// Inverse of [`join_fields`]. An empty string yields one empty field.
pub fn split_fields(joined: &str) -> Vec<String> {
    joined.split(FIELD_SEPARATOR).map(str::to_string).collect()
}
