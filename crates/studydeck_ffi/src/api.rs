//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the core text/time utilities to Dart via FRB.
//! - Hold the host-supplied locale used by span and number formatting.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Errors come back as strings or envelopes, never as panics.
//! - Until `configure_locale` succeeds, formatting uses English defaults.

use log::warn;
use std::sync::{OnceLock, RwLock};
use studydeck_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ConfiguredLocale,
    LocaleConfig, SpanFormatter, SpanOptions,
};

static ACTIVE_LOCALE: OnceLock<RwLock<ConfiguredLocale>> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Replaces the active locale from a JSON document.
///
/// # FFI contract
/// - Returns empty string on success and error message on failure.
/// - A rejected document leaves the previous locale active.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_locale(config_json: String) -> String {
    let locale = match LocaleConfig::from_json_str(config_json.as_str())
        .and_then(ConfiguredLocale::new)
    {
        Ok(locale) => locale,
        Err(err) => {
            warn!("event=locale_configure module=ffi status=error error={err}");
            return err.to_string();
        }
    };

    let slot = ACTIVE_LOCALE.get_or_init(|| RwLock::new(ConfiguredLocale::default()));
    let mut guard = match slot.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = locale;
    String::new()
}

/// Formats a span of seconds (`"2.3 days"`, `"5m"`).
///
/// # FFI contract
/// - Sync call, pure apart from reading the active locale.
#[flutter_rust_bridge::frb(sync)]
pub fn format_span(
    seconds: f64,
    pad: u32,
    decimal_places: u32,
    short: bool,
    after: bool,
) -> String {
    let options = SpanOptions {
        pad: pad as usize,
        decimal_places: decimal_places as usize,
        short,
        after,
    };
    with_locale(|locale| SpanFormatter::new(locale.clone()).format(seconds, &options))
}

/// Formats a float with the active locale's decimal separator.
#[flutter_rust_bridge::frb(sync)]
pub fn fmt_float(value: f64, decimal_places: u32) -> String {
    with_locale(|locale| studydeck_core::fmt_float(locale, value, decimal_places as usize))
}

/// Formats a float followed by `%`.
#[flutter_rust_bridge::frb(sync)]
pub fn fmt_percentage(value: f64, decimal_places: u32) -> String {
    with_locale(|locale| studydeck_core::fmt_percentage(locale, value, decimal_places as usize))
}

#[flutter_rust_bridge::frb(sync)]
pub fn strip_html(html: String) -> String {
    studydeck_core::strip_html(html.as_str())
}

#[flutter_rust_bridge::frb(sync)]
pub fn strip_html_media(html: String) -> String {
    studydeck_core::strip_html_media(html.as_str())
}

#[flutter_rust_bridge::frb(sync)]
pub fn minimize_html(html: String) -> String {
    studydeck_core::minimize_html(html.as_str())
}

/// Canonical wire form for a tag list.
#[flutter_rust_bridge::frb(sync)]
pub fn canonify_tags(tags: Vec<String>) -> String {
    studydeck_core::canonify_tags(&tags)
}

#[flutter_rust_bridge::frb(sync)]
pub fn add_tags(to_add: String, tags: String) -> String {
    studydeck_core::add_tags(to_add.as_str(), tags.as_str())
}

#[flutter_rust_bridge::frb(sync)]
pub fn del_tags(to_remove: String, tags: String) -> String {
    studydeck_core::del_tags(to_remove.as_str(), tags.as_str())
}

/// Case-insensitive membership test against a wire-form tag string.
#[flutter_rust_bridge::frb(sync)]
pub fn has_tag(tag: String, tags: String) -> bool {
    studydeck_core::has_tag(tag.as_str(), &studydeck_core::parse_tags(tags.as_str()))
}

#[flutter_rust_bridge::frb(sync)]
pub fn hexify_id(id: i64) -> String {
    studydeck_core::hexify_id(id)
}

/// Result envelope for [`dehexify_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseResponse {
    /// Whether parsing succeeded.
    pub ok: bool,
    /// Parsed signed id on success.
    pub id: Option<i64>,
    /// Empty on success, error description otherwise.
    pub message: String,
}

/// Parses an unsigned hex id back into its signed form.
///
/// # FFI contract
/// - Never panics; invalid input yields `ok=false` with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn dehexify_id(hex: String) -> IdParseResponse {
    match studydeck_core::dehexify_id(hex.as_str()) {
        Ok(id) => IdParseResponse {
            ok: true,
            id: Some(id),
            message: String::new(),
        },
        Err(err) => IdParseResponse {
            ok: false,
            id: None,
            message: err.to_string(),
        },
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn field_checksum(text: String) -> u32 {
    studydeck_core::field_checksum(text.as_str())
}

#[flutter_rust_bridge::frb(sync)]
pub fn join_fields(fields: Vec<String>) -> String {
    studydeck_core::join_fields(&fields)
}

#[flutter_rust_bridge::frb(sync)]
pub fn split_fields(joined: String) -> Vec<String> {
    studydeck_core::split_fields(joined.as_str())
}

fn with_locale<T>(f: impl FnOnce(&ConfiguredLocale) -> T) -> T {
    let slot = ACTIVE_LOCALE.get_or_init(|| RwLock::new(ConfiguredLocale::default()));
    let guard = match slot.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&guard)
}
