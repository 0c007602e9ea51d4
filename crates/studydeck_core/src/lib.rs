//! Text and time utilities shared by the StudyDeck note and review layers.
//! This crate is the single source of truth for tag, field and span invariants.

pub mod checksum;
pub mod fields;
pub mod html;
pub mod ids;
pub mod locale;
pub mod logging;
pub mod span;
pub mod tags;

pub use checksum::{checksum, field_checksum};
pub use fields::{join_fields, split_fields, FIELD_SEPARATOR};
pub use html::{decode_entities, minimize_html, strip_html, strip_html_media};
pub use ids::{dehexify_id, hexify_id, ids_to_str, IdError};
pub use locale::{
    fmt_float, fmt_percentage, ConfiguredLocale, EnglishLocale, LocaleConfig, LocaleConfigError,
    LocaleFormatter, PhraseTable, UnitPhrases,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use span::{
    convert_seconds_to, format_span, int_time, optimal_period, PeriodUnit, SpanFormatter,
    SpanOptions,
};
pub use tags::{add_tags, canonify_tags, del_tags, has_tag, join_tags, parse_tags, TagSet};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
