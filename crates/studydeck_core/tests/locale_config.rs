use std::io::Write;
use studydeck_core::{
    fmt_float, fmt_percentage, ConfiguredLocale, EnglishLocale, LocaleConfig, LocaleConfigError,
    PeriodUnit, SpanFormatter, SpanOptions,
};

const GERMAN: &str = r#"{
    "decimal_separator": ",",
    "grouping_separator": ".",
    "phrases": {
        "days": {
            "one": "{n} Tag",
            "other": "{n} Tage",
            "after_other": "{n} Tagen",
            "short": "{n} T"
        }
    }
}"#;

#[test]
fn configured_locale_overrides_separators_and_phrases() {
    let locale = ConfiguredLocale::new(LocaleConfig::from_json_str(GERMAN).unwrap()).unwrap();
    let formatter = SpanFormatter::new(locale);

    assert_eq!(formatter.format(216_000.0, &SpanOptions::default()), "2,5 Tage");
    assert_eq!(
        formatter.format(216_000.0, &SpanOptions::default().after()),
        "2,5 Tagen"
    );
    assert_eq!(formatter.format(216_000.0, &SpanOptions::short()), "2,5 T");
    assert_eq!(formatter.format(5_400.0, &SpanOptions::default()), "1,5 hours");
    assert_eq!(fmt_float(formatter.locale(), 1_234_567.891, 2), "1.234.567,89");
}

#[test]
fn default_config_matches_english() {
    let configured = ConfiguredLocale::default();
    for seconds in [1.0, 90.0, 7_300.0, 400_000.0, 5_000_000.0, 40_000_000.0] {
        for options in [SpanOptions::default(), SpanOptions::short()] {
            assert_eq!(
                SpanFormatter::new(configured.clone()).format(seconds, &options),
                SpanFormatter::new(EnglishLocale).format(seconds, &options)
            );
        }
    }
}

#[test]
fn number_helpers_use_locale_rendering() {
    assert_eq!(fmt_float(&EnglishLocale, 2.0 / 3.0, 2), "0.67");
    assert_eq!(fmt_percentage(&EnglishLocale, 12.34, 1), "12.3%");
    let locale = ConfiguredLocale::new(LocaleConfig::from_json_str(GERMAN).unwrap()).unwrap();
    assert_eq!(fmt_percentage(&locale, 99.5, 1), "99,5%");
}

#[test]
fn missing_placeholder_is_rejected_with_field_name() {
    let err = LocaleConfig::from_json_str(
        r#"{"phrases": {"hours": {"one": "{n} hour", "other": "{n} hours", "short": "h"}}}"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        LocaleConfigError::MissingPlaceholder {
            unit: PeriodUnit::Hours,
            field: "short"
        }
    ));
}

#[test]
fn empty_decimal_separator_is_rejected() {
    let err = LocaleConfig::from_json_str(r#"{"decimal_separator": ""}"#).unwrap_err();
    assert!(matches!(err, LocaleConfigError::EmptyDecimalSeparator));
}

#[test]
fn load_reads_config_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(GERMAN.as_bytes()).unwrap();

    let config = LocaleConfig::load(file.path()).unwrap();
    assert_eq!(config.decimal_separator, ",");
    assert!(config.phrases.get(PeriodUnit::Days).is_some());
    assert!(config.phrases.get(PeriodUnit::Years).is_none());
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = LocaleConfig::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, LocaleConfigError::Io(_)));
}
