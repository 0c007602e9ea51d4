//! Locale collaborator for number rendering and span phrases.
//!
//! # Responsibility
//! - Render decimals with locale separators and a minimum width.
//! - Supply singular/plural, "after" and short phrase templates per unit.
//! - Load locale overrides from JSON configuration.
//!
//! # Invariants
//! - Templates contain the `{n}` placeholder exactly where the number goes.
//! - Formatting never reads process-global locale state.

use crate::span::PeriodUnit;
use log::{error, info};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Placeholder replaced by the rendered number inside phrase templates.
pub const NUMBER_PLACEHOLDER: &str = "{n}";

/// Injected formatting and translation capability.
pub trait LocaleFormatter {
    /// Renders `value` with exactly `places` fractional digits, right-aligned
    /// to at least `pad` characters.
    fn format_decimal(&self, value: f64, pad: usize, places: usize) -> String;

    /// Returns the long phrase template for `unit` matching `count`.
    ///
    /// `after` selects the variant used when the span follows other text.
    fn plural_phrase(&self, unit: PeriodUnit, after: bool, count: i64) -> String;

    /// Returns the abbreviated template for `unit` (never pluralized).
    fn short_phrase(&self, unit: PeriodUnit) -> String;
}

/// Built-in English locale: `.` decimal separator, no digit grouping.
///
/// English after-phrases read the same as the base phrases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishLocale;

impl LocaleFormatter for EnglishLocale {
    fn format_decimal(&self, value: f64, pad: usize, places: usize) -> String {
        render_fixed(value, pad, places, ".", None)
    }

    fn plural_phrase(&self, unit: PeriodUnit, _after: bool, count: i64) -> String {
        english_phrase(unit, count).to_string()
    }

    fn short_phrase(&self, unit: PeriodUnit) -> String {
        format!("{NUMBER_PLACEHOLDER}{}", unit.short_suffix())
    }
}

fn english_phrase(unit: PeriodUnit, count: i64) -> &'static str {
    let one = count == 1;
    match (unit, one) {
        (PeriodUnit::Seconds, true) => "{n} second",
        (PeriodUnit::Seconds, false) => "{n} seconds",
        (PeriodUnit::Minutes, true) => "{n} minute",
        (PeriodUnit::Minutes, false) => "{n} minutes",
        (PeriodUnit::Hours, true) => "{n} hour",
        (PeriodUnit::Hours, false) => "{n} hours",
        (PeriodUnit::Days, true) => "{n} day",
        (PeriodUnit::Days, false) => "{n} days",
        (PeriodUnit::Months, true) => "{n} month",
        (PeriodUnit::Months, false) => "{n} months",
        (PeriodUnit::Years, true) => "{n} year",
        (PeriodUnit::Years, false) => "{n} years",
    }
}

/// Phrase overrides for one period unit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UnitPhrases {
    /// Template used when the count is exactly one.
    pub one: String,
    /// Template used for every other count.
    pub other: String,
    #[serde(default)]
    pub after_one: Option<String>,
    #[serde(default)]
    pub after_other: Option<String>,
    #[serde(default)]
    pub short: Option<String>,
}

impl UnitPhrases {
    fn templates(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("one", Some(self.one.as_str())),
            ("other", Some(self.other.as_str())),
            ("after_one", self.after_one.as_deref()),
            ("after_other", self.after_other.as_deref()),
            ("short", self.short.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|template| (field, template)))
    }
}

/// Per-unit phrase overrides. Units left unset fall back to English.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PhraseTable {
    pub seconds: Option<UnitPhrases>,
    pub minutes: Option<UnitPhrases>,
    pub hours: Option<UnitPhrases>,
    pub days: Option<UnitPhrases>,
    pub months: Option<UnitPhrases>,
    pub years: Option<UnitPhrases>,
}

impl PhraseTable {
    /// Returns overrides configured for `unit`.
    pub fn get(&self, unit: PeriodUnit) -> Option<&UnitPhrases> {
        match unit {
            PeriodUnit::Seconds => self.seconds.as_ref(),
            PeriodUnit::Minutes => self.minutes.as_ref(),
            PeriodUnit::Hours => self.hours.as_ref(),
            PeriodUnit::Days => self.days.as_ref(),
            PeriodUnit::Months => self.months.as_ref(),
            PeriodUnit::Years => self.years.as_ref(),
        }
    }
}

/// Locale configuration as supplied by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Separator between integer and fractional digits.
    pub decimal_separator: String,
    /// Thousands separator; `None` disables grouping.
    pub grouping_separator: Option<String>,
    pub phrases: PhraseTable,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            grouping_separator: None,
            phrases: PhraseTable::default(),
        }
    }
}

impl LocaleConfig {
    /// Parses and validates a JSON locale document.
    pub fn from_json_str(raw: &str) -> Result<Self, LocaleConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(LocaleConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON locale document from disk.
    ///
    /// # Side effects
    /// - Emits `locale_config_load` logging events with status.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LocaleConfigError> {
        let path = path.as_ref();
        let result = std::fs::read_to_string(path)
            .map_err(LocaleConfigError::Io)
            .and_then(|raw| Self::from_json_str(&raw));
        match &result {
            Ok(_) => info!(
                "event=locale_config_load module=locale status=ok path={}",
                path.display()
            ),
            Err(err) => error!(
                "event=locale_config_load module=locale status=error path={} error={}",
                path.display(),
                err
            ),
        }
        result
    }

    /// Checks separator and template invariants.
    pub fn validate(&self) -> Result<(), LocaleConfigError> {
        if self.decimal_separator.is_empty() {
            return Err(LocaleConfigError::EmptyDecimalSeparator);
        }
        for unit in PeriodUnit::ALL {
            let Some(phrases) = self.phrases.get(unit) else {
                continue;
            };
            for (field, template) in phrases.templates() {
                if !template.contains(NUMBER_PLACEHOLDER) {
                    return Err(LocaleConfigError::MissingPlaceholder { unit, field });
                }
            }
        }
        Ok(())
    }
}

/// Locale configuration errors.
#[derive(Debug)]
pub enum LocaleConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    EmptyDecimalSeparator,
    /// A phrase template lacks the `{n}` placeholder.
    MissingPlaceholder {
        unit: PeriodUnit,
        field: &'static str,
    },
}

impl Display for LocaleConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read locale config: {err}"),
            Self::Parse(err) => write!(f, "invalid locale config: {err}"),
            Self::EmptyDecimalSeparator => write!(f, "decimal_separator cannot be empty"),
            Self::MissingPlaceholder { unit, field } => write!(
                f,
                "phrase `{}.{field}` must contain `{NUMBER_PLACEHOLDER}`",
                unit.as_str()
            ),
        }
    }
}

impl Error for LocaleConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::EmptyDecimalSeparator | Self::MissingPlaceholder { .. } => None,
        }
    }
}

/// Locale driven by a validated [`LocaleConfig`].
///
/// The default value renders exactly like [`EnglishLocale`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfiguredLocale {
    config: LocaleConfig,
}

impl ConfiguredLocale {
    /// Builds a locale after validating `config`.
    pub fn new(config: LocaleConfig) -> Result<Self, LocaleConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &LocaleConfig {
        &self.config
    }
}

impl LocaleFormatter for ConfiguredLocale {
    fn format_decimal(&self, value: f64, pad: usize, places: usize) -> String {
        render_fixed(
            value,
            pad,
            places,
            &self.config.decimal_separator,
            self.config.grouping_separator.as_deref(),
        )
    }

    fn plural_phrase(&self, unit: PeriodUnit, after: bool, count: i64) -> String {
        let Some(phrases) = self.config.phrases.get(unit) else {
            return EnglishLocale.plural_phrase(unit, after, count);
        };
        let one = count == 1;
        let after_variant = match (after, one) {
            (true, true) => phrases.after_one.as_deref(),
            (true, false) => phrases.after_other.as_deref(),
            (false, _) => None,
        };
        let base = if one {
            phrases.one.as_str()
        } else {
            phrases.other.as_str()
        };
        after_variant.unwrap_or(base).to_string()
    }

    fn short_phrase(&self, unit: PeriodUnit) -> String {
        self.config
            .phrases
            .get(unit)
            .and_then(|phrases| phrases.short.clone())
            .unwrap_or_else(|| EnglishLocale.short_phrase(unit))
    }
}

/// Formats a float with the locale's separator (default one decimal place).
pub fn fmt_float<L: LocaleFormatter + ?Sized>(locale: &L, value: f64, places: usize) -> String {
    locale.format_decimal(value, 0, places)
}

/// Formats a float followed by a percent sign.
pub fn fmt_percentage<L: LocaleFormatter + ?Sized>(
    locale: &L,
    value: f64,
    places: usize,
) -> String {
    format!("{}%", locale.format_decimal(value, 0, places))
}

/// Fixed-point rendering shared by the built-in locales.
///
/// `pad` is a minimum total width; shorter output is left-padded with spaces.
pub fn render_fixed(
    value: f64,
    pad: usize,
    places: usize,
    decimal_separator: &str,
    grouping_separator: Option<&str>,
) -> String {
    let raw = format!("{value:.places$}");
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut out = String::with_capacity(raw.len() + 4);
    out.push_str(sign);
    match grouping_separator {
        Some(separator) if !separator.is_empty() => {
            out.push_str(&group_digits(integer, separator));
        }
        _ => out.push_str(integer),
    }
    if let Some(fraction) = fraction {
        out.push_str(decimal_separator);
        out.push_str(fraction);
    }
    format!("{out:>pad$}")
}

fn group_digits(integer: &str, separator: &str) -> String {
    if !integer.bytes().all(|b| b.is_ascii_digit()) {
        return integer.to_string();
    }
    let mut out = String::with_capacity(integer.len() + integer.len() / 3 * separator.len());
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
