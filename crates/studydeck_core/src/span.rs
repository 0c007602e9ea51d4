//! Human-readable time span formatting.
//!
//! # Responsibility
//! - Pick a display unit for a signed second count.
//! - Render the converted value through an injected locale.
//!
//! # Invariants
//! - Unit selection uses the magnitude only; the rendered number keeps its sign.
//! - Seconds drop one decimal place, months and years gain one.
//! - With zero decimal places the converted value is floored before rendering.

use crate::locale::{EnglishLocale, LocaleFormatter, NUMBER_PLACEHOLDER};
use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_MONTH: f64 = 2_592_000.0;
const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Upper bound (inclusive) for spans shown in minutes.
const MINUTES_UPPER_BOUND: f64 = 3_599.0;

/// Display unit for a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PeriodUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

impl PeriodUnit {
    /// All units, smallest first.
    pub const ALL: [PeriodUnit; 6] = [
        Self::Seconds,
        Self::Minutes,
        Self::Hours,
        Self::Days,
        Self::Months,
        Self::Years,
    ];

    /// Fixed conversion factor. Months are 30 days, years 365 days.
    pub fn seconds_per_unit(self) -> f64 {
        match self {
            Self::Seconds => 1.0,
            Self::Minutes => SECONDS_PER_MINUTE,
            Self::Hours => SECONDS_PER_HOUR,
            Self::Days => SECONDS_PER_DAY,
            Self::Months => SECONDS_PER_MONTH,
            Self::Years => SECONDS_PER_YEAR,
        }
    }

    /// Abbreviation used by short spans.
    pub fn short_suffix(self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Minutes => "m",
            Self::Hours => "h",
            Self::Days => "d",
            Self::Months => "mo",
            Self::Years => "y",
        }
    }

    /// Stable lowercase name, also used as the config key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Months => "months",
            Self::Years => "years",
        }
    }
}

/// Rendering options for [`format_span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanOptions {
    /// Minimum width of the rendered number.
    pub pad: usize,
    /// Requested fractional digits before unit adjustment.
    pub decimal_places: usize,
    /// Abbreviated suffix (`1.5m`) instead of a phrase.
    pub short: bool,
    /// Phrase variant used after other text.
    pub after: bool,
}

impl Default for SpanOptions {
    fn default() -> Self {
        Self {
            pad: 0,
            decimal_places: 1,
            short: false,
            after: false,
        }
    }
}

impl SpanOptions {
    pub fn short() -> Self {
        Self {
            short: true,
            ..Self::default()
        }
    }

    pub fn with_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    pub fn with_pad(mut self, pad: usize) -> Self {
        self.pad = pad;
        self
    }

    pub fn after(mut self) -> Self {
        self.after = true;
        self
    }
}

/// Chooses the display unit and the adjusted number of decimal places.
pub fn optimal_period(seconds: f64, decimal_places: usize) -> (PeriodUnit, usize) {
    let magnitude = seconds.abs();
    if magnitude < SECONDS_PER_MINUTE {
        (PeriodUnit::Seconds, decimal_places.saturating_sub(1))
    } else if magnitude <= MINUTES_UPPER_BOUND {
        (PeriodUnit::Minutes, decimal_places)
    } else if magnitude < SECONDS_PER_DAY {
        (PeriodUnit::Hours, decimal_places)
    } else if magnitude < 30.0 * SECONDS_PER_DAY {
        (PeriodUnit::Days, decimal_places)
    } else if magnitude < 365.0 * SECONDS_PER_DAY {
        (PeriodUnit::Months, decimal_places.saturating_add(1))
    } else {
        (PeriodUnit::Years, decimal_places.saturating_add(1))
    }
}

/// Converts seconds to `unit` without rounding.
pub fn convert_seconds_to(seconds: f64, unit: PeriodUnit) -> f64 {
    seconds / unit.seconds_per_unit()
}

/// Span formatter bound to one locale.
#[derive(Debug, Clone, Default)]
pub struct SpanFormatter<L: LocaleFormatter> {
    locale: L,
}

impl<L: LocaleFormatter> SpanFormatter<L> {
    pub fn new(locale: L) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &L {
        &self.locale
    }

    /// Formats `seconds` as a span such as `2.3 days` or `5m`.
    pub fn format(&self, seconds: f64, options: &SpanOptions) -> String {
        let (unit, places) = optimal_period(seconds, options.decimal_places);
        let mut value = convert_seconds_to(seconds, unit);
        if places == 0 {
            value = value.floor();
        }

        let template = if options.short {
            self.locale.short_phrase(unit)
        } else {
            self.locale
                .plural_phrase(unit, options.after, plural_count(value, places))
        };
        let number = self.locale.format_decimal(value, options.pad, places);
        template.replacen(NUMBER_PLACEHOLDER, &number, 1)
    }
}

/// Any fractional rendering reads as plural; otherwise the floored value decides.
fn plural_count(value: f64, places: usize) -> i64 {
    if places != 0 {
        2
    } else {
        value.floor() as i64
    }
}

/// Formats a span with the built-in English locale.
pub fn format_span(seconds: f64, options: &SpanOptions) -> String {
    SpanFormatter::new(EnglishLocale).format(seconds, options)
}

/// Current Unix time in whole seconds.
pub fn int_time() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{int_time, optimal_period, plural_count, PeriodUnit};

    #[test]
    fn seconds_never_go_below_zero_places() {
        assert_eq!(optimal_period(10.0, 0), (PeriodUnit::Seconds, 0));
        assert_eq!(optimal_period(10.0, 2), (PeriodUnit::Seconds, 1));
    }

    #[test]
    fn large_spans_gain_a_decimal_place() {
        assert_eq!(optimal_period(40.0 * 86_400.0, 0), (PeriodUnit::Months, 1));
        assert_eq!(optimal_period(400.0 * 86_400.0, 1), (PeriodUnit::Years, 2));
    }

    #[test]
    fn added_place_saturates_at_max() {
        assert_eq!(
            optimal_period(40.0 * 86_400.0, usize::MAX),
            (PeriodUnit::Months, usize::MAX)
        );
        assert_eq!(
            optimal_period(400.0 * 86_400.0, usize::MAX),
            (PeriodUnit::Years, usize::MAX)
        );
    }

    #[test]
    fn negative_spans_select_by_magnitude() {
        assert_eq!(optimal_period(-7_200.0, 0).0, PeriodUnit::Hours);
    }

    #[test]
    fn plural_count_is_plural_for_fractions() {
        assert_eq!(plural_count(1.0, 1), 2);
        assert_eq!(plural_count(1.0, 0), 1);
        assert_eq!(plural_count(-1.0, 0), -1);
    }

    #[test]
    fn int_time_is_after_2020() {
        assert!(int_time() > 1_577_836_800);
    }
}
