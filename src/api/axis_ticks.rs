use chrono::{Datelike, NaiveDate};

use crate::core::primitives::unix_seconds_to_datetime;
use crate::core::{Domain, nice_ticks};

use super::{AxisConfig, AxisValueFormat};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_WEEK: f64 = 7.0 * SECONDS_PER_DAY;
// 1970-01-05, the first Monday after the epoch.
const FIRST_MONDAY_OFFSET: f64 = 4.0 * SECONDS_PER_DAY;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CalendarStep {
    Fixed(f64),
    Week,
    Months(i32),
}

impl CalendarStep {
    const LADDER: [Self; 14] = [
        Self::Fixed(SECONDS_PER_MINUTE),
        Self::Fixed(5.0 * SECONDS_PER_MINUTE),
        Self::Fixed(15.0 * SECONDS_PER_MINUTE),
        Self::Fixed(30.0 * SECONDS_PER_MINUTE),
        Self::Fixed(SECONDS_PER_HOUR),
        Self::Fixed(3.0 * SECONDS_PER_HOUR),
        Self::Fixed(6.0 * SECONDS_PER_HOUR),
        Self::Fixed(12.0 * SECONDS_PER_HOUR),
        Self::Fixed(SECONDS_PER_DAY),
        Self::Fixed(2.0 * SECONDS_PER_DAY),
        Self::Week,
        Self::Months(1),
        Self::Months(3),
        Self::Months(12),
    ];

    fn approx_seconds(self) -> f64 {
        match self {
            Self::Fixed(seconds) => seconds,
            Self::Week => SECONDS_PER_WEEK,
            Self::Months(months) => f64::from(months) * 30.0 * SECONDS_PER_DAY,
        }
    }

    /// Smallest ladder step covering `target` seconds, whole years past the ladder.
    fn for_target(target: f64) -> Self {
        Self::LADDER
            .into_iter()
            .find(|step| step.approx_seconds() >= target)
            .unwrap_or_else(|| {
                let years = (target / (365.0 * SECONDS_PER_DAY)).ceil().min(10_000.0);
                Self::Months(12 * years.max(1.0) as i32)
            })
    }
}

/// Tick positions for one axis.
///
/// Numeric axes use round decimal steps. Timestamp axes step on calendar
/// units (minutes up to years) aligned to UTC boundaries, and fall back to
/// decimal steps below one minute per tick.
pub(super) fn axis_ticks(domain: Domain, axis: &AxisConfig) -> Vec<f64> {
    match axis.value_format {
        AxisValueFormat::Numeric => nice_ticks(domain, axis.tick_count),
        AxisValueFormat::Timestamp => calendar_ticks(domain, axis.tick_count),
    }
}

fn calendar_ticks(domain: Domain, count: usize) -> Vec<f64> {
    if count == 0 || !domain.min.is_finite() || !domain.max.is_finite() {
        return Vec::new();
    }
    let target = domain.span() / count as f64;
    if target < SECONDS_PER_MINUTE {
        return nice_ticks(domain, count);
    }

    let ticks = match CalendarStep::for_target(target) {
        CalendarStep::Fixed(step) => aligned_ticks(domain, step, 0.0),
        CalendarStep::Week => aligned_ticks(domain, SECONDS_PER_WEEK, FIRST_MONDAY_OFFSET),
        CalendarStep::Months(months) => month_ticks(domain, months),
    };
    if ticks.is_empty() {
        nice_ticks(domain, count)
    } else {
        ticks
    }
}

fn aligned_ticks(domain: Domain, step: f64, offset: f64) -> Vec<f64> {
    let first = ((domain.min - offset) / step).ceil() * step + offset;
    let limit = (domain.span() / step).floor() as usize + 1;
    (0_u32..)
        .map(|index| first + f64::from(index) * step)
        .take_while(|tick| *tick <= domain.max)
        .take(limit)
        .collect()
}

fn month_ticks(domain: Domain, months: i32) -> Vec<f64> {
    let Some(start) = unix_seconds_to_datetime(domain.min) else {
        return Vec::new();
    };
    let mut month_index = start.year() * 12 + start.month0() as i32;
    if month_start(month_index).is_some_and(|tick| tick < domain.min) {
        month_index += 1;
    }
    month_index += (months - month_index.rem_euclid(months)) % months;

    let mut ticks = Vec::new();
    while let Some(tick) = month_start(month_index) {
        if tick > domain.max {
            break;
        }
        ticks.push(tick);
        month_index += months;
    }
    ticks
}

/// UTC midnight on the first day of the month `index` months after year 0.
fn month_start(index: i32) -> Option<f64> {
    let date = NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp() as f64)
}

pub(super) fn tick_step_hint_from_values(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }

    let mut best = f64::INFINITY;
    for pair in values.windows(2) {
        let step = (pair[1] - pair[0]).abs();
        if step.is_finite() && step > 0.0 {
            best = best.min(step);
        }
    }

    if best.is_finite() { best } else { 0.0 }
}

pub(super) fn format_tick_label(value: f64, format: AxisValueFormat, step: f64) -> String {
    match format {
        AxisValueFormat::Timestamp => format_timestamp_label(value, step),
        AxisValueFormat::Numeric => format_numeric_label(value, step),
    }
}

fn format_timestamp_label(seconds: f64, step: f64) -> String {
    let Some(time) = unix_seconds_to_datetime(seconds) else {
        return format_numeric_label(seconds, step);
    };
    if step > 0.0 && step < SECONDS_PER_DAY {
        time.format("%m-%d %H:%M").to_string()
    } else {
        time.format("%Y-%m-%d").to_string()
    }
}

fn format_numeric_label(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).clamp(0.0, 8.0) as usize
    } else {
        0
    };
    // Avoid "-0" for values that round to zero.
    let value = if value.abs() < 0.5 * 10f64.powi(-(decimals as i32)) {
        0.0
    } else {
        value
    };
    format!("{value:.decimals$}")
}

pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Backend-independent estimate; real glyph metrics are the renderer's concern.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ':' => 0.34,
            '-' | '+' | '%' | '(' | ')' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_precision_follows_step() {
        assert_eq!(format_tick_label(25.0, AxisValueFormat::Numeric, 5.0), "25");
        assert_eq!(format_tick_label(1.5, AxisValueFormat::Numeric, 0.5), "1.5");
        assert_eq!(format_tick_label(0.25, AxisValueFormat::Numeric, 0.05), "0.25");
        assert_eq!(format_tick_label(-0.0001, AxisValueFormat::Numeric, 0.5), "0.0");
    }

    #[test]
    fn timestamps_format_as_dates() {
        // 2024-01-02T00:00:00Z
        let seconds = 1_704_153_600.0;
        assert_eq!(
            format_tick_label(seconds, AxisValueFormat::Timestamp, 7.0 * SECONDS_PER_DAY),
            "2024-01-02"
        );
        assert_eq!(
            format_tick_label(seconds + 3_600.0, AxisValueFormat::Timestamp, 3_600.0),
            "01-02 01:00"
        );
    }

    fn utc_seconds(year: i32, month: u32, day: u32, hour: u32) -> f64 {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .expect("valid date")
            .and_utc()
            .timestamp() as f64
    }

    fn timestamp_axis() -> AxisConfig {
        AxisConfig::new("Date", AxisValueFormat::Timestamp)
    }

    #[test]
    fn month_long_range_ticks_on_monday_midnights() {
        let domain = Domain::new(utc_seconds(2024, 3, 1, 12), utc_seconds(2024, 3, 31, 12));
        let ticks = axis_ticks(domain, &timestamp_axis());
        assert_eq!(
            ticks,
            vec![
                utc_seconds(2024, 3, 4, 0),
                utc_seconds(2024, 3, 11, 0),
                utc_seconds(2024, 3, 18, 0),
                utc_seconds(2024, 3, 25, 0),
            ]
        );
        assert!(ticks.iter().all(|tick| tick % SECONDS_PER_DAY == 0.0));
    }

    #[test]
    fn day_long_range_ticks_every_six_hours() {
        let domain = Domain::new(utc_seconds(2024, 3, 1, 1), utc_seconds(2024, 3, 2, 1));
        let ticks = axis_ticks(domain, &timestamp_axis());
        assert_eq!(
            ticks,
            vec![
                utc_seconds(2024, 3, 1, 6),
                utc_seconds(2024, 3, 1, 12),
                utc_seconds(2024, 3, 1, 18),
                utc_seconds(2024, 3, 2, 0),
            ]
        );
    }

    #[test]
    fn year_long_range_ticks_on_quarter_starts() {
        let domain = Domain::new(utc_seconds(2023, 6, 15, 0), utc_seconds(2024, 6, 15, 0));
        let ticks = axis_ticks(domain, &timestamp_axis());
        assert_eq!(
            ticks,
            vec![
                utc_seconds(2023, 7, 1, 0),
                utc_seconds(2023, 10, 1, 0),
                utc_seconds(2024, 1, 1, 0),
                utc_seconds(2024, 4, 1, 0),
            ]
        );
    }

    #[test]
    fn sub_minute_ranges_use_decimal_steps() {
        let domain = Domain::new(0.0, 2.0);
        assert_eq!(
            axis_ticks(domain, &timestamp_axis()),
            vec![0.0, 0.5, 1.0, 1.5, 2.0]
        );
        let numeric = AxisConfig::new("ms", AxisValueFormat::Numeric);
        assert_eq!(
            axis_ticks(Domain::new(4.0, 29.0), &numeric),
            vec![5.0, 10.0, 15.0, 20.0, 25.0]
        );
    }

    #[test]
    fn step_hint_is_smallest_positive_gap() {
        assert_eq!(tick_step_hint_from_values(&[0.0, 5.0, 10.0, 12.0]), 2.0);
        assert_eq!(tick_step_hint_from_values(&[3.0]), 0.0);
    }

    #[test]
    fn label_width_grows_with_text() {
        let short = estimate_label_text_width_px("5", 12.0);
        let long = estimate_label_text_width_px("Execution time (ms)", 12.0);
        assert!(long > short);
        assert!(short >= 12.0);
    }
}
