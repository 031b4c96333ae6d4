use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Inverse of [`datetime_to_unix_seconds`]; `None` for non-finite or
/// out-of-range inputs.
#[must_use]
pub fn unix_seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn unix_seconds_round_trip_through_datetime() {
        let time = Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 0).single().expect("time");
        let seconds = datetime_to_unix_seconds(time);
        assert_eq!(unix_seconds_to_datetime(seconds), Some(time));
    }

    #[test]
    fn non_finite_seconds_have_no_datetime() {
        assert!(unix_seconds_to_datetime(f64::NAN).is_none());
        assert!(unix_seconds_to_datetime(f64::INFINITY).is_none());
    }

    #[test]
    fn decimal_converts_to_float() {
        let value = decimal_to_f64(Decimal::new(12_345, 2), "value").expect("convert");
        assert!((value - 123.45).abs() <= 1e-9);
    }
}
