use serde::{Deserialize, Serialize};

use crate::core::Domain;

/// Affine, invertible mapping from a data domain to a pixel range.
///
/// The range may be decreasing (`[plot_height, 0]` for a Y axis whose data
/// grows upwards). A zero-span domain maps every value to the middle of the
/// range instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: Domain,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: Domain, range_start: f64, range_end: f64) -> Self {
        Self {
            domain,
            range_start,
            range_end,
        }
    }

    #[must_use]
    pub fn domain(self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain.span();
        if span == 0.0 {
            return (self.range_start + self.range_end) / 2.0;
        }
        let Domain { min, max } = self.domain;
        let normalized = if span.is_finite() {
            (value - min) / span
        } else {
            // Span overflows f64; halve both sides before subtracting.
            (value / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain.min;
        }
        let normalized = (pixel - self.range_start) / range_span;
        let Domain { min, max } = self.domain;
        if self.domain.span().is_finite() {
            min + normalized * self.domain.span()
        } else {
            min * (1.0 - normalized) + max * normalized
        }
    }
}

/// Step of 1, 2 or 5 times a power of ten giving about `count` intervals.
#[must_use]
pub fn nice_step(span: f64, count: usize) -> f64 {
    if count == 0 || !span.is_finite() || span <= 0.0 {
        return 0.0;
    }
    let raw = span / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let multiplier = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    multiplier * power
}

/// Multiples of [`nice_step`] that fall inside `domain`.
#[must_use]
pub fn nice_ticks(domain: Domain, count: usize) -> Vec<f64> {
    if count == 0 || !domain.min.is_finite() || !domain.max.is_finite() {
        return Vec::new();
    }
    if domain.is_degenerate() {
        return vec![domain.min];
    }

    let step = nice_step(domain.span(), count);
    if step <= 0.0 || !step.is_finite() {
        return Vec::new();
    }
    let first = (domain.min / step).ceil() as i64;
    let last = (domain.max / step).floor() as i64;
    // Multiplying the integer index keeps values like 0.3 free of accumulated drift.
    (first..=last).map(|index| index as f64 * step).collect()
}
