use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Curve;
use crate::error::{ChartError, ChartResult};

/// Closed `[min, max]` interval along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Builds a domain from two bounds in any order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Min/max over the finite values of `values`; `None` when there are none.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            if !value.is_finite() {
                continue;
            }
            min = min.min(value);
            max = max.max(value);
        }
        (min <= max).then_some(Self { min, max })
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span() == 0.0
    }
}

/// Y-axis extension that keeps room for the legend drawn inside the plot.
///
/// The upper factor grows with the number of legend rows, except that three
/// curves fall back to the single-curve factor. That gap is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendHeadroomPolicy {
    pub lower_ratio: f64,
    pub single_factor: f64,
    pub pair_factor: f64,
    pub crowded_factor: f64,
}

impl Default for LegendHeadroomPolicy {
    fn default() -> Self {
        Self {
            lower_ratio: 0.97,
            single_factor: 1.05,
            pair_factor: 1.15,
            crowded_factor: 1.25,
        }
    }
}

impl LegendHeadroomPolicy {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("lower_ratio", self.lower_ratio),
            ("single_factor", self.single_factor),
            ("pair_factor", self.pair_factor),
            ("crowded_factor", self.crowded_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "headroom `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn upper_factor(self, curve_count: usize) -> f64 {
        match curve_count {
            2 => self.pair_factor,
            count if count > 3 => self.crowded_factor,
            _ => self.single_factor,
        }
    }

    /// Applies `floor(min * lower_ratio)` and `ceil(max * upper_factor(n))`,
    /// saturating at the finite `f64` range.
    #[must_use]
    pub fn extend(self, domain: Domain, curve_count: usize) -> Domain {
        Domain {
            min: (domain.min * self.lower_ratio).floor().clamp(-f64::MAX, f64::MAX),
            max: (domain.max * self.upper_factor(curve_count))
                .ceil()
                .clamp(-f64::MAX, f64::MAX),
        }
    }
}

/// Union of the per-curve domains produced by `domain_of`.
///
/// Curves for which `domain_of` yields `None` (no finite samples) do not
/// participate. Returns `None` when no curve participates.
pub fn aggregate<'a, T, I, F>(curves: I, domain_of: F) -> Option<Domain>
where
    T: 'a,
    I: IntoIterator<Item = &'a Curve<T>>,
    F: Fn(&Curve<T>) -> Option<Domain>,
{
    let domains: Vec<Domain> = curves.into_iter().filter_map(domain_of).collect();
    let min = domains.iter().map(|d| OrderedFloat(d.min)).min()?;
    let max = domains.iter().map(|d| OrderedFloat(d.max)).max()?;
    Some(Domain {
        min: min.into_inner(),
        max: max.into_inner(),
    })
}

/// Shared X domain: the raw union, no extension.
pub fn aggregate_x_domain<'a, T, I>(curves: I) -> Option<Domain>
where
    T: 'a,
    I: IntoIterator<Item = &'a Curve<T>>,
{
    aggregate(curves, Curve::x_domain)
}

/// Shared Y domain extended by `policy` for the number of participating curves.
pub fn aggregate_y_domain<'a, T, I>(curves: I, policy: LegendHeadroomPolicy) -> Option<Domain>
where
    T: 'a,
    I: IntoIterator<Item = &'a Curve<T>>,
{
    let curves: Vec<&Curve<T>> = curves
        .into_iter()
        .filter(|curve| curve.y_domain().is_some())
        .collect();
    let count = curves.len();
    aggregate(curves, Curve::y_domain).map(|raw| policy.extend(raw, count))
}
