use std::fmt;
use std::sync::Arc;

use crate::core::{DataPoint, Domain};

/// Maps one record of a curve to a numeric coordinate.
pub type Accessor<T> = Arc<dyn Fn(&T) -> f64 + Send + Sync>;

/// One named series plus the accessors that read its X and Y values.
///
/// `data` is expected to be sorted ascending by X; nearest-point lookup relies
/// on it and it is not checked here. Name, data and accessors are fixed at
/// construction. Visual identity (color) is owned by the chart, not the curve.
pub struct Curve<T> {
    name: String,
    data: Arc<[T]>,
    get_x: Accessor<T>,
    get_y: Accessor<T>,
}

impl<T> Clone for Curve<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            data: Arc::clone(&self.data),
            get_x: Arc::clone(&self.get_x),
            get_y: Arc::clone(&self.get_y),
        }
    }
}

impl<T> fmt::Debug for Curve<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.name)
            .field("len", &self.data.len())
            .finish_non_exhaustive()
    }
}

impl<T> Curve<T> {
    pub fn new<X, Y>(name: impl Into<String>, data: Vec<T>, get_x: X, get_y: Y) -> Self
    where
        X: Fn(&T) -> f64 + Send + Sync + 'static,
        Y: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            data: data.into(),
            get_x: Arc::new(get_x),
            get_y: Arc::new(get_y),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn x_of(&self, record: &T) -> f64 {
        (self.get_x)(record)
    }

    #[must_use]
    pub fn y_of(&self, record: &T) -> f64 {
        (self.get_y)(record)
    }

    #[must_use]
    pub fn x_at(&self, index: usize) -> Option<f64> {
        self.data.get(index).map(|record| self.x_of(record))
    }

    #[must_use]
    pub fn y_at(&self, index: usize) -> Option<f64> {
        self.data.get(index).map(|record| self.y_of(record))
    }

    /// `[min, max]` of the X accessor; `None` for a curve without finite samples.
    #[must_use]
    pub fn x_domain(&self) -> Option<Domain> {
        Domain::from_values(self.data.iter().map(|record| self.x_of(record)))
    }

    /// `[min, max]` of the Y accessor; `None` for a curve without finite samples.
    #[must_use]
    pub fn y_domain(&self) -> Option<Domain> {
        Domain::from_values(self.data.iter().map(|record| self.y_of(record)))
    }
}

impl Curve<DataPoint> {
    pub fn from_points(name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self::new(name, points, |point| point.x, |point| point.y)
    }
}
