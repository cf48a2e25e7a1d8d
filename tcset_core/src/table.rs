//! Sorted sample tables and piecewise-linear lookup.
//!
//! One abstraction serves both dataset families: temperature→deviation
//! (strictly increasing x) and position→temperature (x may repeat where a
//! position was measured twice).

use crate::error::{Result, TableError};

/// How the x column of a table must be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    /// x strictly increasing, no duplicates.
    Strict,
    /// x ascending, repeated x allowed.
    NonDecreasing,
}

/// A named, immutable `(x, y)` sample table sorted by x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationTable<'a> {
    name: &'a str,
    points: &'a [(f64, f64)],
    ordering: Ordering,
}

impl<'a> CalibrationTable<'a> {
    /// Wrap points whose ordering is known at compile time.
    ///
    /// Used for the built-in datasets; their invariants are covered by tests
    /// rather than checked here.
    pub const fn from_sorted(name: &'a str, points: &'a [(f64, f64)], ordering: Ordering) -> Self {
        Self {
            name,
            points,
            ordering,
        }
    }

    /// Validate and wrap points: non-empty, finite, ordered per `ordering`.
    pub fn try_new(name: &'a str, points: &'a [(f64, f64)], ordering: Ordering) -> Result<Self> {
        validate(name, points, ordering)?;
        Ok(Self::from_sorted(name, points, ordering))
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn points(&self) -> &'a [(f64, f64)] {
        self.points
    }

    pub fn ordering(&self) -> Ordering {
        self.ordering
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First sample, if any.
    pub fn first(&self) -> Option<(f64, f64)> {
        self.points.first().copied()
    }

    /// Last sample, if any.
    pub fn last(&self) -> Option<(f64, f64)> {
        self.points.last().copied()
    }

    /// Smallest and largest x, or `None` for an empty table.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        Some((self.first()?.0, self.last()?.0))
    }

    /// Smallest and largest y, or `None` for an empty table.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let mut it = self.points.iter().map(|p| p.1);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Interpolated y at `x`, clamped to the end samples.
    pub fn interpolate(&self, x: f64) -> f64 {
        interpolate(self.points, x)
    }

    /// Re-run the invariant checks on this table.
    pub fn validate(&self) -> Result<()> {
        validate(self.name, self.points, self.ordering)
    }
}

/// Piecewise-linear lookup over `points` sorted by x.
///
/// - `x` at or below the first sample returns the first y; at or above the
///   last sample returns the last y. No extrapolation.
/// - Otherwise the first pair `(xi, xi+1)` with `xi <= x <= xi+1` is used.
/// - A query equal to a repeated x is matched by the pair ending at its
///   first occurrence (or by the lower clamp), so it yields that first y.
///   A zero-width pair is never used as a bracket.
/// - A NaN query returns the first y.
///
/// `points` must be non-empty and sorted; this is a precondition. An empty
/// slice returns NaN.
pub fn interpolate(points: &[(f64, f64)], x: f64) -> f64 {
    let (Some(&(x0, y0)), Some(&(xn, yn))) = (points.first(), points.last()) else {
        return f64::NAN;
    };
    if x <= x0 {
        return y0;
    }
    if x >= xn {
        return yn;
    }
    for w in points.windows(2) {
        let (xi, yi) = w[0];
        let (xj, yj) = w[1];
        if x >= xi && x <= xj {
            let t = (x - xi) / (xj - xi);
            return yi + t * (yj - yi);
        }
    }
    // Only reachable for NaN queries.
    y0
}

fn validate(name: &str, points: &[(f64, f64)], ordering: Ordering) -> Result<()> {
    if points.is_empty() {
        return Err(TableError::Empty {
            name: name.to_string(),
        }
        .into());
    }
    for (index, &(x, y)) in points.iter().enumerate() {
        if !x.is_finite() || !y.is_finite() {
            return Err(TableError::NonFinite {
                name: name.to_string(),
                index,
            }
            .into());
        }
    }
    for (i, w) in points.windows(2).enumerate() {
        let index = i + 1;
        let (prev, next) = (w[0].0, w[1].0);
        if next < prev {
            return Err(TableError::Unsorted {
                name: name.to_string(),
                index,
            }
            .into());
        }
        if next == prev && ordering == Ordering::Strict {
            return Err(TableError::DuplicateX {
                name: name.to_string(),
                index,
            }
            .into());
        }
    }
    Ok(())
}
