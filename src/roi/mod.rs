//! Return-on-investment calculation.
//!
//! ROI is `revenue / time_taken`. Any input that cannot produce a finite
//! ratio yields [`Roi::NotApplicable`] instead of an IEEE-754 special value,
//! so callers always get something they can order and render.


use crate::core::Task;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Placeholder shown wherever an ROI cannot be computed.
pub const DEFAULT_NA_LABEL: &str = "N/A";

/// Decimal places used when rendering an ROI value.
pub const DEFAULT_PRECISION: usize = 1;

/// Derived ROI of a task.
///
/// `Value` always holds a finite number; construct through [`compute_roi`]
/// or [`Roi::from_ratio`] to keep that true.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roi {
    Value(f64),
    NotApplicable,
}

impl Roi {
    /// Wraps an already computed ratio, mapping non-finite values to N/A.
    pub fn from_ratio(ratio: f64) -> Self {
        if !ratio.is_finite() {
            return Roi::NotApplicable;
        }
        // -0.0 and 0.0 must compare equal under total_cmp
        if ratio == 0.0 {
            return Roi::Value(0.0);
        }
        Roi::Value(ratio)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Roi::Value(v) => Some(*v),
            Roi::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Roi::Value(_))
    }

    /// Renders the value with `precision` decimals, or `na_label`.
    pub fn display(&self, precision: usize, na_label: &str) -> String {
        match self {
            Roi::Value(v) => format!("{:.*}", precision, v),
            Roi::NotApplicable => na_label.to_string(),
        }
    }
}

impl Eq for Roi {}

impl Ord for Roi {
    /// `NotApplicable` is lower than every value.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Roi::NotApplicable, Roi::NotApplicable) => Ordering::Equal,
            (Roi::NotApplicable, Roi::Value(_)) => Ordering::Less,
            (Roi::Value(_), Roi::NotApplicable) => Ordering::Greater,
            (Roi::Value(a), Roi::Value(b)) => a.total_cmp(b),
        }
    }
}

impl PartialOrd for Roi {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Roi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(DEFAULT_PRECISION, DEFAULT_NA_LABEL))
    }
}

impl Serialize for Roi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// Computes the ROI for a revenue / time-taken pair.
///
/// Returns `NotApplicable` when either input is not finite, when
/// `time_taken <= 0`, or when the quotient overflows. The stored value is
/// not rounded.
pub fn compute_roi(revenue: f64, time_taken: f64) -> Roi {
    if !revenue.is_finite() || !time_taken.is_finite() {
        return Roi::NotApplicable;
    }
    if time_taken <= 0.0 {
        return Roi::NotApplicable;
    }
    Roi::from_ratio(revenue / time_taken)
}

/// ROI of a task, treating missing or malformed inputs as not applicable.
pub fn compute_task_roi(task: &Task) -> Roi {
    match (task.revenue, task.time_taken) {
        (Some(revenue), Some(time_taken)) => compute_roi(revenue, time_taken),
        _ => Roi::NotApplicable,
    }
}
