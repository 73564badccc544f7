//! Error types for building the list under sort
//!
//! Sorting itself cannot fail; these errors only come from generating or
//! installing a list whose layout metrics would be undefined.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// No values to lay out (bar width would divide by zero)
    Empty,

    /// Lower generation bound above the upper bound
    InvalidBounds { min: i64, max: i64 },

    /// More values than there are pixels across the chart
    TooManyValues { count: usize, max: usize },

    /// Value range taller than the chart in pixels (one unit would be 0 px)
    RangeTooTall { range: u64, max: u32 },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Empty => write!(f, "List must contain at least one value"),
            ListError::InvalidBounds { min, max } => {
                write!(
                    f,
                    "Invalid value bounds: min {} is greater than max {}",
                    min, max
                )
            }
            ListError::TooManyValues { count, max } => {
                write!(
                    f,
                    "Too many values: {} bars do not fit in a chart {} pixels wide",
                    count, max
                )
            }
            ListError::RangeTooTall { range, max } => {
                write!(
                    f,
                    "Value range too large: a span of {} does not fit in a chart {} pixels tall",
                    range, max
                )
            }
        }
    }
}

impl std::error::Error for ListError {}
