//! Stepwise sort engine
//!
//! Each algorithm is an explicit resumable cursor rather than a blocking call.
//! [`SortCursor::advance`] performs at most one swap on the slice it is given
//! and reports which pair of indices changed, so the caller decides when the
//! next step runs and can redraw between steps.
//!
//! - [`bubble`]: adjacent-pair passes with a shrinking unsorted prefix
//! - [`insertion`]: shifts each value left one slot per step
//!
//! Once a cursor reports [`StepResult::done`], every later call reports done
//! again without touching the slice.

pub mod bubble;
pub mod insertion;

use bubble::BubbleCursor;
use insertion::InsertionCursor;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Whether `left` must move after `right` under this order
    pub fn should_swap(self, left: i64, right: i64) -> bool {
        match self {
            SortOrder::Ascending => left > right,
            SortOrder::Descending => left < right,
        }
    }

    /// Whether `values` is already in this order
    pub fn is_sorted(self, values: &[i64]) -> bool {
        values.windows(2).all(|pair| !self.should_swap(pair[0], pair[1]))
    }

    pub fn name(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two bars touched by a swap; `left < right`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub left: usize,
    pub right: usize,
}

impl Highlight {
    pub fn new(a: usize, b: usize) -> Self {
        Highlight {
            left: a.min(b),
            right: a.max(b),
        }
    }
}

/// Outcome of one call to [`SortCursor::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Pair swapped during this step, if any
    pub highlight: Option<Highlight>,
    /// No swaps remain; the slice is sorted
    pub done: bool,
}

impl StepResult {
    pub(crate) fn swapped(left: usize, right: usize) -> Self {
        StepResult {
            highlight: Some(Highlight::new(left, right)),
            done: false,
        }
    }

    pub(crate) fn finished() -> Self {
        StepResult {
            highlight: None,
            done: true,
        }
    }

    pub fn mutated(&self) -> bool {
        self.highlight.is_some()
    }
}

/// Resumable state of whichever algorithm is running
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortCursor {
    Bubble(BubbleCursor),
    Insertion(InsertionCursor),
}

impl SortCursor {
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bubble => SortCursor::Bubble(BubbleCursor::new()),
            Algorithm::Insertion => SortCursor::Insertion(InsertionCursor::new()),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            SortCursor::Bubble(_) => Algorithm::Bubble,
            SortCursor::Insertion(_) => Algorithm::Insertion,
        }
    }

    /// Run until the next swap, or until the slice is sorted
    pub fn advance(&mut self, values: &mut [i64], order: SortOrder) -> StepResult {
        match self {
            SortCursor::Bubble(cursor) => cursor.advance(values, order),
            SortCursor::Insertion(cursor) => cursor.advance(values, order),
        }
    }
}

/// One sort run: a cursor bound to an algorithm and order
#[derive(Debug, Clone)]
pub struct SortSession {
    order: SortOrder,
    cursor: SortCursor,
    steps: usize,
}

impl SortSession {
    pub fn new(algorithm: Algorithm, order: SortOrder) -> Self {
        SortSession {
            order,
            cursor: SortCursor::new(algorithm),
            steps: 0,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.cursor.algorithm()
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Swap-steps performed so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn step(&mut self, values: &mut [i64]) -> StepResult {
        let result = self.cursor.advance(values, self.order);
        if result.mutated() {
            self.steps += 1;
        }
        result
    }

    /// Step until done, returning the total number of swaps
    pub fn run_to_completion(&mut self, values: &mut [i64]) -> usize {
        while !self.step(values).done {}
        self.steps
    }
}
