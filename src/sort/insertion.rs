//! Insertion sort, one shift per step
//!
//! For each position `next` in `1..len` the value there is captured and moved
//! left one slot at a time while its left neighbour belongs after it. Each
//! shift swaps `(pos - 1, pos)` and is one step.

use super::{SortOrder, StepResult};

/// A value in the middle of being moved left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Shift {
    position: usize,
    current: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionCursor {
    next: usize,
    shift: Option<Shift>,
    finished: bool,
}

impl InsertionCursor {
    pub fn new() -> Self {
        InsertionCursor {
            next: 1,
            shift: None,
            finished: false,
        }
    }

    pub fn advance(&mut self, values: &mut [i64], order: SortOrder) -> StepResult {
        if self.finished {
            return StepResult::finished();
        }

        loop {
            if let Some(Shift { position, current }) = self.shift {
                if position > 0 && order.should_swap(values[position - 1], current) {
                    values[position] = values[position - 1];
                    values[position - 1] = current;
                    self.shift = Some(Shift {
                        position: position - 1,
                        current,
                    });
                    return StepResult::swapped(position - 1, position);
                }
                self.shift = None;
                self.next += 1;
            }

            if self.next >= values.len() {
                self.finished = true;
                return StepResult::finished();
            }

            self.shift = Some(Shift {
                position: self.next,
                current: values[self.next],
            });
        }
    }
}

impl Default for InsertionCursor {
    fn default() -> Self {
        Self::new()
    }
}
