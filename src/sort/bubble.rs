//! Bubble sort, one swap per step
//!
//! Pass `p` walks adjacent pairs `(j, j + 1)` for `j` in `0..len - 1 - p`,
//! swapping out-of-order pairs. The suffix settled by earlier passes is not
//! revisited. There are `len - 1` passes and no early exit.

use super::{SortOrder, StepResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BubbleCursor {
    pass: usize,
    index: usize,
    finished: bool,
}

impl BubbleCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, values: &mut [i64], order: SortOrder) -> StepResult {
        if self.finished {
            return StepResult::finished();
        }

        let len = values.len();
        while self.pass + 1 < len {
            let end = len - 1 - self.pass;
            while self.index < end {
                let j = self.index;
                self.index += 1;
                if order.should_swap(values[j], values[j + 1]) {
                    values.swap(j, j + 1);
                    return StepResult::swapped(j, j + 1);
                }
            }
            self.pass += 1;
            self.index = 0;
        }

        self.finished = true;
        StepResult::finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::Highlight;

    fn trace(values: &mut [i64], order: SortOrder) -> Vec<(Highlight, Vec<i64>)> {
        let mut cursor = BubbleCursor::new();
        let mut steps = Vec::new();
        loop {
            let result = cursor.advance(values, order);
            match result.highlight {
                Some(pair) => steps.push((pair, values.to_vec())),
                None => {
                    assert!(result.done);
                    return steps;
                }
            }
        }
    }

    #[test]
    fn test_ascending_trace() {
        let mut values = [5, 3, 1];
        let steps = trace(&mut values, SortOrder::Ascending);
        assert_eq!(
            steps,
            vec![
                (Highlight::new(0, 1), vec![3, 5, 1]),
                (Highlight::new(1, 2), vec![3, 1, 5]),
                (Highlight::new(0, 1), vec![1, 3, 5]),
            ]
        );
    }

    #[test]
    fn test_descending_trace() {
        let mut values = [1, 2, 3];
        let steps = trace(&mut values, SortOrder::Descending);
        assert_eq!(steps.len(), 3);
        assert_eq!(values, [3, 2, 1]);
    }

    #[test]
    fn test_equal_values_never_swap() {
        let mut values = [4, 4, 4, 4];
        assert!(trace(&mut values, SortOrder::Ascending).is_empty());
        assert!(trace(&mut values, SortOrder::Descending).is_empty());
    }

    #[test]
    fn test_short_slices_finish_immediately() {
        let mut cursor = BubbleCursor::new();
        assert!(cursor.advance(&mut [], SortOrder::Ascending).done);

        let mut cursor = BubbleCursor::new();
        let mut one = [7];
        assert!(cursor.advance(&mut one, SortOrder::Ascending).done);
        assert_eq!(one, [7]);
    }

    #[test]
    fn test_finished_cursor_stays_finished() {
        let mut values = [2, 1];
        let mut cursor = BubbleCursor::new();
        assert!(cursor.advance(&mut values, SortOrder::Ascending).mutated());
        assert!(cursor.advance(&mut values, SortOrder::Ascending).done);

        // Even if the slice is disturbed afterwards, no further swaps happen
        values.swap(0, 1);
        let result = cursor.advance(&mut values, SortOrder::Ascending);
        assert!(result.done);
        assert!(!result.mutated());
        assert_eq!(values, [2, 1]);
    }
}
