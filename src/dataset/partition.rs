use std::ops::Range;

use super::TrainingStore;
use crate::error::Result;

impl TrainingStore {
    /// Partition `range` in place by the value of `attribute`
    ///
    /// Reorders the examples in `range` into three contiguous blocks and returns the boundaries
    /// `(b1, b2)` such that afterwards
    ///
    /// * `range.start..b1` holds exactly the examples with value `0`,
    /// * `b1..b2` holds exactly the examples with value `1`,
    /// * `b2..range.end` holds exactly the examples with value `2`.
    ///
    /// Any of the blocks may be empty: `b1 == range.start` if there is no `0`, `b1 == b2` if
    /// there is no `1` and `b2 == range.end` if there is no `2`. Examples outside of `range`
    /// are never moved.
    ///
    /// This is a single pass Dutch national flag partition with O(1) extra space. An already
    /// partitioned range is left exactly as it is.
    pub fn partition(&mut self, attribute: usize, range: Range<usize>) -> Result<(usize, usize)> {
        self.check_attribute(attribute)?;
        self.check_range(&range)?;

        // [start, low) holds 0, [low, mid) holds 1, [mid, high) is unexamined, [high, end) holds 2
        let (mut low, mut mid, mut high) = (range.start, range.start, range.end);

        while mid < high {
            match self.records()[(mid, attribute)] {
                0 => {
                    self.swap_examples(low, mid);
                    low += 1;
                    mid += 1;
                }
                1 => mid += 1,
                _ => {
                    high -= 1;
                    while high > mid && self.records()[(high, attribute)] == 2 {
                        high -= 1;
                    }
                    self.swap_examples(mid, high);
                }
            }
        }

        Ok((low, mid))
    }
}
