use crate::direction::Direction;
use std::fmt;

/// Board coordinate, 1-indexed. Values outside the board are allowed as
/// intermediate results of stepping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Apply the direction's offset once; no bounds checking. Saturates at
    /// the `i32` limits.
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        self.step_by(direction, 1)
    }

    /// Apply the direction's offset `times` times, saturating at the `i32`
    /// limits
    #[inline]
    pub fn step_by(self, direction: Direction, times: u32) -> Self {
        let (dr, dc) = direction.offset();
        let clamp = |v: i64| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        Self {
            row: clamp(shifted(self.row, dr, times)),
            col: clamp(shifted(self.col, dc, times)),
        }
    }

    /// Like `step_by`, but `None` when the result is not representable
    #[inline]
    pub fn checked_step_by(self, direction: Direction, times: u32) -> Option<Self> {
        let (dr, dc) = direction.offset();
        Some(Self {
            row: i32::try_from(shifted(self.row, dr, times)).ok()?,
            col: i32::try_from(shifted(self.col, dc, times)).ok()?,
        })
    }
}

#[inline]
fn shifted(value: i32, delta: i32, times: u32) -> i64 {
    value as i64 + delta as i64 * times as i64
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
