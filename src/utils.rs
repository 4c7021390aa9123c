use std::ops::RangeInclusive;

/// Accepted board side lengths for scenario files
pub const BOARD_SIZE_RANGE: RangeInclusive<i32> = 4..=1000;

/// Accepted number of insects per scenario
pub const INSECT_COUNT_RANGE: RangeInclusive<usize> = 1..=16;

/// Accepted number of food markers per scenario
pub const FOOD_COUNT_RANGE: RangeInclusive<usize> = 1..=200;

/// Lines preceding the insect block: size, insect count, food count
pub const HEADER_LINES: usize = 3;
