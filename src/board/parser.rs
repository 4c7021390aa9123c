use crate::board::entity::FoodMarker;
use crate::board::scenario::Scenario;
use crate::error::{BoardError, ParseError, Result};
use crate::insect::{Color, Insect, Species};
use crate::position::Position;
use crate::utils::{BOARD_SIZE_RANGE, FOOD_COUNT_RANGE, HEADER_LINES, INSECT_COUNT_RANGE};
use std::fs::File;
use std::io::{BufReader, Read};
use tracing::debug;

/// Parse a scenario from a file path
pub fn parse_scenario(path: &str) -> Result<Scenario> {
    let file = File::open(path)?;
    let mut reader = BufReader::with_capacity(64 * 1024, file);
    let mut src = String::new();
    reader.read_to_string(&mut src)?;
    parse_scenario_from_str(&src)
}

/// Parse a scenario from an in-memory string.
///
/// Layout: board size, insect count, food count, then one
/// `<color> <species> <row> <col>` line per insect and one
/// `<value> <row> <col>` line per food marker.
pub fn parse_scenario_from_str(src: &str) -> Result<Scenario> {
    let lines: Vec<&str> = src.lines().map(str::trim).collect();
    let line = |idx: usize| nth_line(&lines, idx);

    let size = line(0)?
        .parse::<i32>()
        .ok()
        .filter(|s| BOARD_SIZE_RANGE.contains(s))
        .ok_or(ParseError::InvalidBoardSize)?;
    let mut scenario = Scenario::new(size)?;

    // Food count is validated ahead of the insect count
    let food_count = parse_count(line(2)?, &FOOD_COUNT_RANGE)
        .ok_or(ParseError::InvalidNumberOfFoodPoints)?;
    let insect_count = parse_count(line(1)?, &INSECT_COUNT_RANGE)
        .ok_or(ParseError::InvalidNumberOfInsects)?;

    for i in 0..insect_count {
        let insect = parse_insect(line(HEADER_LINES + i)?, size)?;
        let duplicate = scenario
            .insects
            .iter()
            .any(|other| other.color == insect.color && other.species == insect.species);
        if duplicate {
            return Err(ParseError::DuplicateInsects);
        }
        scenario.add_insect(insect).map_err(collision_error)?;
    }

    for i in 0..food_count {
        let food = parse_food(line(HEADER_LINES + insect_count + i)?, size)?;
        scenario.add_food(food).map_err(collision_error)?;
    }

    debug!(
        size,
        insects = insect_count,
        food = food_count,
        "scenario parsed"
    );
    Ok(scenario)
}

fn nth_line<'a>(lines: &[&'a str], idx: usize) -> Result<&'a str> {
    lines
        .get(idx)
        .copied()
        .ok_or(ParseError::MissingLine(idx + 1))
}

fn parse_count(s: &str, range: &std::ops::RangeInclusive<usize>) -> Option<usize> {
    s.parse::<usize>().ok().filter(|n| range.contains(n))
}

fn parse_insect(line: &str, size: i32) -> Result<Insect> {
    let mut parts = line.split_whitespace();
    let color: Color = parts
        .next()
        .ok_or(ParseError::InvalidInsectColor)?
        .parse()?;
    let species: Species = parts
        .next()
        .ok_or(ParseError::InvalidInsectType)?
        .parse()?;
    let position = parse_position(&mut parts, size)?;
    Ok(Insect::new(position, color, species))
}

fn parse_food(line: &str, size: i32) -> Result<FoodMarker> {
    let mut parts = line.split_whitespace();
    let value = parts
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|v| *v > 0)
        .ok_or(ParseError::InvalidFoodAmount)?;
    let position = parse_position(&mut parts, size)?;
    Ok(FoodMarker::new(position, value))
}

fn parse_position<'a>(parts: &mut impl Iterator<Item = &'a str>, size: i32) -> Result<Position> {
    let mut coord = || {
        parts
            .next()
            .and_then(|s| s.parse::<i32>().ok())
            .ok_or(ParseError::InvalidEntityPosition)
    };
    let row = coord()?;
    let col = coord()?;
    let position = Position::new(row, col);
    if !crate::board::grid::within(size, position) {
        return Err(ParseError::InvalidEntityPosition);
    }
    Ok(position)
}

fn collision_error(err: BoardError) -> ParseError {
    match err {
        BoardError::Collision { .. } => ParseError::TwoEntitiesOnSamePosition,
        BoardError::OutOfBounds { .. } => ParseError::InvalidEntityPosition,
        other => ParseError::Board(other),
    }
}
