use crate::maze::MazeError;
use nom::{
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map, map_res},
    sequence::{delimited, separated_pair},
    IResult,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// A cell coordinate in a maze grid. `x` grows to the right, `y` downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shift the position by `(dx, dy)`, or `None` if that leaves the
    /// non-negative quadrant.
    pub fn offset(&self, dx: isize, dy: isize) -> Option<Position> {
        Some(Position {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

fn parse_coordinate(input: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse::<usize>)(input)
}

fn parse_position(input: &str) -> IResult<&str, Position> {
    all_consuming(map(
        separated_pair(
            parse_coordinate,
            delimited(space0, char(','), space0),
            parse_coordinate,
        ),
        |(x, y)| Position::new(x, y),
    ))(input)
}

impl FromStr for Position {
    type Err = MazeError;

    /// Parse positions written as `x,y`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_position(s.trim())
            .map(|(_, position)| position)
            .map_err(|_| MazeError::MalformedPosition(s.to_string()))
    }
}

// Positions are map keys in search results, so they serialise as strings.
impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
