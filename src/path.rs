use crate::error::InvalidDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl From<bool> for Direction {
    /// `true` goes right.
    fn from(bit: bool) -> Self {
        if bit { Direction::Right } else { Direction::Left }
    }
}

impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Direction::Left),
            1 => Ok(Direction::Right),
            other => Err(InvalidDirection(other)),
        }
    }
}

/// Converts a sequence of 0/1 codes into a path.
pub fn directions(codes: &[u8]) -> Result<Vec<Direction>, InvalidDirection> {
    codes.iter().map(|&code| Direction::try_from(code)).collect()
}

/// Path to node `position` of a perfect tree numbered breadth-first from 1.
///
/// The binary digits of `position` after the leading one spell out the path,
/// so 1 is the root, 2 and 3 its children, 4..=7 the grandchildren and so on.
/// Positions below 1 resolve to the root.
pub fn position_path(position: usize) -> Vec<Direction> {
    if position <= 1 {
        return Vec::new();
    }
    let depth = position.ilog2();
    (0..depth)
        .rev()
        .map(|bit| Direction::from((position >> bit) & 1 == 1))
        .collect()
}
