use super::prelude::*;

/// A cell label on the board. Only `Gray` cells are ever overwritten; once a
/// cell is painted Red, Blue, or White it is immutable for the life of the
/// board (§3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Gray,
    Blue,
    Red,
}

impl Color {
    /// Whether this color still needs to be determined by the adversary.
    pub fn is_gray(&self) -> bool {
        matches!(self, Color::Gray)
    }

    /// Whether a placement painting this color at a cell is consistent with
    /// the board's existing color there. Gray imposes no constraint.
    pub fn consistent_with(&self, painted: Color) -> bool {
        matches!(self, Color::Gray) || *self == painted
    }

    /// Single-character notation used by the REPL (`w`, `g`, `b`, `r`).
    pub fn notate(&self) -> char {
        match self {
            Color::White => 'w',
            Color::Gray => 'g',
            Color::Blue => 'b',
            Color::Red => 'r',
        }
    }
}

impl std::str::FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(anyhow!("expected a single color character, got {s:?}"));
        }
        match s.chars().next().unwrap().to_ascii_lowercase() {
            'w' => Ok(Color::White),
            'g' => Ok(Color::Gray),
            'b' => Ok(Color::Blue),
            'r' => Ok(Color::Red),
            c => Err(anyhow!("unrecognized color character {c:?}")),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notate())
    }
}
