use crate::checkers::Color;
use derive_more::Display;
use std::ops::Index;

/// The number of pieces captured by each side.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "white {} red {}", "self[Color::White]", "self[Color::Red]")]
pub struct Score([u32; 2]);

impl Score {
    /// The number of captures made by a [`Color`].
    pub fn of(&self, c: Color) -> u32 {
        self.0[c as usize]
    }

    /// The number of captures made by both sides.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Credits a capture to a [`Color`].
    pub(crate) fn increment(&mut self, c: Color) {
        self.0[c as usize] += 1;
    }
}

impl Index<Color> for Score {
    type Output = u32;

    fn index(&self, c: Color) -> &Self::Output {
        &self.0[c as usize]
    }
}
