use derive_more::{Display, Error, From};
use lib::checkers::{Board, Square};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Configuration for how the board is drawn.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
#[serde(deny_unknown_fields, rename = "options", default)]
pub struct RenderOptions {
    /// Whether to mark the squares the selected piece may move to.
    pub hints: bool,

    /// Whether to print row and column numbers.
    pub labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            hints: true,
            labels: true,
        }
    }
}

/// The reason why parsing [`RenderOptions`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse render options")]
pub struct ParseRenderOptionsError(ron::de::SpannedError);

impl FromStr for RenderOptions {
    type Err = ParseRenderOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

/// Draws a [`Board`] as text.
///
/// The selected piece is enclosed in parentheses and, if hints are enabled,
/// its legal destinations are drawn as `+`.
#[derive(Debug, Copy, Clone)]
pub struct Render<'a> {
    board: &'a Board,
    options: RenderOptions,
}

impl<'a> Render<'a> {
    pub fn new(board: &'a Board, options: RenderOptions) -> Self {
        Render { board, options }
    }

    fn symbol(&self, sq: Square) -> char {
        match self.board[sq] {
            Some(p) => p.symbol(),
            None if self.is_hint(sq) => '+',
            None => '.',
        }
    }

    fn is_hint(&self, sq: Square) -> bool {
        self.options.hints
            && self
                .board
                .legal_moves_for_selection()
                .is_some_and(|moves| moves.contains(sq))
    }
}

impl<'a> fmt::Display for Render<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.labels {
            f.write_str(" ")?;
            for col in 0..Square::SIZE {
                write!(f, " {col}")?;
            }

            f.write_char('\n')?;
        }

        for row in 0..Square::SIZE {
            if self.options.labels {
                write!(f, "{row}")?;
            }

            let mut selected = false;
            for col in 0..Square::SIZE {
                let sq = Square::new(row, col);
                let separator = match (selected, self.board.is_selected(sq)) {
                    (_, true) => '(',
                    (true, false) => ')',
                    (false, false) => ' ',
                };

                selected = self.board.is_selected(sq);
                f.write_char(separator)?;
                f.write_char(self.symbol(sq))?;
            }

            if selected {
                f.write_char(')')?;
            }

            f.write_char('\n')?;
        }

        write!(
            f,
            "{} to move, score {}",
            self.board.turn(),
            self.board.score()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::checkers::Color;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_render_options_is_an_identity(o: RenderOptions) {
        assert_eq!(o.to_string().parse(), Ok(o));
    }

    #[test]
    fn render_options_accept_named_struct() {
        assert_eq!(
            "options(hints: false, labels: true)".parse(),
            Ok(RenderOptions {
                hints: false,
                labels: true,
            })
        );
    }

    #[test]
    fn render_options_default_missing_fields() {
        assert_eq!(
            "(labels: false)".parse(),
            Ok(RenderOptions {
                labels: false,
                ..RenderOptions::default()
            })
        );
    }

    #[test]
    fn render_options_reject_unknown_fields() {
        assert!("(colors: true)".parse::<RenderOptions>().is_err());
    }

    #[test]
    fn initial_board_is_drawn_with_labels() {
        let board = Board::default();
        let text = Render::new(&board, RenderOptions::default()).to_string();

        assert_eq!(
            text,
            [
                "  0 1 2 3 4 5 6 7",
                "0 . r . r . r . r",
                "1 r . r . r . r .",
                "2 . r . r . r . r",
                "3 . . . . . . . .",
                "4 . . . . . . . .",
                "5 w . w . w . w .",
                "6 . w . w . w . w",
                "7 w . w . w . w .",
                "white to move, score white 0 red 0",
            ]
            .join("\n")
        );
    }

    #[test]
    fn selection_and_hints_are_marked() {
        let mut board = Board::default();
        board.select(Square::new(5, 2));

        let options = RenderOptions {
            hints: true,
            labels: false,
        };

        let text = Render::new(&board, options).to_string();
        let rows = Vec::from_iter(text.lines());
        assert_eq!(rows[4], " . + . + . . . .");
        assert_eq!(rows[5], " w .(w). w . w .");
    }

    #[test]
    fn hints_can_be_disabled() {
        let mut board = Board::default();
        board.select(Square::new(5, 0));

        let options = RenderOptions {
            hints: false,
            labels: false,
        };

        let text = Render::new(&board, options).to_string();
        let rows = Vec::from_iter(text.lines());
        assert_eq!(rows[4], " . . . . . . . .");
        assert_eq!(rows[5], "(w). w . w . w .");
    }

    #[test]
    fn footer_names_the_side_to_move() {
        for c in Color::iter() {
            let board = Board::with_grid(Default::default(), c);
            let text = Render::new(&board, RenderOptions::default()).to_string();
            assert!(text.ends_with(&format!("{c} to move, score white 0 red 0")));
        }
    }
}
