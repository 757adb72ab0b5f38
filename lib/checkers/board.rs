use crate::checkers::{Color, Grid, IllegalMove, Move, MoveContext, Moves};
use crate::checkers::{ParseGridError, Piece, Score, Square};
use derive_more::{Display, Error};
use std::{fmt, ops::Index, str::FromStr};
use tracing::{debug, instrument};

/// The piece currently selected, along with where it may move to.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
struct Selection {
    square: Square,
    moves: Moves,
}

/// The effect of a call to [`Board::select`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Transition {
    /// Nothing was selected before, and nothing is selected now.
    Ignored,
    /// A piece of the side to move is now selected.
    Selected(Square),
    /// The previous selection was dropped and nothing is selected now.
    Deselected,
    /// The selected piece moved and the turn passed to the opponent.
    Played(MoveContext),
}

/// The state of a game of checkers.
///
/// Moves are driven by [selecting](`Board::select`) squares: first a piece of the
/// side to move, then one of its legal destinations.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    grid: Grid,
    turn: Color,
    selection: Option<Selection>,
    score: Score,
}

impl Default for Board {
    fn default() -> Self {
        Board::with_grid(Grid::default(), Color::White)
    }
}

impl Board {
    /// A board in the starting arrangement, white to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// A board with an arbitrary arrangement of pieces and no captures so far.
    pub fn with_grid(grid: Grid, turn: Color) -> Self {
        Board {
            grid,
            turn,
            selection: None,
            score: Score::default(),
        }
    }

    /// The arrangement of pieces.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The number of captures made by each side.
    pub fn score(&self) -> Score {
        self.score
    }

    /// The number of captures made by a [`Color`].
    pub fn score_for(&self, c: Color) -> u32 {
        self.score.of(c)
    }

    /// The [`Piece`] on the given [`Square`], if any.
    pub fn piece_on(&self, sq: Square) -> Option<&Piece> {
        self.grid.piece_on(sq)
    }

    /// An iterator over all pieces on the board, row by row.
    pub fn pieces(&self) -> impl DoubleEndedIterator<Item = &Piece> {
        self.grid.iter()
    }

    /// The number of pieces of a [`Color`] on the board.
    pub fn count(&self, c: Color) -> usize {
        self.grid.count(c)
    }

    /// Computes where a [`Piece`] may move to, regardless of whose turn it is.
    pub fn legal_moves(&self, piece: &Piece) -> Moves {
        self.grid.legal_moves(piece)
    }

    /// The selected [`Piece`], if any.
    pub fn selected(&self) -> Option<&Piece> {
        let selection = self.selection.as_ref()?;
        self.grid.piece_on(selection.square)
    }

    /// Whether the piece on the given [`Square`] is selected.
    pub fn is_selected(&self, sq: Square) -> bool {
        self.selection.as_ref().is_some_and(|s| s.square == sq)
    }

    /// The legal moves of the selected piece, if any.
    pub fn legal_moves_for_selection(&self) -> Option<&Moves> {
        self.selection.as_ref().map(|s| &s.moves)
    }

    /// An iterator over the legal [`Move`]s of the side to move.
    ///
    /// Each move is paired with the piece it captures, if any.
    pub fn moves(&self) -> impl Iterator<Item = (Move, Option<Piece>)> + '_ {
        self.grid
            .iter()
            .filter(move |p| p.color() == self.turn)
            .flat_map(move |p| {
                let whence = p.square();
                self.grid
                    .legal_moves(p)
                    .into_iter()
                    .map(move |(whither, capture)| (Move(whence, whither), capture))
            })
    }

    /// Selects a [`Square`].
    ///
    /// Without a selection, a piece of the side to move on this square becomes selected.
    /// With a selection, the selected piece moves here if that is legal, otherwise
    /// the selection is dropped and this square is selected afresh.
    #[instrument(level = "trace", skip(self), ret)]
    pub fn select(&mut self, sq: Square) -> Transition {
        if self.selection.is_none() {
            return match self.pick(sq) {
                true => Transition::Selected(sq),
                false => Transition::Ignored,
            };
        }

        if let Some(mc) = self.apply(sq) {
            return Transition::Played(mc);
        }

        self.selection = None;
        match self.pick(sq) {
            true => Transition::Selected(sq),
            false => Transition::Deselected,
        }
    }

    /// Play a [`Move`] of the side to move, if legal.
    ///
    /// Any selection is dropped once the move is played.
    #[instrument(level = "trace", skip(self), err)]
    pub fn play(&mut self, m: Move) -> Result<MoveContext, IllegalMove> {
        let piece = match self.grid[m.whence()] {
            Some(p) if p.color() == self.turn => p,
            _ => return Err(IllegalMove(m)),
        };

        let moves = self.grid.legal_moves(&piece);
        if !moves.contains(m.whither()) {
            return Err(IllegalMove(m));
        }

        Ok(self.commit(m, moves.capture(m.whither()).copied()))
    }

    fn pick(&mut self, sq: Square) -> bool {
        match self.grid[sq] {
            Some(p) if p.color() == self.turn => {
                let moves = self.grid.legal_moves(&p);
                self.selection = Some(Selection { square: sq, moves });
                true
            }

            _ => false,
        }
    }

    fn apply(&mut self, whither: Square) -> Option<MoveContext> {
        let selection = self.selection.as_ref()?;
        if !selection.moves.contains(whither) {
            return None;
        }

        let m = Move(selection.square, whither);
        let capture = selection.moves.capture(whither).copied();
        Some(self.commit(m, capture))
    }

    fn commit(&mut self, m: Move, capture: Option<Piece>) -> MoveContext {
        let piece = self.grid.relocate(m.whence(), m.whither());

        let promotion = !piece.is_king() && piece.row() == piece.color().far_row();
        if promotion {
            piece.promote();
            debug!(%piece, "crowned");
        }

        let piece = *piece;
        if let Some(captured) = capture {
            self.grid.remove(captured.square());
            self.score.increment(self.turn);
            debug!(%piece, %captured, score = %self.score, "captured");
        }

        self.selection = None;
        self.turn = !self.turn;

        MoveContext {
            mv: m,
            piece,
            capture,
            promotion,
        }
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.grid[sq]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.grid, self.turn.symbol())
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected the piece arrangement and the side to move")]
    InvalidSyntax,
    #[display(fmt = "failed to parse the piece arrangement")]
    InvalidGrid(ParseGridError),
    #[display(fmt = "failed to parse the side to move, expected `w` or `r`")]
    InvalidTurn,
}

impl From<ParseGridError> for ParseBoardError {
    fn from(e: ParseGridError) -> Self {
        ParseBoardError::InvalidGrid(e)
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (grid, turn) = s.trim().split_once(' ').ok_or(ParseBoardError::InvalidSyntax)?;

        let turn = match turn.trim() {
            "w" => Color::White,
            "r" => Color::Red,
            _ => return Err(ParseBoardError::InvalidTurn),
        };

        Ok(Board::with_grid(grid.parse()?, turn))
    }
}
