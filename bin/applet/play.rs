use crate::io::Console;
use crate::render::{Render, RenderOptions};
use anyhow::Error as Anyhow;
use clap::Parser;
use derive_more::{Display, Error, From};
use lib::checkers::{Board, Move, MoveContext, ParseMoveError, ParseSquareError, Square, Transition};
use std::io::{stdin, stdout, Read, Write};
use std::str::FromStr;
use tracing::{info, instrument, warn};

const HELP: &str = "\
commands:
  row,col          select a piece, or move the selected piece there
  row,col-row,col  move a piece directly
  moves            list the legal moves of the side to move
  help             show this message
  quit             leave the game";

/// An interactive game of checkers on the terminal.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// How to draw the board, e.g. `options(hints: true, labels: false)`.
    #[clap(short, long, default_value_t)]
    options: RenderOptions,

    /// The board to start from.
    #[clap(default_value_t)]
    board: Board,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    Select(Square),
    Play(Move),
    Moves,
    Help,
    Quit,
}

#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error, From)]
enum ParseCommandError {
    #[display(fmt = "unrecognized command, try `help`")]
    Square(ParseSquareError),
    #[display(fmt = "invalid move, expected `row,col-row,col`")]
    Move(ParseMoveError),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "moves" => Ok(Command::Moves),
            "help" => Ok(Command::Help),
            "quit" => Ok(Command::Quit),
            s if s.contains('-') => Ok(Command::Play(s.parse()?)),
            s => Ok(Command::Select(s.parse()?)),
        }
    }
}

fn describe(mc: &MoveContext) -> String {
    let mut msg = format!("{} played {}", mc.piece().color(), **mc);

    if let Some(p) = mc.capture() {
        msg += &format!(", capturing {p}");
    }

    if mc.is_promotion() {
        msg += ", crowning a king";
    }

    msg
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut console = Console::new(stdout().lock(), stdin().lock());
        self.run(&mut console)
    }

    fn run<W: Write, R: Read>(self, console: &mut Console<W, R>) -> Result<(), Anyhow> {
        let mut board = self.board;

        console.write_line(HELP)?;
        console.write_line(Render::new(&board, self.options))?;
        console.flush()?;

        while let Some(line) = console.read_line()? {
            if line.trim().is_empty() {
                continue;
            }

            let cmd = match line.parse() {
                Ok(cmd) => cmd,
                Err(e) => {
                    warn!(%line, error = %e, "ignoring command");
                    console.write_line(format_args!("error: {e}"))?;
                    console.flush()?;
                    continue;
                }
            };

            match cmd {
                Command::Quit => break,
                Command::Help => console.write_line(HELP)?,
                Command::Moves => {
                    for (m, capture) in board.moves() {
                        match capture {
                            None => console.write_line(m)?,
                            Some(p) => console.write_line(format_args!("{m} captures {p}"))?,
                        }
                    }
                }

                Command::Select(sq) => match board.select(sq) {
                    Transition::Ignored => {}
                    Transition::Deselected => console.write_line("selection cleared")?,
                    Transition::Selected(sq) => {
                        if let Some(p) = board.piece_on(sq) {
                            console.write_line(format_args!("selected {p}"))?;
                        }
                    }

                    Transition::Played(mc) => {
                        info!(%board, "{}", describe(&mc));
                        console.write_line(describe(&mc))?;
                    }
                },

                Command::Play(m) => match board.play(m) {
                    Ok(mc) => {
                        info!(%board, "{}", describe(&mc));
                        console.write_line(describe(&mc))?;
                    }

                    Err(e) => {
                        warn!(error = %e, "rejecting move");
                        console.write_line(format_args!("error: {e}"))?;
                    }
                },
            }

            console.write_line(Render::new(&board, self.options))?;
            console.flush()?;
        }

        Ok(())
    }
}
