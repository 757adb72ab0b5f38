use anyhow::Error as Anyhow;
use clap::Parser;
use crate::io::Console;
use lib::checkers::Board;
use std::io::{empty, stdout, Read, Write};
use tracing::{info, instrument};

/// Lists every legal move of the side to move.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Analyze {
    /// The board to analyze, e.g. `.r.r.r.r/r.r.r.r./.r.r.r.r/......../......../w.w.w.w./.w.w.w.w/w.w.w.w. w`.
    board: Board,
}

impl Analyze {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut console = Console::new(stdout().lock(), empty());
        self.report(&mut console)?;
        console.flush()?;
        Ok(())
    }

    fn report<W: Write, R: Read>(&self, console: &mut Console<W, R>) -> Result<(), Anyhow> {
        let mut captures = 0;
        let mut total = 0;

        for (m, capture) in self.board.moves() {
            total += 1;
            match capture {
                None => console.write_line(m)?,
                Some(p) => {
                    captures += 1;
                    console.write_line(format_args!("{m} captures {p}"))?;
                }
            }
        }

        info!(turn = %self.board.turn(), total, captures, "analyzed");

        Ok(())
    }
}
