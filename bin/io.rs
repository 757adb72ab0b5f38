use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Lines, Read, Write};
use tracing::instrument;

/// A line oriented text console.
#[derive(Debug)]
pub struct Console<W: Write, R: Read> {
    writer: W,
    reader: Lines<BufReader<R>>,
}

impl<W: Write, R: Read> Console<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Console {
            writer,
            reader: BufReader::new(reader).lines(),
        }
    }

    /// Read the next line, or `None` once the input is exhausted.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.reader.next().transpose()
    }

    /// Write a message followed by a line break.
    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    pub fn write_line<T: Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(&mut self.writer, "{msg}")
    }

    /// Flush the internal buffers.
    #[instrument(level = "trace", skip(self), err)]
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::VecDeque, io::empty, str};
    use test_strategy::proptest;

    #[proptest]
    fn read_line_strips_line_break(#[strategy("[^\r\n]*")] s: String) {
        let mut buf = VecDeque::new();
        writeln!(&mut buf, "{s}")?;
        let mut console = Console::new(io::sink(), &mut buf);
        assert_eq!(console.read_line()?, Some(s));
    }

    #[test]
    fn read_line_returns_none_at_end_of_input() {
        let mut console = Console::new(io::sink(), empty());
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[proptest]
    fn write_line_appends_line_break(s: String) {
        let mut buf = Vec::new();
        let mut console = Console::new(&mut buf, empty());
        console.write_line(&s)?;
        console.flush()?;
        drop(console);
        assert_eq!(str::from_utf8(&buf)?, format!("{s}\n"));
    }
}
