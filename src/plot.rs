//! Renderers for a generated bit sequence.

use std::io::{self, Write};

use log::debug;
use thiserror::Error;

pub const TITLE: &str = "LFSR Output Sequence";
pub const DEFAULT_CHART_WIDTH: usize = 100;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("window output needs a build with the `window` feature")]
    WindowUnavailable,
}

/// Anything that can present an ordered sequence of bits.
pub trait Plot {
    fn plot(&mut self, title: &str, bits: &[u8]) -> Result<(), PlotError>;
}

/// Two-row marker chart for a terminal, wrapped every `width` points.
#[derive(Debug)]
pub struct TextPlot<W> {
    out: W,
    width: usize,
}

impl<W: Write> TextPlot<W> {
    const MARKER: char = 'o';
    const EMPTY: char = '.';

    pub fn with_width(out: W, width: usize) -> Self {
        Self {
            out,
            width: width.max(1),
        }
    }

    fn row(chunk: &[u8], level: u8) -> String {
        chunk
            .iter()
            .map(|&b| if b == level { Self::MARKER } else { Self::EMPTY })
            .collect()
    }
}

impl<W: Write> Plot for TextPlot<W> {
    fn plot(&mut self, title: &str, bits: &[u8]) -> Result<(), PlotError> {
        writeln!(self.out, "{}", title)?;

        if bits.is_empty() {
            writeln!(self.out, "(empty)")?;
            return Ok(self.out.flush()?);
        }

        for (i, chunk) in bits.chunks(self.width).enumerate() {
            debug!("chart chunk {} ({} points)", i, chunk.len());
            if i > 0 {
                writeln!(self.out)?;
            }
            writeln!(self.out, "1 |{}", Self::row(chunk, 1))?;
            writeln!(self.out, "0 |{}", Self::row(chunk, 0))?;
        }

        Ok(self.out.flush()?)
    }
}

/// Prints the sequence as one line of digits, ignoring the title.
#[derive(Debug)]
pub struct RawBits<W> {
    out: W,
}

impl<W: Write> RawBits<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Plot for RawBits<W> {
    fn plot(&mut self, _title: &str, bits: &[u8]) -> Result<(), PlotError> {
        let line: String = bits.iter().map(|b| char::from(b'0' + b)).collect();
        writeln!(self.out, "{}", line)?;

        Ok(self.out.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(width: usize, bits: &[u8]) -> String {
        let mut out = Vec::new();
        TextPlot::with_width(&mut out, width).plot(TITLE, bits).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn chart() {
        assert_eq!(
            render(100, &[1, 0, 1, 1, 0]),
            "LFSR Output Sequence\n1 |o.oo.\n0 |.o..o\n"
        );
    }

    #[test]
    fn chart_wraps() {
        assert_eq!(
            render(3, &[1, 0, 1, 1, 0]),
            "LFSR Output Sequence\n1 |o.o\n0 |.o.\n\n1 |o.\n0 |.o\n"
        );
    }

    #[test]
    fn chart_zero_width() {
        assert_eq!(
            render(0, &[0, 1]),
            "LFSR Output Sequence\n1 |.\n0 |o\n\n1 |o\n0 |.\n"
        );
    }

    #[test]
    fn chart_empty() {
        assert_eq!(render(100, &[]), "LFSR Output Sequence\n(empty)\n");
    }

    #[test]
    fn raw() {
        let mut out = Vec::new();
        let mut plot = RawBits::new(&mut out);
        plot.plot(TITLE, &[1, 0, 1, 1, 0]).unwrap();
        plot.plot(TITLE, &[]).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "10110\n\n");
    }
}
