//! TerminalRenderer: flushes text frames to a writer.
//!
//! Frames are encoded into a reusable byte buffer first and written with a
//! single call, so a frame never appears half-drawn.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::frame::TextFrame;
use crate::types::PieceKind;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    color: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new(color: bool) -> Self {
        Self::with_writer(io::stdout(), color)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, color: bool) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
            color,
        }
    }

    pub fn draw(&mut self, frame: &TextFrame) -> Result<()> {
        self.buf.clear();
        encode_into(&mut self.buf, frame, self.color)?;
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }

    /// Write a line that bypasses frame styling (e.g. JSON dumps).
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Encode a frame into `buf`, tinting piece spans when `color` is set.
pub fn encode_into(buf: &mut Vec<u8>, frame: &TextFrame, color: bool) -> Result<()> {
    let lines = frame.lines();
    for (i, line) in lines.iter().enumerate() {
        for span in line {
            match (span.piece, color) {
                (Some(kind), true) => {
                    buf.queue(SetForegroundColor(piece_color(kind)))?;
                    buf.queue(Print(&span.text))?;
                    buf.queue(ResetColor)?;
                }
                _ => {
                    buf.queue(Print(&span.text))?;
                }
            }
        }
        let last = i + 1 == lines.len();
        if !(last && frame.is_prompt()) {
            buf.queue(Print("\n"))?;
        }
    }
    Ok(())
}

fn piece_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Rgb {
            r: 80,
            g: 220,
            b: 220,
        },
        PieceKind::O => Color::Rgb {
            r: 240,
            g: 220,
            b: 80,
        },
        PieceKind::T => Color::Rgb {
            r: 200,
            g: 120,
            b: 220,
        },
        PieceKind::L => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Span;

    fn sample() -> TextFrame {
        let mut frame = TextFrame::new();
        frame.push_line(vec![Span::plain("Queue: "), Span::piece("[T 3]", PieceKind::T)]);
        frame.push_text("> ");
        frame.set_prompt(true);
        frame
    }

    #[test]
    fn test_plain_encoding_matches_plain_string() {
        let frame = sample();
        let mut buf = Vec::new();
        encode_into(&mut buf, &frame, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), frame.to_plain_string());
    }

    #[test]
    fn test_color_encoding_wraps_piece_spans() {
        let mut buf = Vec::new();
        encode_into(&mut buf, &sample(), true).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("\x1b["));
        assert!(out.contains("[T 3]"));
        assert!(out.ends_with("> "));
    }

    #[test]
    fn test_renderer_writes_to_writer() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new(), false);
        renderer.draw(&sample()).unwrap();
        renderer.write_line("{}").unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, "Queue: [T 3]\n> {}\n");
    }
}
