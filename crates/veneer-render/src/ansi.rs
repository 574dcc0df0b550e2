#![forbid(unsafe_code)]

//! ANSI presentation of a finished frame.
//!
//! The presenter writes full frames with run-length SGR batching: an SGR
//! sequence is emitted only when the style of the next cell differs from
//! the last one written. Diffing against the previous frame is not done;
//! the component library redraws small surfaces and full frames keep the
//! output deterministic for capture tests.

use std::io::{self, Write};

use crate::cell::{Cell, PackedRgba, StyleFlags};
use crate::frame::Frame;

const CSI: &str = "\x1b[";

/// Last-emitted style, so consecutive cells share one SGR sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SgrState {
    fg: PackedRgba,
    bg: PackedRgba,
    attrs: StyleFlags,
}

impl Default for SgrState {
    fn default() -> Self {
        Self {
            fg: PackedRgba::DEFAULT,
            bg: PackedRgba::DEFAULT,
            attrs: StyleFlags::empty(),
        }
    }
}

/// Writes frames as ANSI escape sequences to any [`Write`] sink.
#[derive(Debug)]
pub struct Presenter<W: Write> {
    writer: W,
    sgr: SgrState,
}

impl<W: Write> Presenter<W> {
    /// Create a presenter over a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sgr: SgrState::default(),
        }
    }

    /// Present a full frame.
    ///
    /// Positions each row explicitly, so the output is self-contained
    /// regardless of prior cursor position.
    pub fn present(&mut self, frame: &Frame) -> io::Result<()> {
        self.sgr = SgrState::default();
        write!(self.writer, "{CSI}0m")?;

        for y in 0..frame.height() {
            write!(self.writer, "{CSI}{};1H", y + 1)?;
            for cell in frame.buffer.row_cells(y) {
                self.write_cell(cell)?;
            }
        }

        write!(self.writer, "{CSI}0m")?;
        self.sgr = SgrState::default();

        if let Some((x, y)) = frame.cursor() {
            write!(self.writer, "{CSI}{};{}H{CSI}?25h", y + 1, x + 1)?;
        }
        self.writer.flush()
    }

    /// Clear the whole screen and home the cursor.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        write!(self.writer, "{CSI}2J{CSI}H")?;
        self.writer.flush()
    }

    /// Consume the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_cell(&mut self, cell: &Cell) -> io::Result<()> {
        let wanted = SgrState {
            fg: cell.fg,
            bg: cell.bg,
            attrs: cell.attrs,
        };
        if wanted != self.sgr {
            self.write_sgr(wanted)?;
            self.sgr = wanted;
        }
        write!(self.writer, "{}", cell.ch)
    }

    fn write_sgr(&mut self, state: SgrState) -> io::Result<()> {
        // Reset then re-apply; attribute removal has no single inverse
        // sequence that all terminals honor.
        write!(self.writer, "{CSI}0m")?;
        for (flag, code) in [
            (StyleFlags::BOLD, "1"),
            (StyleFlags::DIM, "2"),
            (StyleFlags::ITALIC, "3"),
            (StyleFlags::UNDERLINE, "4"),
            (StyleFlags::REVERSE, "7"),
            (StyleFlags::STRIKETHROUGH, "9"),
        ] {
            if state.attrs.contains(flag) {
                write!(self.writer, "{CSI}{code}m")?;
            }
        }
        if state.fg.is_default() {
            write!(self.writer, "{CSI}39m")?;
        } else {
            write!(
                self.writer,
                "{CSI}38;2;{};{};{}m",
                state.fg.r(),
                state.fg.g(),
                state.fg.b()
            )?;
        }
        if state.bg.is_default() {
            write!(self.writer, "{CSI}49m")?;
        } else {
            write!(
                self.writer,
                "{CSI}48;2;{};{};{}m",
                state.bg.r(),
                state.bg.g(),
                state.bg.b()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    fn present_to_string(frame: &Frame) -> String {
        let mut presenter = Presenter::new(Vec::new());
        presenter.present(frame).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn plain_text_has_no_color_sequences() {
        let mut frame = Frame::new(3, 1);
        frame.buffer.set(0, 0, Cell::from_char('h'));
        frame.buffer.set(1, 0, Cell::from_char('i'));
        let out = present_to_string(&frame);
        assert!(out.contains("hi "));
        assert!(!out.contains("38;2"));
    }

    #[test]
    fn styled_run_emits_one_sgr() {
        let mut frame = Frame::new(4, 1);
        let red = Cell {
            fg: PackedRgba::rgb(255, 0, 0),
            ..Cell::from_char('a')
        };
        for x in 0..4 {
            frame.buffer.set(x, 0, Cell { ch: 'a', ..red });
        }
        let out = present_to_string(&frame);
        assert_eq!(out.matches("38;2;255;0;0m").count(), 1);
    }

    #[test]
    fn cursor_request_positions_and_shows() {
        let mut frame = Frame::new(2, 2);
        frame.set_cursor(Some((1, 0)));
        let out = present_to_string(&frame);
        assert!(out.ends_with("\x1b[1;2H\x1b[?25h"));
    }

    #[test]
    fn rows_are_positioned_absolutely() {
        let frame = Frame::new(2, 3);
        let out = present_to_string(&frame);
        assert!(out.contains("\x1b[1;1H"));
        assert!(out.contains("\x1b[3;1H"));
    }
}
