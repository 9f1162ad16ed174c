//! This module provides a simple text terminal on top of a `TextSurface`.
//!
//! It proceeds on the next line when encountering `\n` or when a line is full,
//! and starts at the top again when reaching the lower end of the buffer.
//! Nothing is ever scrolled or erased by moving the cursor: after the wrap,
//! new text simply overwrites what was there before.
//!
//! It also implements `core::fmt::Write`, so that it can used with the `write!` (etc.) macros.

use core::fmt;

use super::{offset_at, Attribute, Color, TextSurface, VgaChar, HEIGHT, WIDTH};
use crate::config;

/// Glyph substituted for bytes outside of 7 bit ASCII on the formatting path.
const REPLACEMENT_GLYPH: u8 = 0xFE;

pub struct Terminal<S> {
    surface: S,
    // current output row
    row: usize,
    // current output column
    column: usize,
    /// attribute used for subsequent writes
    attribute: Attribute,
}

impl<S: TextSurface> Terminal<S> {
    /// Take over the surface and initialize it.
    pub fn new(surface: S) -> Terminal<S> {
        let mut term = Terminal {
            surface,
            row: 0,
            column: 0,
            attribute: Attribute::new(config::DEFAULT_FOREGROUND, config::DEFAULT_BACKGROUND),
        };
        term.initialize();
        term
    }

    /// Build a new terminal with the given initial colors, clearing the surface in those colors.
    pub fn with_colors(surface: S, fg: Color, bg: Color) -> Terminal<S> {
        let mut term = Terminal {
            surface,
            row: 0,
            column: 0,
            attribute: Attribute::new(fg, bg),
        };
        term.clear();
        term
    }

    /// Reset the colors to the defaults, blank every cell and move the cursor to the top left.
    pub fn initialize(&mut self) {
        self.set_colors(config::DEFAULT_FOREGROUND, config::DEFAULT_BACKGROUND);
        self.clear();
    }

    /// Set the colors that are used for subsequent writes.
    pub fn set_colors(&mut self, fg: Color, bg: Color) {
        self.attribute = Attribute::new(fg, bg);
    }

    /// Blank the surface in the current colors and reset the cursor to the top left.
    pub fn clear(&mut self) {
        self.surface.clear(VgaChar::blank(self.attribute));
        self.row = 0;
        self.column = 0;
    }

    /// Write a single character.
    /// This advances the cursor one step to the right.
    /// A newline character only moves the cursor to the start of the next line.
    pub fn put_char(&mut self, ch: u8) {
        if ch == b'\n' {
            self.next_line();
        } else {
            let entry = VgaChar::new(self.attribute, ch);
            self.surface.write(offset_at(self.row, self.column), entry);
            self.column += 1;
            if self.column == WIDTH {
                self.next_line();
            }
        }
    }

    /// Write a byte string at the current cursor position.
    pub fn write_bytes(&mut self, text: &[u8]) {
        for ch in text {
            self.put_char(*ch);
        }
    }

    /// Advance the cursor to the start of the next line, wrapping to the top.
    fn next_line(&mut self) {
        self.column = 0;
        self.row += 1;
        if self.row == HEIGHT {
            trace!("[vga] wrapping to the top row");
            self.row = 0;
        }
    }

    /// Current cursor position as (row, column).
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: TextSurface> fmt::Write for Terminal<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.bytes() {
            if ch <= 0x7F {
                self.put_char(ch);
            } else {
                self.put_char(REPLACEMENT_GLYPH);
            }
        }
        Ok(())
    }
}
