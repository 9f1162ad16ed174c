//! Compile time configuration of the kernel.
//!
//! There is no command line and no persistent storage, everything the kernel
//! can be told lives here.

use crate::vga::Color;
use log::LevelFilter;

/// Colors the terminal starts out with.
pub const DEFAULT_FOREGROUND: Color = Color::LightGray;
pub const DEFAULT_BACKGROUND: Color = Color::Black;

/// Colors used for reporting a panic on screen.
pub const PANIC_FOREGROUND: Color = Color::White;
pub const PANIC_BACKGROUND: Color = Color::Red;

/// First line printed after boot, including its line break.
pub const GREETING: &[u8] = b"Hello, kernel World!\n";
/// Printed right after the greeting, without a line break.
pub const MOTTO: &[u8] = b"This is My Tiny OS.";

/// Most verbose level forwarded to the serial log.
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
