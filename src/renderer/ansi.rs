//! ANSI escape sequences for terminal control.
//!
//! Only what the portfolio renderer emits:
//! - Cursor movement and visibility
//! - Screen clearing and the alternate screen
//! - TrueColor foreground/background
//! - Text attributes
//! - Synchronized output for flicker-free rendering

use crate::types::{Attr, Rgba};
use std::io::Write;

// =============================================================================
// Cursor Movement
// =============================================================================

/// Move cursor to absolute position (0-indexed input, 1-indexed on the wire).
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> std::io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25l")
}

#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25h")
}

// =============================================================================
// Screen Control
// =============================================================================

/// Clear screen and scrollback buffer.
#[inline]
pub fn clear_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[2J\x1b[3J\x1b[H")
}

#[inline]
pub fn enter_alt_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?1049h")
}

#[inline]
pub fn exit_alt_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?1049l")
}

/// Begin synchronized output (terminal buffers until end_sync).
#[inline]
pub fn begin_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026h")
}

/// End synchronized output (terminal flushes buffer).
#[inline]
pub fn end_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026l")
}

// =============================================================================
// Colors
// =============================================================================

/// Reset all attributes and colors.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[0m")
}

#[inline]
pub fn fg<W: Write>(w: &mut W, color: Rgba) -> std::io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[39m")
    } else {
        write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
    }
}

#[inline]
pub fn bg<W: Write>(w: &mut W, color: Rgba) -> std::io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[49m")
    } else {
        write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
    }
}

// =============================================================================
// Text Attributes
// =============================================================================

/// Set text attributes from bitflags.
#[allow(unused_assignments)]
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> std::io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }

    let mut first = true;
    write!(w, "\x1b[")?;

    macro_rules! emit {
        ($flag:expr, $code:expr) => {
            if attr.contains($flag) {
                if !first {
                    write!(w, ";")?;
                }
                write!(w, "{}", $code)?;
                first = false;
            }
        };
    }

    emit!(Attr::BOLD, 1);
    emit!(Attr::DIM, 2);
    emit!(Attr::ITALIC, 3);
    emit!(Attr::UNDERLINE, 4);
    emit!(Attr::INVERSE, 7);

    write!(w, "m")
}
