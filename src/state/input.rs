//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system with the pointer source and the page
//! key bindings.
//!
//! # API
//!
//! - `convert_mouse_event` - crossterm MouseEvent to [`PointerEvent`]
//! - `convert_key_event` - crossterm KeyEvent to a page [`Action`]
//! - `poll_event` - event check with timeout
//! - `enable_mouse` / `disable_mouse` - mouse capture (motion reports included)

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent,
    KeyEventKind, KeyModifiers, MouseButton as CrosstermMouseButton, MouseEvent as CrosstermMouseEvent,
    MouseEventKind, poll, read,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;

use super::pointer::{PointerAction, PointerEvent, ScrollDirection};
use super::scroll::{LINE_SCROLL, WHEEL_SCROLL};
use crate::content::Section;

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// What a key press asks the page to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Scroll by a number of rows (negative is up)
    Scroll(i32),
    PageUp,
    PageDown,
    Top,
    Bottom,
    /// Jump to a nav anchor
    Navigate(Section),
    FocusNext,
    FocusPrevious,
    /// Open the focused link
    Activate,
    Quit,
}

/// Unified event type
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(Action),
    /// Terminal resize event (new width, height)
    Resize(u16, u16),
    /// No event or unhandled event type
    None,
}

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert a crossterm mouse event. Only the left button and vertical wheel
/// mean anything to the page.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> Option<PointerEvent> {
    let (x, y) = (event.column, event.row);
    let pointer = match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => PointerEvent::move_to(x, y),
        MouseEventKind::Down(CrosstermMouseButton::Left) => PointerEvent::down(x, y),
        MouseEventKind::Up(CrosstermMouseButton::Left) => PointerEvent::up(x, y),
        MouseEventKind::ScrollUp => PointerEvent::scroll(x, y, ScrollDirection::Up),
        MouseEventKind::ScrollDown => PointerEvent::scroll(x, y, ScrollDirection::Down),
        _ => return None,
    };
    Some(pointer)
}

/// Rows one wheel notch scrolls, signed.
pub fn wheel_delta(event: &PointerEvent) -> i32 {
    match (event.action, event.scroll) {
        (PointerAction::Scroll, Some(ScrollDirection::Up)) => -WHEEL_SCROLL,
        (PointerAction::Scroll, Some(ScrollDirection::Down)) => WHEEL_SCROLL,
        _ => 0,
    }
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Map a key press to a page action.
pub fn convert_key_event(event: CrosstermKeyEvent) -> Option<Action> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let shift = event.modifiers.contains(KeyModifiers::SHIFT);

    let action = match event.code {
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Down | KeyCode::Char('j') => Action::Scroll(LINE_SCROLL),
        KeyCode::Up | KeyCode::Char('k') => Action::Scroll(-LINE_SCROLL),
        KeyCode::Char('d') if ctrl => Action::PageDown,
        KeyCode::Char('u') if ctrl => Action::PageUp,
        KeyCode::PageDown | KeyCode::Char(' ') => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Home | KeyCode::Char('g') => Action::Top,
        KeyCode::End | KeyCode::Char('G') => Action::Bottom,
        KeyCode::Char(c @ '1'..='4') => Action::Navigate(Section::from_key(c.to_digit(10)?)?),
        KeyCode::BackTab => Action::FocusPrevious,
        KeyCode::Tab if shift => Action::FocusPrevious,
        KeyCode::Tab => Action::FocusNext,
        KeyCode::Enter => Action::Activate,
        _ => return None,
    };
    Some(action)
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Convert any crossterm event.
pub fn convert_event(event: CrosstermEvent) -> InputEvent {
    match event {
        CrosstermEvent::Mouse(mouse) => convert_mouse_event(mouse).map_or(InputEvent::None, InputEvent::Pointer),
        CrosstermEvent::Key(key) => convert_key_event(key).map_or(InputEvent::None, InputEvent::Key),
        CrosstermEvent::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(convert_event(read()?)))
    } else {
        Ok(None)
    }
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================
