//! Pointer Module - Pointer event source and handler registry
//!
//! Components subscribe to pointer events with the `on_*` functions and keep
//! the returned cleanup until they unmount. Nothing here stores "the" pointer
//! position; each subscriber keeps whatever it needs in its own signals.
//!
//! # API
//!
//! - `on_pointer_move(fn)` - Pointer moved (with or without a button held)
//! - `on_click(fn)` - Left button released over the same cell it went down on
//! - wheel events are not delivered to subscribers; the page scrolls on them
//! - `dispatch(event)` - Deliver an event to the subscribers
//! - `listener_count()` - Live subscriptions (leak checks)
//!
//! # Example
//!
//! ```ignore
//! use spark_folio::state::pointer;
//!
//! let cleanup = pointer::on_pointer_move(|event| {
//!     println!("pointer at ({}, {})", event.x, event.y);
//! });
//! cleanup();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// TYPES
// =============================================================================

/// Pointer action type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Up,
    Move,
    Scroll,
}

/// Scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Pointer event in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub action: PointerAction,
    /// X coordinate (0-indexed column)
    pub x: u16,
    /// Y coordinate (0-indexed row)
    pub y: u16,
    /// Only set for scroll events
    pub scroll: Option<ScrollDirection>,
}

impl PointerEvent {
    pub fn new(action: PointerAction, x: u16, y: u16) -> Self {
        Self {
            action,
            x,
            y,
            scroll: None,
        }
    }

    pub fn move_to(x: u16, y: u16) -> Self {
        Self::new(PointerAction::Move, x, y)
    }

    pub fn down(x: u16, y: u16) -> Self {
        Self::new(PointerAction::Down, x, y)
    }

    pub fn up(x: u16, y: u16) -> Self {
        Self::new(PointerAction::Up, x, y)
    }

    pub fn scroll(x: u16, y: u16, direction: ScrollDirection) -> Self {
        Self {
            action: PointerAction::Scroll,
            x,
            y,
            scroll: Some(direction),
        }
    }
}

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

/// Handler for pointer events.
pub type PointerHandler = Rc<dyn Fn(&PointerEvent)>;

#[derive(Default)]
struct HandlerRegistry {
    move_handlers: Vec<(usize, PointerHandler)>,
    click_handlers: Vec<(usize, PointerHandler)>,
    /// Cell the left button went down on
    pressed_at: Option<(u16, u16)>,
    next_id: usize,
}

impl HandlerRegistry {
    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn list(&mut self, kind: HandlerKind) -> &mut Vec<(usize, PointerHandler)> {
        match kind {
            HandlerKind::Move => &mut self.move_handlers,
            HandlerKind::Click => &mut self.click_handlers,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum HandlerKind {
    Move,
    Click,
}

thread_local! {
    static REGISTRY: RefCell<HandlerRegistry> = RefCell::new(HandlerRegistry::default());
}

fn register(kind: HandlerKind, handler: PointerHandler) -> impl FnOnce() {
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.list(kind).push((id, handler));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            reg.borrow_mut().list(kind).retain(|(handler_id, _)| *handler_id != id);
        });
    }
}

// =============================================================================
// PUBLIC API - REGISTRATION
// =============================================================================

/// Register a pointer-move handler. Returns cleanup function.
pub fn on_pointer_move<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&PointerEvent) + 'static,
{
    register(HandlerKind::Move, Rc::new(handler))
}

/// Register a click handler. Returns cleanup function.
pub fn on_click<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&PointerEvent) + 'static,
{
    register(HandlerKind::Click, Rc::new(handler))
}

/// Number of live pointer subscriptions.
pub fn listener_count() -> usize {
    REGISTRY.with(|reg| {
        let reg = reg.borrow();
        reg.move_handlers.len() + reg.click_handlers.len()
    })
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Deliver an event to its subscribers.
///
/// Handlers are cloned out of the registry before they run, so a handler may
/// subscribe or unsubscribe without re-entering a borrow.
pub fn dispatch(event: PointerEvent) {
    let handlers: Vec<PointerHandler> = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        match event.action {
            PointerAction::Move => clone_handlers(&reg.move_handlers),
            PointerAction::Scroll => Vec::new(),
            PointerAction::Down => {
                reg.pressed_at = Some((event.x, event.y));
                Vec::new()
            }
            PointerAction::Up => {
                if reg.pressed_at.take() == Some((event.x, event.y)) {
                    clone_handlers(&reg.click_handlers)
                } else {
                    Vec::new()
                }
            }
        }
    });

    for handler in handlers {
        handler(&event);
    }
}

fn clone_handlers(list: &[(usize, PointerHandler)]) -> Vec<PointerHandler> {
    list.iter().map(|(_, handler)| handler.clone()).collect()
}

/// Reset all pointer state (for testing).
pub fn reset_pointer_state() {
    REGISTRY.with(|reg| *reg.borrow_mut() = HandlerRegistry::default());
}

// =============================================================================
// TESTS
// =============================================================================
