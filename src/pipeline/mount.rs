//! Mount API - terminal lifecycle, render effect and the event loop.
//!
//! ```text
//! input → Portfolio::tick → Portfolio::render → frame signal → render effect
//! ```
//!
//! The composed buffer is published on a signal; the one render effect
//! reading it diff-renders to the terminal. The loop blocks for the frame
//! interval while anything animates and for [`IDLE_WAIT`] otherwise.
//!
//! [`IDLE_WAIT`]: crate::state::animate::IDLE_WAIT

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::terminal;
use spark_signals::{Signal, effect, signal};
use tracing::{debug, info, warn};

use crate::app::Portfolio;
use crate::error::Result;
use crate::renderer::{DiffRenderer, FrameBuffer};
use crate::state::animate::{frame_interval, poll_timeout};
use crate::state::input::{self, InputEvent};

// =============================================================================
// Render effect
// =============================================================================

/// Run `draw` now and again every time `frame` changes. Returns the stop
/// function.
pub fn render_effect<F>(frame: Signal<FrameBuffer>, mut draw: F) -> Box<dyn FnOnce()>
where
    F: FnMut(&FrameBuffer) + 'static,
{
    let stop = effect(move || {
        let buffer = frame.get();
        draw(&buffer);
    });
    Box::new(stop)
}

// =============================================================================
// Mount Handle
// =============================================================================

/// Owns the terminal while the page is shown.
///
/// Dropping the handle restores the terminal on a best-effort basis;
/// [`MountHandle::unmount`] does the same and reports errors.
pub struct MountHandle {
    frame: Signal<FrameBuffer>,
    renderer: Rc<RefCell<DiffRenderer>>,
    stop_effect: Option<Box<dyn FnOnce()>>,
    is_fullscreen: bool,
}

impl MountHandle {
    /// Hand a composed frame to the render effect.
    pub fn present(&self, buffer: FrameBuffer) {
        self.frame.set(buffer);
    }

    /// Force a full redraw on the next frame.
    pub fn invalidate(&self) {
        self.renderer.borrow_mut().invalidate();
    }

    /// Stop rendering and restore the terminal.
    pub fn unmount(mut self) -> io::Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> io::Result<()> {
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
        if !self.is_fullscreen {
            return Ok(());
        }
        self.is_fullscreen = false;
        let mouse = input::disable_mouse();
        let screen = self.renderer.borrow_mut().exit_fullscreen();
        let raw = terminal::disable_raw_mode();
        mouse.and(screen).and(raw)
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Take over the terminal: raw mode, alternate screen, mouse capture, and
/// the render effect.
pub fn mount(width: u16, height: u16) -> io::Result<MountHandle> {
    terminal::enable_raw_mode()?;
    let renderer = Rc::new(RefCell::new(DiffRenderer::new()));
    let mut handle = MountHandle {
        frame: signal(FrameBuffer::new(width, height)),
        renderer: renderer.clone(),
        stop_effect: None,
        is_fullscreen: true,
    };
    renderer.borrow_mut().enter_fullscreen()?;
    input::enable_mouse()?;

    handle.stop_effect = Some(render_effect(handle.frame.clone(), move |buffer| {
        if let Err(err) = renderer.borrow_mut().render(buffer) {
            warn!(%err, "frame not written");
        }
    }));
    debug!(width, height, "terminal mounted");
    Ok(handle)
}

// =============================================================================
// Event Loop
// =============================================================================

/// Show the page until it asks to quit. The terminal is restored on every
/// exit path, including errors.
pub fn run(portfolio: &mut Portfolio, fps: u16) -> Result<()> {
    let handle = mount(portfolio.media().width(), portfolio.media().height())?;
    portfolio.mount(Instant::now());

    let result = event_loop(portfolio, &handle, fps);

    portfolio.unmount();
    handle.unmount()?;
    info!("terminal restored");
    result
}

fn event_loop(portfolio: &mut Portfolio, handle: &MountHandle, fps: u16) -> Result<()> {
    let mut frames: u64 = 0;
    loop {
        let now = Instant::now();
        portfolio.tick(now);
        handle.present(portfolio.render(now));
        frames += 1;

        if portfolio.should_quit() {
            debug!(frames, "quit requested");
            return Ok(());
        }

        drain_events(
            poll_timeout(fps),
            frame_interval(fps),
            |timeout| Ok(input::poll_event(timeout)?),
            |event| {
                if route_event(portfolio, event, Instant::now())? {
                    handle.invalidate();
                }
                Ok(())
            },
        )?;
    }
}

/// Most queued events applied between two frames.
const MAX_DRAIN: usize = 64;

/// Block up to `wait` for the first event, then take whatever else is queued
/// so bursts of pointer moves cost one frame. Stops after [`MAX_DRAIN`]
/// events or once `budget` has passed. Returns the number applied.
fn drain_events<P, A>(wait: Duration, budget: Duration, mut poll: P, mut apply: A) -> Result<usize>
where
    P: FnMut(Duration) -> Result<Option<InputEvent>>,
    A: FnMut(InputEvent) -> Result<()>,
{
    let mut timeout = wait;
    let mut started = None;
    let mut drained = 0;
    while drained < MAX_DRAIN {
        let Some(event) = poll(timeout)? else {
            break;
        };
        let started = *started.get_or_insert_with(Instant::now);
        apply(event)?;
        drained += 1;
        if started.elapsed() >= budget {
            break;
        }
        timeout = Duration::ZERO;
    }
    Ok(drained)
}

/// Apply one input event. Returns true when the screen size changed.
pub fn route_event(portfolio: &mut Portfolio, event: InputEvent, now: Instant) -> Result<bool> {
    match event {
        InputEvent::Key(action) => portfolio.handle_action(action, now),
        InputEvent::Pointer(pointer) => portfolio.handle_pointer(pointer, now),
        InputEvent::Resize(width, height) => {
            debug!(width, height, "resize");
            portfolio.resize(width, height, now)?;
            return Ok(true);
        }
        InputEvent::None => {}
    }
    Ok(false)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_profile;
    use crate::links::RecordingOpener;
    use crate::state::animate::reset_frame_registry;
    use crate::state::input::Action;
    use crate::state::pointer::reset_pointer_state;
    use crate::state::{Media, PointerEvent};
    use std::cell::Cell;

    fn setup() {
        reset_pointer_state();
        reset_frame_registry();
    }

    #[test]
    fn test_render_effect_follows_frame_signal() {
        let frame = signal(FrameBuffer::new(4, 1));
        let draws = Rc::new(Cell::new(0));
        let widths = Rc::new(RefCell::new(Vec::new()));

        let (d, w) = (draws.clone(), widths.clone());
        let stop = render_effect(frame.clone(), move |buffer| {
            d.set(d.get() + 1);
            w.borrow_mut().push(buffer.width());
        });
        assert_eq!(draws.get(), 1);

        frame.set(FrameBuffer::new(6, 1));
        assert_eq!(draws.get(), 2);
        assert_eq!(*widths.borrow(), vec![4, 6]);

        stop();
        frame.set(FrameBuffer::new(8, 1));
        assert_eq!(draws.get(), 2);
    }

    #[test]
    fn test_drain_stops_on_empty_queue() {
        let mut queued = vec![InputEvent::None, InputEvent::None];
        let drained = drain_events(
            Duration::ZERO,
            Duration::from_secs(1),
            |_| Ok(queued.pop()),
            |_| Ok(()),
        )
        .unwrap();
        assert_eq!(drained, 2);
    }

    #[test]
    fn test_drain_bounded_under_endless_motion() {
        let endless = |_: Duration| -> Result<Option<InputEvent>> {
            Ok(Some(InputEvent::Pointer(PointerEvent::move_to(1, 1))))
        };
        let drained = drain_events(Duration::ZERO, Duration::from_secs(60), endless, |_| Ok(())).unwrap();
        assert_eq!(drained, MAX_DRAIN);

        let drained = drain_events(Duration::ZERO, Duration::ZERO, endless, |_| Ok(())).unwrap();
        assert_eq!(drained, 1);
    }

    #[test]
    fn test_route_event() {
        setup();
        let now = Instant::now();
        let media = Media::new(100, 30, 80, false);
        let mut page =
            Portfolio::new(builtin_profile(), media, Box::new(RecordingOpener::new()), 2026, now).unwrap();
        page.mount(now);

        assert!(!route_event(&mut page, InputEvent::Key(Action::Bottom), now).unwrap());
        assert_eq!(page.scroll().offset(), page.scroll().max_offset());

        assert!(!route_event(&mut page, InputEvent::Pointer(PointerEvent::move_to(10, 10)), now).unwrap());
        assert_eq!(page.glow().pointer(), Some((10, 10)));

        assert!(route_event(&mut page, InputEvent::Resize(60, 20), now).unwrap());
        assert_eq!(page.media().width(), 60);

        route_event(&mut page, InputEvent::Key(Action::Quit), now).unwrap();
        assert!(page.should_quit());
    }
}
