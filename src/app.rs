//! The portfolio page: content, layout, motion and input handling.
//!
//! [`Portfolio`] owns every piece of page state. The event loop feeds it
//! input and time and asks it for frames; it never touches the terminal.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::components::{
    self, AnimatedBackground, CursorGlow, GradientTitle, HEADER_ROWS, Navbar, PageContext,
    ScrollProgress,
};
use crate::content::{Profile, Section};
use crate::error::Result;
use crate::layout::{DocumentLayout, ElementId, LinkId, layout_document};
use crate::links::{LinkOpener, open_or_warn};
use crate::motion::{
    CONTACT_HOVER, ElementMotion, FADE_UP, INSTANT, POP_IN, PROJECT_HOVER, SKILL_HOVER, Stagger,
    Transform,
};
use crate::pipeline::frame::{DocumentFrame, draw_document};
use crate::renderer::FrameBuffer;
use crate::state::animate::FrameLease;
use crate::state::input::{Action, wheel_delta};
use crate::state::pointer::{self, PointerAction, PointerEvent};
use crate::state::{FocusRing, Media, PageScroll, RevealLatch, ViewportObserver};
use crate::theme::Theme;

/// Largest time step fed to the springs in one frame.
const MAX_STEP: Duration = Duration::from_millis(100);

/// Elements that react to the pointer.
fn is_hoverable(id: ElementId) -> bool {
    matches!(
        id,
        ElementId::Skill(_) | ElementId::Project(_) | ElementId::ContactIcon(_)
    )
}

pub struct Portfolio {
    profile: Profile,
    theme: Theme,
    media: Media,
    scroll: PageScroll,
    layout: DocumentLayout,
    navbar: Navbar,
    motions: BTreeMap<ElementId, ElementMotion>,
    observer: ViewportObserver<ElementId>,
    latch: RevealLatch<ElementId>,
    background: AnimatedBackground,
    title: GradientTitle,
    glow: CursorGlow,
    progress: ScrollProgress,
    focus: FocusRing<LinkId>,
    hovered: Option<ElementId>,
    hovered_link: Option<LinkId>,
    hovered_nav: Option<Section>,
    opener: Box<dyn LinkOpener>,
    clicks: Rc<RefCell<Vec<(u16, u16)>>>,
    stop_clicks: Option<Box<dyn FnOnce()>>,
    lease: FrameLease,
    year: i32,
    started: Instant,
    last_tick: Instant,
    quit: bool,
}

impl Portfolio {
    /// Build the page for the current terminal size. Nothing is subscribed
    /// until [`Portfolio::mount`].
    pub fn new(
        profile: Profile,
        media: Media,
        opener: Box<dyn LinkOpener>,
        year: i32,
        now: Instant,
    ) -> Result<Self> {
        let theme = Theme::default();
        let scroll = PageScroll::new(0, media.height());
        let progress = ScrollProgress::new(&scroll, theme.primary);
        let navbar = Navbar::new(&profile);

        let mut motions = BTreeMap::new();
        motions.insert(ElementId::HeroText, ElementMotion::new(FADE_UP, None));
        motions.insert(ElementId::HeroAvatar, ElementMotion::new(POP_IN, None));
        motions.insert(ElementId::About, ElementMotion::new(FADE_UP, None));
        motions.insert(ElementId::Contact, ElementMotion::new(FADE_UP, None));
        for i in 0..profile.skills.len() {
            motions.insert(ElementId::Skill(i), ElementMotion::new(FADE_UP, Some(SKILL_HOVER)));
        }
        for i in 0..profile.projects.len() {
            motions.insert(ElementId::Project(i), ElementMotion::new(FADE_UP, Some(PROJECT_HOVER)));
        }
        for i in 0..profile.contact.len() {
            motions.insert(ElementId::ContactIcon(i), ElementMotion::new(INSTANT, Some(CONTACT_HOVER)));
        }

        let mut portfolio = Self {
            background: AnimatedBackground::new(theme.primary, theme.secondary, now),
            title: GradientTitle::new(theme.primary, theme.secondary, now),
            glow: CursorGlow::new(theme.primary),
            profile,
            theme,
            media,
            scroll,
            layout: DocumentLayout::default(),
            navbar,
            motions,
            observer: ViewportObserver::new(),
            latch: RevealLatch::new(),
            progress,
            focus: FocusRing::new(),
            hovered: None,
            hovered_link: None,
            hovered_nav: None,
            opener,
            clicks: Rc::new(RefCell::new(Vec::new())),
            stop_clicks: None,
            lease: FrameLease::new(),
            year,
            started: now,
            last_tick: now,
            quit: false,
        };
        portfolio.relayout()?;
        Ok(portfolio)
    }

    /// Subscribe to input and frames, and start the on-mount animations.
    pub fn mount(&mut self, now: Instant) {
        let reduced = self.media.prefers_reduced_motion();
        self.apply_reduced_motion(reduced);

        self.glow.mount();
        if self.stop_clicks.is_none() {
            let clicks = self.clicks.clone();
            let stop = pointer::on_click(move |event| clicks.borrow_mut().push((event.x, event.y)));
            self.stop_clicks = Some(Box::new(stop));
        }

        for id in [ElementId::HeroText, ElementId::HeroAvatar] {
            self.reveal(id, now, Duration::ZERO);
        }
        for i in 0..self.profile.contact.len() {
            self.reveal(ElementId::ContactIcon(i), now, Duration::ZERO);
        }
        self.last_tick = now;
        self.check_viewport(now);
        info!(
            width = self.media.width(),
            height = self.media.height(),
            document_rows = self.layout.height,
            reduced_motion = reduced,
            "portfolio mounted"
        );
    }

    /// Remove every subscription this page holds.
    pub fn unmount(&mut self) {
        self.glow.unmount();
        self.background.unmount();
        self.title.unmount();
        self.lease.release();
        if let Some(stop) = self.stop_clicks.take() {
            stop();
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn layout(&self) -> &DocumentLayout {
        &self.layout
    }

    pub fn scroll(&self) -> &PageScroll {
        &self.scroll
    }

    pub fn media(&self) -> &Media {
        &self.media
    }

    pub fn progress(&self) -> f32 {
        self.progress.progress()
    }

    pub fn glow(&self) -> &CursorGlow {
        &self.glow
    }

    pub fn motion(&self, id: ElementId) -> Option<&ElementMotion> {
        self.motions.get(&id)
    }

    pub fn hovered(&self) -> Option<ElementId> {
        self.hovered
    }

    pub fn focused_link(&self) -> Option<LinkId> {
        self.focus.focused()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Current transform of an element (identity for elements without motion).
    pub fn transform(&self, id: ElementId, now: Instant) -> Transform {
        self.motions
            .get(&id)
            .map_or(Transform::IDENTITY, |motion| motion.transform(now))
    }

    /// Where a link points.
    pub fn link_url(&self, link: LinkId) -> Option<&str> {
        let url = match link {
            LinkId::Resume => &self.profile.resume_path,
            LinkId::GitHub => &self.profile.github_url,
            LinkId::ProjectCode(i) => &self.profile.projects.get(i)?.repository_url,
            LinkId::Contact(i) => &self.profile.contact.get(i)?.url,
        };
        Some(url.as_str())
    }

    // =========================================================================
    // Layout
    // =========================================================================

    fn relayout(&mut self) -> Result<()> {
        let ctx = PageContext {
            profile: &self.profile,
            theme: &self.theme,
            width: self.media.width(),
            md: self.media.is_md(),
            year: self.year,
        };
        let root = components::page(&ctx);
        self.layout = layout_document(&root, ctx.width)?;
        self.scroll.set_extent(self.layout.height, self.media.height());

        let mut gated = vec![ElementId::About, ElementId::SkillGrid, ElementId::Contact];
        gated.extend((0..self.profile.projects.len()).map(ElementId::Project));
        for id in gated {
            if let Some(rect) = self.layout.element_rect(id) {
                self.observer.observe(id, rect);
            }
        }
        debug!(
            width = ctx.width,
            rows = self.layout.height,
            links = self.layout.links.len(),
            "document laid out"
        );
        Ok(())
    }

    /// React to a terminal resize.
    pub fn resize(&mut self, width: u16, height: u16, now: Instant) -> Result<()> {
        if !self.media.resize(width, height) {
            return Ok(());
        }
        self.set_hovered(None);
        self.hovered_link = None;
        self.hovered_nav = None;
        self.relayout()?;
        self.check_viewport(now);
        Ok(())
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.media.set_reduced_motion(reduced);
        self.apply_reduced_motion(reduced);
    }

    fn apply_reduced_motion(&mut self, reduced: bool) {
        for motion in self.motions.values_mut() {
            motion.set_reduced_motion(reduced);
        }
        self.background.mount(reduced);
        self.title.mount(reduced);
    }

    // =========================================================================
    // Reveal
    // =========================================================================

    fn reveal(&mut self, id: ElementId, now: Instant, delay: Duration) {
        if let Some(motion) = self.motions.get_mut(&id) {
            if motion.reveal(now, delay) {
                debug!(?id, ?delay, "reveal");
            }
        }
    }

    /// Fire one-shot reveals for regions that just came into view.
    fn check_viewport(&mut self, now: Instant) {
        let (top, bottom) = self.scroll.visible_rows();
        let changes = self.observer.update(top, bottom);
        for id in self.latch.fire_entered(&changes) {
            match id {
                ElementId::SkillGrid => {
                    for i in 0..self.profile.skills.len() {
                        self.reveal(ElementId::Skill(i), now, Stagger::CHILDREN.delay(i));
                    }
                }
                other => self.reveal(other, now, Duration::ZERO),
            }
        }
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Advance motion to `now`. Returns true while anything wants frames.
    pub fn tick(&mut self, now: Instant) -> bool {
        let dt = now.saturating_duration_since(self.last_tick).min(MAX_STEP);
        self.last_tick = now;

        self.check_viewport(now);
        self.glow.tick(now);

        let mut moving = false;
        for motion in self.motions.values_mut() {
            moving |= motion.tick(now, dt);
        }
        // A card hovered while still revealing picks up its hover once visible.
        if let Some(motion) = self.hovered.and_then(|id| self.motions.get_mut(&id)) {
            moving |= motion.pointer_enter();
        }
        self.lease.hold(moving);
        crate::state::is_animating()
    }

    /// Compose the screen at `now`.
    pub fn render(&self, now: Instant) -> FrameBuffer {
        let width = self.media.width();
        let height = self.media.height();
        let scroll = self.scroll.offset() as i32;
        let mut buffer = FrameBuffer::with_background(width, height, self.theme.background);

        self.background.draw(&mut buffer, now, scroll, self.layout.height);
        self.glow.draw(&mut buffer, now, self.media.is_md());

        let transform = |id: ElementId| self.transform(id, now);
        let gradient = |i: usize, len: usize| self.title.color_at(i, len, now);
        let frame = DocumentFrame {
            layout: &self.layout,
            theme: &self.theme,
            scroll,
            hovered: self.hovered,
            hovered_link: self.hovered_link,
            focused: self.focus.focused(),
            transform: &transform,
            gradient: &gradient,
        };
        draw_document(&mut buffer, &frame);

        self.navbar
            .draw(&mut buffer, &self.theme, self.media.is_md(), self.hovered_nav);
        self.progress.draw(&mut buffer);
        buffer
    }

    /// The whole document at rest, for a one-shot dump.
    pub fn render_export(&self) -> FrameBuffer {
        let width = self.media.width();
        let height = self.layout.height.max(1);
        let mut buffer = FrameBuffer::with_background(width, height, self.theme.background);

        self.background
            .draw(&mut buffer, self.started, 0, self.layout.height);

        let transform = |_: ElementId| Transform::IDENTITY;
        let gradient = |i: usize, len: usize| self.title.color_at(i, len, self.started);
        let frame = DocumentFrame {
            layout: &self.layout,
            theme: &self.theme,
            scroll: 0,
            hovered: None,
            hovered_link: None,
            focused: None,
            transform: &transform,
            gradient: &gradient,
        };
        draw_document(&mut buffer, &frame);
        self.navbar
            .draw(&mut buffer, &self.theme, self.media.is_md(), None);
        buffer
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Apply a key action.
    pub fn handle_action(&mut self, action: Action, now: Instant) {
        let before = self.scroll.offset();
        match action {
            Action::Scroll(rows) => {
                self.scroll.scroll_by(rows);
            }
            Action::PageUp => {
                self.scroll.page(false);
            }
            Action::PageDown => {
                self.scroll.page(true);
            }
            Action::Top => {
                self.scroll.scroll_to_top();
            }
            Action::Bottom => {
                self.scroll.scroll_to_bottom();
            }
            Action::Navigate(section) => self.navigate(section),
            Action::FocusNext => {
                if self.focus.focus_next(&self.layout.link_order()) {
                    self.scroll_focus_into_view();
                }
            }
            Action::FocusPrevious => {
                if self.focus.focus_previous(&self.layout.link_order()) {
                    self.scroll_focus_into_view();
                }
            }
            Action::Activate => {
                if let Some(link) = self.focus.focused() {
                    self.open(link);
                }
            }
            Action::Quit => self.quit = true,
        }
        // The document moved under a resting pointer.
        if self.scroll.offset() != before {
            if let Some((x, y)) = self.glow.pointer() {
                self.pointer_moved(x, y);
            }
        }
        self.check_viewport(now);
    }

    /// Scroll so the section starts just below the fixed header.
    pub fn navigate(&mut self, section: Section) {
        if let Some(row) = self.layout.anchor_row(section) {
            debug!(?section, row, "navigate");
            self.scroll.scroll_to_anchor(row, HEADER_ROWS);
        }
    }

    fn scroll_focus_into_view(&mut self) {
        let Some(rect) = self.focus.focused().and_then(|link| self.layout.link_rect(link)) else {
            return;
        };
        let (top, bottom) = self.scroll.visible_rows();
        if rect.y < top + HEADER_ROWS as i32 {
            self.scroll.scroll_to(rect.y - HEADER_ROWS as i32);
        } else if rect.bottom() > bottom {
            self.scroll.scroll_to(rect.bottom() - self.scroll.viewport_height() as i32);
        }
    }

    fn open(&self, link: LinkId) {
        if let Some(url) = self.link_url(link) {
            info!(?link, url, "open link");
            open_or_warn(self.opener.as_ref(), url);
        }
    }

    /// Route a pointer event: subscribers first, then hover, wheel and clicks.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) {
        pointer::dispatch(event);

        match event.action {
            PointerAction::Move => self.pointer_moved(event.x, event.y),
            PointerAction::Scroll => {
                self.scroll.scroll_by(wheel_delta(&event));
                self.pointer_moved(event.x, event.y);
            }
            PointerAction::Down | PointerAction::Up => {}
        }

        let clicks: Vec<(u16, u16)> = self.clicks.borrow_mut().drain(..).collect();
        for (x, y) in clicks {
            self.clicked(x as i32, y as i32);
        }
        self.check_viewport(now);
    }

    fn pointer_moved(&mut self, x: u16, y: u16) {
        let (x, y) = (x as i32, y as i32);
        let md = self.media.is_md();
        self.hovered_nav = Navbar::hit_test(self.media.width(), md, x, y);

        if y < HEADER_ROWS as i32 {
            self.set_hovered(None);
            self.hovered_link = None;
            return;
        }
        let doc_y = y + self.scroll.offset() as i32;
        let hovered = self.layout.element_at(x, doc_y, is_hoverable);
        self.set_hovered(hovered);
        self.hovered_link = self.layout.link_at(x, doc_y);
    }

    fn set_hovered(&mut self, next: Option<ElementId>) {
        if next == self.hovered {
            return;
        }
        if let Some(motion) = self.hovered.and_then(|id| self.motions.get_mut(&id)) {
            motion.pointer_leave();
        }
        self.hovered = next;
        if let Some(motion) = next.and_then(|id| self.motions.get_mut(&id)) {
            motion.pointer_enter();
        }
    }

    fn clicked(&mut self, x: i32, y: i32) {
        if y < HEADER_ROWS as i32 {
            if let Some(section) = Navbar::hit_test(self.media.width(), self.media.is_md(), x, y) {
                self.navigate(section);
            }
            return;
        }
        let doc_y = y + self.scroll.offset() as i32;
        if let Some(link) = self.layout.link_at(x, doc_y) {
            self.focus.focus(link);
            self.open(link);
        }
    }
}

impl Drop for Portfolio {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_profile;
    use crate::links::RecordingOpener;
    use crate::motion::Phase;
    use crate::state::animate::{get_subscriber_count, reset_frame_registry};
    use crate::state::pointer::{listener_count, reset_pointer_state};

    fn setup() {
        reset_pointer_state();
        reset_frame_registry();
    }

    fn portfolio(width: u16, height: u16, reduced: bool) -> (Portfolio, RecordingOpener, Instant) {
        let opener = RecordingOpener::new();
        let now = Instant::now();
        let media = Media::new(width, height, 80, reduced);
        let mut page = Portfolio::new(builtin_profile(), media, Box::new(opener.clone()), 2026, now).unwrap();
        page.mount(now);
        (page, opener, now)
    }

    fn run(page: &mut Portfolio, from: Instant, duration: Duration) -> Instant {
        let mut now = from;
        let end = from + duration;
        while now < end {
            now += Duration::from_millis(16);
            page.tick(now);
        }
        now
    }

    #[test]
    fn test_mount_reveals_hero_only() {
        setup();
        let (page, _, _) = portfolio(100, 30, false);
        assert_eq!(page.motion(ElementId::HeroText).unwrap().phase(), Phase::Revealing);
        assert_eq!(page.motion(ElementId::HeroAvatar).unwrap().phase(), Phase::Revealing);
        assert_eq!(page.motion(ElementId::Skill(0)).unwrap().phase(), Phase::Hidden);
        assert_eq!(page.motion(ElementId::Contact).unwrap().phase(), Phase::Hidden);
    }

    #[test]
    fn test_navigate_scrolls_below_header() {
        setup();
        let (mut page, _, now) = portfolio(100, 30, false);
        page.handle_action(Action::Navigate(Section::Projects), now);

        let row = page.layout().anchor_row(Section::Projects).unwrap();
        let expected = (row - HEADER_ROWS as i32).min(page.scroll().max_offset() as i32);
        assert_eq!(page.scroll().offset() as i32, expected);
        assert_eq!(
            page.motion(ElementId::Project(0)).unwrap().phase(),
            Phase::Revealing
        );
    }

    #[test]
    fn test_skill_cards_stagger() {
        setup();
        let (mut page, _, now) = portfolio(100, 30, false);
        page.navigate(Section::Skills);
        page.tick(now);

        let later = run(&mut page, now, Duration::from_millis(800));
        assert_eq!(page.motion(ElementId::Skill(0)).unwrap().phase(), Phase::Visible);
        // Card 9 starts 1.35 s after card 0.
        assert_eq!(page.motion(ElementId::Skill(9)).unwrap().phase(), Phase::Revealing);
        assert_eq!(page.transform(ElementId::Skill(9), later).opacity, 0.0);
    }

    #[test]
    fn test_focus_cycles_links_and_activates() {
        setup();
        let (mut page, opener, now) = portfolio(100, 30, false);
        page.handle_action(Action::FocusNext, now);
        assert_eq!(page.focused_link(), Some(LinkId::Resume));
        page.handle_action(Action::FocusPrevious, now);
        page.handle_action(Action::FocusPrevious, now);
        assert_eq!(page.focused_link(), Some(LinkId::Contact(1)));

        page.handle_action(Action::Activate, now);
        assert_eq!(opener.opened(), vec!["https://github.com/khare01".to_string()]);

        let rect = page.layout().link_rect(LinkId::Contact(1)).unwrap();
        let (top, bottom) = page.scroll().visible_rows();
        assert!(rect.y >= top && rect.bottom() <= bottom);
    }

    #[test]
    fn test_click_on_link_opens_it() {
        setup();
        let (mut page, opener, now) = portfolio(100, 30, false);
        let rect = page.layout().link_rect(LinkId::GitHub).unwrap();
        let (x, y) = (rect.x as u16 + 1, rect.y as u16 + 1);

        page.handle_pointer(PointerEvent::down(x, y), now);
        page.handle_pointer(PointerEvent::up(x, y), now);
        assert_eq!(opener.opened(), vec!["https://github.com/khare01".to_string()]);
        assert_eq!(page.focused_link(), Some(LinkId::GitHub));
    }

    #[test]
    fn test_click_on_nav_label_navigates() {
        setup();
        let (mut page, _, now) = portfolio(100, 30, false);
        let slot = Navbar::slots(100, true)[3];
        let (x, y) = (slot.rect.x as u16, slot.rect.y as u16);
        page.handle_pointer(PointerEvent::down(x, y), now);
        page.handle_pointer(PointerEvent::up(x, y), now);

        let row = page.layout().anchor_row(Section::Contact).unwrap();
        let expected = (row - HEADER_ROWS as i32).min(page.scroll().max_offset() as i32);
        assert_eq!(page.scroll().offset() as i32, expected);
    }

    #[test]
    fn test_unmount_releases_everything() {
        setup();
        let (mut page, _, _) = portfolio(100, 30, false);
        assert_eq!(listener_count(), 2);
        assert!(get_subscriber_count() >= 2);
        page.unmount();
        assert_eq!(listener_count(), 0);
        assert_eq!(get_subscriber_count(), 0);
    }

    #[test]
    fn test_resize_relayouts_and_clamps() {
        setup();
        let (mut page, _, now) = portfolio(100, 30, false);
        page.handle_action(Action::Bottom, now);
        let wide_rows = page.layout().height;

        page.resize(60, 30, now).unwrap();
        assert!(page.layout().height > wide_rows);
        assert!(page.scroll().offset() <= page.scroll().max_offset());
        assert!(!page.media().is_md());
    }

    #[test]
    fn test_render_fills_screen() {
        setup();
        let (mut page, _, now) = portfolio(100, 30, false);
        let later = run(&mut page, now, Duration::from_millis(1200));
        let frame = page.render(later);
        assert_eq!((frame.width(), frame.height()), (100, 30));
        assert!(frame.row_text(1).contains("Ritik"));
        assert!((0..30).any(|y| frame.row_text(y).contains("Java Backend Developer")));
    }

    #[test]
    fn test_hover_during_reveal_lifts_once_visible() {
        setup();
        let (mut page, _, now) = portfolio(100, 30, false);
        page.navigate(Section::Skills);
        page.tick(now);
        assert_eq!(page.motion(ElementId::Skill(0)).unwrap().phase(), Phase::Revealing);

        let rect = page.layout().element_rect(ElementId::Skill(0)).unwrap();
        let (x, y) = (rect.x + 1, rect.y + 1 - page.scroll().offset() as i32);
        page.handle_pointer(PointerEvent::move_to(x as u16, y as u16), now);
        assert_eq!(page.hovered(), Some(ElementId::Skill(0)));

        let later = run(&mut page, now, Duration::from_secs(2));
        page.handle_pointer(PointerEvent::move_to(x as u16 + 1, y as u16), later);
        assert_eq!(page.motion(ElementId::Skill(0)).unwrap().phase(), Phase::Hovered);
        assert!(page.transform(ElementId::Skill(0), later).y < 0.0);
    }

    #[test]
    fn test_key_scroll_rehits_resting_pointer() {
        setup();
        let (mut page, _, now) = portfolio(100, 30, false);
        page.navigate(Section::Skills);
        let now = run(&mut page, now, Duration::from_secs(3));

        let rect = page.layout().element_rect(ElementId::Skill(0)).unwrap();
        let (x, y) = (rect.x + 1, rect.y + 1 - page.scroll().offset() as i32);
        page.handle_pointer(PointerEvent::move_to(x as u16, y as u16), now);
        assert_eq!(page.hovered(), Some(ElementId::Skill(0)));

        page.handle_action(Action::Scroll(12), now);
        let doc_y = y + page.scroll().offset() as i32;
        let under = page.layout().element_at(x, doc_y, is_hoverable);
        assert_ne!(under, Some(ElementId::Skill(0)));
        assert_eq!(page.hovered(), under);
        assert_ne!(page.motion(ElementId::Skill(0)).unwrap().phase(), Phase::Hovered);
    }

    #[test]
    fn test_export_shows_everything() {
        setup();
        let (page, _, _) = portfolio(100, 30, false);
        let frame = page.render_export();
        assert_eq!(frame.height(), page.layout().height);
        let text: String = (0..frame.height()).map(|y| frame.row_text(y)).collect::<Vec<_>>().join("\n");
        assert!(text.contains("Technical Expertise"));
        assert!(text.contains("Protecting Images"));
        assert!(text.contains("© 2026 Ritik Khare"));
    }
}
