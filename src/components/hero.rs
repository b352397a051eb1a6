//! Hero section and its animated gradient title.

use std::time::{Duration, Instant};

use super::{PageContext, WIDE, container};
use crate::layout::{Align, Edges, ElementId, Justify, LinkId, Node, TextStyle, Width};
use crate::motion::{Easing, Repeat, Timeline};
use crate::state::animate::FrameLease;
use crate::types::{Attr, BorderStyle, Rgba};

/// Rows above the hero content (clears the fixed header).
pub const TOP_PADDING: u16 = 6;
const BOTTOM_PADDING: u16 = 4;
const AVATAR_WIDTH: u16 = 24;
const AVATAR_HEIGHT: u16 = 11;

pub fn hero(ctx: &PageContext<'_>) -> Node {
    let text = hero_text(ctx);
    let avatar = avatar(ctx);

    let body = if ctx.md {
        Node::row()
            .align(Align::Center)
            .justify(Justify::SpaceBetween)
            .gap(10, 0)
            .child(text.grow(1.0))
            .child(avatar)
    } else {
        Node::column().gap(0, 2).child(text).child(avatar)
    };

    container(WIDE)
        .padding(Edges::new(TOP_PADDING, 2, BOTTOM_PADDING, 2))
        .child(body)
}

fn hero_text(ctx: &PageContext<'_>) -> Node {
    let theme = ctx.theme;
    let profile = ctx.profile;

    let pill = Node::row().child(
        Node::column()
            .border(BorderStyle::Rounded, theme.border_strong)
            .background(Rgba::WHITE.with_alpha(0.1))
            .padding(Edges::xy(2, 0))
            .child(Node::text(&profile.tagline, TextStyle::new(theme.text))),
    );

    let resume = Node::column()
        .background(theme.primary_strong)
        .padding(Edges::xy(3, 1))
        .link(LinkId::Resume)
        .child(Node::text("⤓ Resume", TextStyle::new(theme.on_primary).bold()));

    let github = Node::column()
        .border(BorderStyle::Rounded, theme.border_strong)
        .padding(Edges::xy(3, 0))
        .link(LinkId::GitHub)
        .child(Node::text("⌥ GitHub", TextStyle::new(theme.text)));

    Node::column()
        .element(ElementId::HeroText)
        .child(pill)
        .child(Node::spacer(1))
        .child(Node::text(profile.name(), TextStyle::new(theme.text).bold()))
        .child(Node::text(&profile.role, TextStyle::new(theme.primary).bold().gradient()))
        .child(Node::spacer(1))
        .child(Node::text(&profile.summary, TextStyle::new(theme.text_muted)).max_width(64))
        .child(Node::spacer(2))
        .child(Node::row().gap(2, 0).child(resume).child(github))
}

/// Initials in a bordered frame standing in for the profile photo.
fn avatar(ctx: &PageContext<'_>) -> Node {
    let theme = ctx.theme;
    let initials: String = [&ctx.profile.first_name, &ctx.profile.last_name]
        .iter()
        .filter_map(|part| part.chars().next())
        .collect();

    let frame = Node::column()
        .width(Width::Cells(AVATAR_WIDTH))
        .height(AVATAR_HEIGHT)
        .border(BorderStyle::Rounded, theme.border_strong)
        .background(theme.surface)
        .justify(Justify::Center)
        .child(Node::text(initials, TextStyle::new(theme.primary).bold().centered()))
        .child(Node::text(
            file_name(&ctx.profile.profile_image_path),
            TextStyle::new(theme.text_dim).centered(),
        ));

    Node::row()
        .justify(if ctx.md { Justify::End } else { Justify::Center })
        .child(frame.element(ElementId::HeroAvatar))
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

// =============================================================================
// GRADIENT TITLE
// =============================================================================

/// Background position sweep of the role line: 0% to 100% over 4 s, then back.
pub const GRADIENT_SWEEP: Timeline =
    Timeline::new(Duration::from_secs(4), Repeat::Reverse, Easing::EaseInOut);

/// Cyan, blue, cyan gradient painted at twice the text width and slid across it.
#[derive(Debug)]
pub struct GradientTitle {
    stops: [Rgba; 3],
    started: Instant,
    reduced_motion: bool,
    lease: FrameLease,
}

impl GradientTitle {
    pub fn new(from: Rgba, via: Rgba, now: Instant) -> Self {
        Self {
            stops: [from, via, from],
            started: now,
            reduced_motion: false,
            lease: FrameLease::new(),
        }
    }

    /// Subscribe to frames while the sweep runs.
    pub fn mount(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
        self.lease.hold(!reduced_motion);
    }

    pub fn unmount(&mut self) {
        self.lease.release();
    }

    pub fn is_mounted(&self) -> bool {
        self.lease.is_held()
    }

    /// Background position in [0,1] at `now`.
    pub fn position(&self, now: Instant) -> f32 {
        if self.reduced_motion {
            return 0.0;
        }
        GRADIENT_SWEEP.eased(now.saturating_duration_since(self.started))
    }

    /// Color of column `col` of a `len`-column title at `now`.
    pub fn color_at(&self, col: usize, len: usize, now: Instant) -> Rgba {
        if len <= 1 {
            return self.stops[0];
        }
        // The gradient is 2x the text wide; position p shows [p/2, p/2 + 1/2].
        let offset = self.position(now) * 0.5;
        let t = offset + (col as f32 / (len - 1) as f32) * 0.5;
        let scaled = t.clamp(0.0, 1.0) * 2.0;
        let segment = (scaled.floor() as usize).min(1);
        Rgba::lerp(self.stops[segment], self.stops[segment + 1], scaled - segment as f32)
    }

    /// Attributes the title is drawn with.
    pub const fn attrs() -> Attr {
        Attr::BOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_profile;
    use crate::layout::layout_document;
    use crate::state::animate::{get_subscriber_count, reset_frame_registry};
    use crate::theme::MIDNIGHT;

    const CYAN: Rgba = Rgba::rgb(0x22, 0xd3, 0xee);
    const BLUE: Rgba = Rgba::rgb(0x3b, 0x82, 0xf6);

    fn setup() {
        reset_frame_registry();
    }

    #[test]
    fn test_gradient_sweeps_and_reverses() {
        setup();
        let start = Instant::now();
        let title = GradientTitle::new(CYAN, BLUE, start);

        assert_eq!(title.position(start), 0.0);
        assert_eq!(title.position(start + Duration::from_secs(4)), 1.0);
        assert!((title.position(start + Duration::from_secs(8))).abs() < 1e-4);

        // At 0% the left edge is the first stop; at 100% the right edge is the last.
        assert_eq!(title.color_at(0, 20, start), CYAN);
        assert_eq!(title.color_at(19, 20, start), BLUE);
        assert_eq!(title.color_at(19, 20, start + Duration::from_secs(4)), CYAN);
    }

    #[test]
    fn test_reduced_motion_holds_still() {
        setup();
        let start = Instant::now();
        let mut title = GradientTitle::new(CYAN, BLUE, start);
        title.mount(true);
        assert!(!title.is_mounted());
        assert_eq!(title.position(start + Duration::from_secs(2)), 0.0);
    }

    #[test]
    fn test_mount_subscribes_once() {
        setup();
        let mut title = GradientTitle::new(CYAN, BLUE, Instant::now());
        title.mount(false);
        title.mount(false);
        assert_eq!(get_subscriber_count(), 1);
        drop(title);
        assert_eq!(get_subscriber_count(), 0);
    }

    #[test]
    fn test_hero_layout_has_buttons_and_avatar() {
        let profile = builtin_profile();
        let ctx = PageContext {
            profile: &profile,
            theme: &MIDNIGHT,
            width: 120,
            md: true,
            year: 2026,
        };
        let layout = layout_document(&hero(&ctx), 120).unwrap();

        let text = layout.element_rect(ElementId::HeroText).unwrap();
        let avatar = layout.element_rect(ElementId::HeroAvatar).unwrap();
        assert!(avatar.x >= text.right());
        assert_eq!(text.y, TOP_PADDING as i32);
        assert_eq!(layout.link_order(), vec![LinkId::Resume, LinkId::GitHub]);
        assert!(layout.texts.iter().any(|t| t.line == "RK"));
        assert!(layout.texts.iter().any(|t| t.style.gradient));
    }
}
