//! Footer line.

use chrono::Datelike;

use super::PageContext;
use crate::layout::{Edges, Node, TextStyle, Width};

/// Calendar year on the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn footer_text(ctx: &PageContext<'_>) -> String {
    format!(
        "© {} {} — {}",
        ctx.year,
        ctx.profile.name(),
        ctx.profile.footer_role
    )
}

pub fn footer(ctx: &PageContext<'_>) -> Node {
    Node::column()
        .width(Width::Percent(1.0))
        .padding(Edges::xy(2, 2))
        .child(Node::text(footer_text(ctx), TextStyle::new(ctx.theme.text_dim).centered()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_profile;
    use crate::theme::MIDNIGHT;

    #[test]
    fn test_footer_text() {
        let profile = builtin_profile();
        let ctx = PageContext {
            profile: &profile,
            theme: &MIDNIGHT,
            width: 80,
            md: true,
            year: 2026,
        };
        assert_eq!(footer_text(&ctx), "© 2026 Ritik Khare — Java Backend Developer");
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
