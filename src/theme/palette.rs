//! The page palette (dark navy with cyan/blue accents).

use crate::types::Rgba;

/// Named colors used by the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgba,
    /// Card fill
    pub surface: Rgba,
    /// cyan-400
    pub primary: Rgba,
    /// cyan-500, the solid button fill
    pub primary_strong: Rgba,
    /// blue-500
    pub secondary: Rgba,
    /// slate-100
    pub text: Rgba,
    /// slate-200
    pub text_bright: Rgba,
    /// slate-300
    pub text_soft: Rgba,
    /// slate-400
    pub text_muted: Rgba,
    /// slate-500
    pub text_dim: Rgba,
    pub on_primary: Rgba,
    /// white at 10%
    pub border: Rgba,
    /// white at 20%
    pub border_strong: Rgba,
    /// cyan-400 at 50%
    pub border_hover: Rgba,
    /// black at 40%
    pub header: Rgba,
}

pub const MIDNIGHT: Theme = Theme {
    background: Rgba::rgb(0x0b, 0x10, 0x20),
    surface: Rgba::rgb(0x0f, 0x17, 0x2a),
    primary: Rgba::rgb(0x22, 0xd3, 0xee),
    primary_strong: Rgba::rgb(0x06, 0xb6, 0xd4),
    secondary: Rgba::rgb(0x3b, 0x82, 0xf6),
    text: Rgba::rgb(0xf1, 0xf5, 0xf9),
    text_bright: Rgba::rgb(0xe2, 0xe8, 0xf0),
    text_soft: Rgba::rgb(0xcb, 0xd5, 0xe1),
    text_muted: Rgba::rgb(0x94, 0xa3, 0xb8),
    text_dim: Rgba::rgb(0x64, 0x74, 0x8b),
    on_primary: Rgba::BLACK,
    border: Rgba::new(255, 255, 255, 26),
    border_strong: Rgba::new(255, 255, 255, 51),
    border_hover: Rgba::new(0x22, 0xd3, 0xee, 128),
    header: Rgba::new(0, 0, 0, 102),
};

impl Theme {
    /// Flatten a translucent color over an opaque one.
    pub fn over(color: Rgba, bg: Rgba) -> Rgba {
        Rgba::blend(color, bg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        MIDNIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_flattens_alpha() {
        let border = Theme::over(MIDNIGHT.border, MIDNIGHT.surface);
        assert!(border.is_opaque());
        assert!(border.r > MIDNIGHT.surface.r && border.r < 255);
    }
}
