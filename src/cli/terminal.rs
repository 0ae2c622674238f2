//! Terminal capability detection and colouring

use owo_colors::{OwoColorize, colors::css};

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Colours replies, or leaves them plain when colour is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    /// Colour if stdout supports it.
    pub fn detect() -> Self {
        Self {
            color: supports_color(),
        }
    }

    /// Never colour.
    pub const fn plain() -> Self {
        Self { color: false }
    }

    /// Color as success (green)
    pub fn success(self, text: &str) -> String {
        if self.color {
            text.fg::<css::Green>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color as warning (amber)
    pub fn warning(self, text: &str) -> String {
        if self.color {
            text.fg::<css::Orange>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color as info (blue)
    pub fn info(self, text: &str) -> String {
        if self.color {
            text.fg::<css::LightBlue>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Dim the text
    pub fn dim(self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Palette;

    #[test]
    fn plain_palette_leaves_text_alone() {
        let palette = Palette::plain();
        assert_eq!(palette.success("ok"), "ok");
        assert_eq!(palette.warning("careful"), "careful");
        assert_eq!(palette.info("note"), "note");
        assert_eq!(palette.dim("quiet"), "quiet");
    }

    #[test]
    fn coloured_palette_wraps_text() {
        let palette = Palette { color: true };
        let coloured = palette.success("ok");
        assert_ne!(coloured, "ok");
        assert!(coloured.contains("ok"));
    }
}
