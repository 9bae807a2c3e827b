//! # Theme System
//!
//! Color themes for the landing page builder.
//!
//! ## Overview
//!
//! Rendering code never hardcodes a `ratatui::style::Color`; it asks the
//! active [`Theme`] for a semantic role instead (hero band, focused border,
//! error text, ...). `Ctrl+T` cycles through the built-in themes and the
//! choice is persisted in the user config.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default)
//! - **Catppuccin Latte** - light variant
//! - **Dracula**
//! - **Nord**
//! - **Gruvbox Dark**

use ratatui::style::Color;

/// Colors used by the builder, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name, also the value stored in the config file.
    pub name: &'static str,

    /// Background of the form and the features section.
    pub bg: Color,
    /// Regular text.
    pub fg: Color,
    /// Placeholder text, hints, footer.
    pub fg_dim: Color,

    /// Focused borders, the generate button and the CTA.
    pub accent: Color,
    /// Background of the hero band.
    pub hero_bg: Color,
    /// Text on top of the hero band.
    pub hero_fg: Color,

    /// Error messages.
    pub error: Color,
    /// Background behind a field that is being edited.
    pub editing_bg: Color,
}

impl Theme {
    /// All built-in themes, in cycling order.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after `self` in cycling order, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let index = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .map_or(0, |i| (i + 1) % BUILT_IN_THEMES.len());
        &BUILT_IN_THEMES[index]
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 5] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),            // base
        fg: Color::Rgb(205, 214, 244),         // text
        fg_dim: Color::Rgb(108, 112, 134),     // overlay0
        accent: Color::Rgb(137, 180, 250),     // blue
        hero_bg: Color::Rgb(203, 166, 247),    // mauve
        hero_fg: Color::Rgb(24, 24, 37),       // mantle
        error: Color::Rgb(243, 139, 168),      // red
        editing_bg: Color::Rgb(69, 71, 90),    // surface1
    },
    // 1 - Catppuccin Latte
    Theme {
        name: "Catppuccin Latte",
        bg: Color::Rgb(239, 241, 245),         // base
        fg: Color::Rgb(76, 79, 105),           // text
        fg_dim: Color::Rgb(156, 160, 176),     // overlay0
        accent: Color::Rgb(30, 102, 245),      // blue
        hero_bg: Color::Rgb(136, 57, 239),     // mauve
        hero_fg: Color::Rgb(230, 233, 239),    // mantle
        error: Color::Rgb(210, 15, 57),        // red
        editing_bg: Color::Rgb(188, 192, 204), // surface1
    },
    // 2 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),  // cyan
        hero_bg: Color::Rgb(189, 147, 249), // purple
        hero_fg: Color::Rgb(40, 42, 54),
        error: Color::Rgb(255, 85, 85),
        editing_bg: Color::Rgb(68, 71, 90),
    },
    // 3 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),  // frost
        hero_bg: Color::Rgb(94, 129, 172),  // frost (deep)
        hero_fg: Color::Rgb(236, 239, 244), // snow storm
        error: Color::Rgb(191, 97, 106),
        editing_bg: Color::Rgb(67, 76, 94),
    },
    // 4 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(250, 189, 47),   // yellow
        hero_bg: Color::Rgb(69, 133, 136),  // blue
        hero_fg: Color::Rgb(251, 241, 199),
        error: Color::Rgb(251, 73, 52),
        editing_bg: Color::Rgb(80, 73, 69),
    },
];
