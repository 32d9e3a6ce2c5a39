// 🎨 Theme Controller - dark/light style variables
// Every fragment reads colors through CSS variables, so renderers never branch on theme.

use serde::{Deserialize, Serialize};

// ============================================================================
// THEME
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Flip between dark and light
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// The other theme, without mutating
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Button label: names the theme you switch TO, not the current one
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Dark => "☀️ Light",
            Theme::Light => "🌙 Dark",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }

    /// The `:root{...}` block injected ahead of the base stylesheet
    pub fn css_variables(&self) -> String {
        self.palette().to_css()
    }
}

// ============================================================================
// PALETTE
// ============================================================================

/// Named color/shadow variables consumed by the stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub bg: &'static str,
    pub panel: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub accent2: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
}

pub const DARK: Palette = Palette {
    bg: "#0b1020",
    panel: "#0f162f",
    text: "#ecf2ff",
    muted: "#9bb0ff",
    accent: "#7c5cff",
    accent2: "#00e6a8",
    card: "#0d1430",
    border: "rgba(255,255,255,0.08)",
    shadow: "0 10px 30px rgba(0,0,0,.45)",
};

pub const LIGHT: Palette = Palette {
    bg: "#f6f8ff",
    panel: "#ffffff",
    text: "#16213e",
    muted: "#5763a7",
    accent: "#5b43ff",
    accent2: "#00b894",
    card: "#ffffff",
    border: "rgba(0,0,0,0.06)",
    shadow: "0 10px 30px rgba(0,0,0,.08)",
};

impl Palette {
    pub fn variables(&self) -> [(&'static str, &'static str); 9] {
        [
            ("--bg", self.bg),
            ("--panel", self.panel),
            ("--text", self.text),
            ("--muted", self.muted),
            ("--accent", self.accent),
            ("--accent2", self.accent2),
            ("--card", self.card),
            ("--border", self.border),
            ("--shadow", self.shadow),
        ]
    }

    pub fn to_css(&self) -> String {
        let body: Vec<String> = self
            .variables()
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect();
        format!(":root{{ {} }}", body.join(" "))
    }
}

/// Base stylesheet shared by both themes, linked from every page
pub const BASE_STYLESHEET: &str = include_str!("../static/portfolio.css");
pub const STYLESHEET_HREF: &str = "/static/portfolio.css";

// ============================================================================
// TESTS
// ============================================================================
