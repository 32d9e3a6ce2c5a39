// 🧭 Navigation Router - six fixed destinations
// Exactly one selection at a time; the page renderer is picked from it on every render.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavSelection {
    #[default]
    Home,
    Research,
    Projects,
    Skills,
    Awards,
    Contact,
}

impl NavSelection {
    /// Sidebar order
    pub const ALL: [NavSelection; 6] = [
        NavSelection::Home,
        NavSelection::Research,
        NavSelection::Projects,
        NavSelection::Skills,
        NavSelection::Awards,
        NavSelection::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavSelection::Home => "🏠 Home",
            NavSelection::Research => "🧠 Research",
            NavSelection::Projects => "🔬 Projects",
            NavSelection::Skills => "🛠 Skills",
            NavSelection::Awards => "🏅 Awards",
            NavSelection::Contact => "📬 Contact",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            NavSelection::Home => "home",
            NavSelection::Research => "research",
            NavSelection::Projects => "projects",
            NavSelection::Skills => "skills",
            NavSelection::Awards => "awards",
            NavSelection::Contact => "contact",
        }
    }

    /// Page heading (Home has none, its hero carries the greeting)
    pub fn title(&self) -> &'static str {
        match self {
            NavSelection::Home => "Home",
            NavSelection::Research => "Research",
            NavSelection::Projects => "Projects",
            NavSelection::Skills => "Skills",
            NavSelection::Awards => "Awards & Honors",
            NavSelection::Contact => "Contact",
        }
    }

    /// Exact label match. Anything else lands on Contact, so there is no "no match" state.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|nav| nav.label() == label)
            .unwrap_or(NavSelection::Contact)
    }

    /// Same dispatch rule as `from_label`, keyed by URL slug
    pub fn from_slug(slug: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|nav| nav.slug() == slug)
            .unwrap_or(NavSelection::Contact)
    }

    /// Path this destination is served at
    pub fn href(&self) -> String {
        format!("/page/{}", self.slug())
    }
}
