// Portfolio Site - Core Library
// Exposes content, state and renderers for the web server and tests

pub mod config;
pub mod contact;   // Contact form validation + mailto links
pub mod content;   // Compiled-in datasets
pub mod nav;       // Six fixed destinations
pub mod render;    // Pure page renderers
pub mod session;   // ViewState + per-browser session store
pub mod templates; // Askama template structs
pub mod theme;     // Dark/light style variables

#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use config::ServerConfig;
pub use contact::{ContactError, ContactState, ContactSubmission, Field};
pub use content::{
    Award, ContentIssue, Highlight, Kpi, Link, Portfolio, Profile, Project, QuickLink,
    ResearchEntry, Severity, SkillGroup,
};
pub use nav::NavSelection;
pub use render::{render, render_now, render_page};
pub use session::{SessionStore, ViewState};
pub use theme::{Palette, Theme};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
