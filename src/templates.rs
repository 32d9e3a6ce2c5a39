//! Askama template structs for the portfolio pages.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Templates escape every interpolated value unless it is passed through `|safe`.

use askama::Template;

use crate::content::{Award, Highlight, Kpi, Profile, Project, QuickLink, ResearchEntry, SkillGroup};

/// One sidebar navigation entry.
pub struct NavItem {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// A run of about-text, bold or plain.
#[derive(Debug, PartialEq, Eq)]
pub struct TextSegment {
    pub text: String,
    pub bold: bool,
}

/// Whole document: theme variables, stylesheet link, sidebar, page body, footer.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub title: String,
    pub theme: &'static str,
    pub theme_css: String,
    pub stylesheet_href: &'static str,
    pub profile: &'a Profile,
    pub nav_items: Vec<NavItem>,
    pub current_href: String,
    pub toggle_label: &'static str,
    pub quick_links: &'a [QuickLink],
    pub body: String,
    pub footer: String,
}

#[derive(Template)]
#[template(path = "footer.html")]
pub struct FooterTemplate<'a> {
    pub year: i32,
    pub owner: &'a str,
    pub attribution: &'static str,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub first_name: &'a str,
    pub about: Vec<TextSegment>,
    pub hero_tags: &'a [String],
    pub kpis: &'a [Kpi],
    pub highlights: &'a [Highlight],
}

#[derive(Template)]
#[template(path = "research.html")]
pub struct ResearchTemplate<'a> {
    pub heading: &'static str,
    pub entries: &'a [ResearchEntry],
}

#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate<'a> {
    pub heading: &'static str,
    pub projects: &'a [Project],
}

#[derive(Template)]
#[template(path = "skills.html")]
pub struct SkillsTemplate<'a> {
    pub heading: &'static str,
    pub columns: Vec<Vec<&'a SkillGroup>>,
}

#[derive(Template)]
#[template(path = "awards.html")]
pub struct AwardsTemplate<'a> {
    pub heading: &'static str,
    pub awards: &'a [Award],
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    pub heading: &'static str,
    pub recipient: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub mailto: Option<&'a str>,
    pub error: Option<String>,
}

/// Fallback page when rendering itself fails.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub title: &'a str,
    pub message: &'a str,
}
