// 🖼️ Page Renderers - state + content -> HTML
// render() is pure: same state, same content, same year -> same document.

use anyhow::{Context, Result};
use askama::Template;
use chrono::{Datelike, Local};

use crate::contact::ContactState;
use crate::content::{Portfolio, SkillGroup};
use crate::nav::NavSelection;
use crate::session::ViewState;
use crate::templates::{
    AwardsTemplate, ContactTemplate, FooterTemplate, HomeTemplate, NavItem, PageTemplate,
    ProjectsTemplate, ResearchTemplate, SkillsTemplate, TextSegment,
};
use crate::theme::STYLESHEET_HREF;

pub const FOOTER_ATTRIBUTION: &str = "Built with Rust · Axum · Askama";

/// Skill cards are laid out over this many columns, by index modulo
pub const SKILL_COLUMNS: usize = 3;

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Render the full document for `state`
pub fn render(state: &ViewState, content: &Portfolio, year: i32) -> Result<String> {
    let body = render_page(state.nav, &state.contact, content)?;
    let footer = render_footer(year, &content.profile.name)?;

    let nav_items = NavSelection::ALL
        .iter()
        .map(|nav| NavItem {
            label: nav.label(),
            href: nav.href(),
            active: *nav == state.nav,
        })
        .collect();

    let page = PageTemplate {
        title: format!("{} — Portfolio", content.profile.name),
        theme: state.theme.as_str(),
        theme_css: state.theme.css_variables(),
        stylesheet_href: STYLESHEET_HREF,
        profile: &content.profile,
        nav_items,
        current_href: state.nav.href(),
        toggle_label: state.theme.toggle_label(),
        quick_links: &content.quick_links,
        body,
        footer,
    };

    page.render().context("Failed to render page layout")
}

/// Render with the footer year taken from the local clock
pub fn render_now(state: &ViewState, content: &Portfolio) -> Result<String> {
    render(state, content, Local::now().year())
}

/// Dispatch to exactly one page renderer
pub fn render_page(nav: NavSelection, contact: &ContactState, content: &Portfolio) -> Result<String> {
    match nav {
        NavSelection::Home => render_home(content),
        NavSelection::Research => render_research(content),
        NavSelection::Projects => render_projects(content),
        NavSelection::Skills => render_skills(content),
        NavSelection::Awards => render_awards(content),
        NavSelection::Contact => render_contact(contact, content),
    }
}

// ============================================================================
// PAGES
// ============================================================================

pub fn render_home(content: &Portfolio) -> Result<String> {
    HomeTemplate {
        first_name: &content.profile.first_name,
        about: about_segments(&content.profile.about),
        hero_tags: &content.profile.hero_tags,
        kpis: &content.kpis,
        highlights: &content.highlights,
    }
    .render()
    .context("Failed to render home page")
}

pub fn render_research(content: &Portfolio) -> Result<String> {
    ResearchTemplate {
        heading: NavSelection::Research.title(),
        entries: &content.research,
    }
    .render()
    .context("Failed to render research page")
}

pub fn render_projects(content: &Portfolio) -> Result<String> {
    ProjectsTemplate {
        heading: NavSelection::Projects.title(),
        projects: &content.projects,
    }
    .render()
    .context("Failed to render projects page")
}

pub fn render_skills(content: &Portfolio) -> Result<String> {
    SkillsTemplate {
        heading: NavSelection::Skills.title(),
        columns: skill_columns(&content.skills),
    }
    .render()
    .context("Failed to render skills page")
}

pub fn render_awards(content: &Portfolio) -> Result<String> {
    AwardsTemplate {
        heading: NavSelection::Awards.title(),
        awards: &content.awards,
    }
    .render()
    .context("Failed to render awards page")
}

pub fn render_contact(contact: &ContactState, content: &Portfolio) -> Result<String> {
    let (name, email, message) = match contact.draft() {
        Some(draft) => (draft.name.as_str(), draft.email.as_str(), draft.message.as_str()),
        None => ("", "", ""),
    };
    let error = match contact {
        ContactState::Error { error, .. } => Some(error.to_string()),
        _ => None,
    };

    ContactTemplate {
        heading: NavSelection::Contact.title(),
        recipient: &content.profile.contact_email,
        name,
        email,
        message,
        mailto: contact.mailto(),
        error,
    }
    .render()
    .context("Failed to render contact page")
}

pub fn render_footer(year: i32, owner: &str) -> Result<String> {
    FooterTemplate {
        year,
        owner,
        attribution: FOOTER_ATTRIBUTION,
    }
    .render()
    .context("Failed to render footer")
}

// ============================================================================
// HELPERS
// ============================================================================

/// Distribute groups over the fixed columns: group i goes to column i % 3
pub fn skill_columns(groups: &[SkillGroup]) -> Vec<Vec<&SkillGroup>> {
    let mut columns: Vec<Vec<&SkillGroup>> = vec![Vec::new(); SKILL_COLUMNS];
    for (i, group) in groups.iter().enumerate() {
        columns[i % SKILL_COLUMNS].push(group);
    }
    columns
}

/// Split `**bold**` markup into segments. An unclosed `**` stays bold to the end.
pub fn about_segments(text: &str) -> Vec<TextSegment> {
    text.split("**")
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| TextSegment {
            text: part.to_string(),
            bold: i % 2 == 1,
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
