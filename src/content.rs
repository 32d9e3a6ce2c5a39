// 📚 Portfolio Content - compiled-in data
// Built once at startup, never mutated. Edit the literals in `Portfolio::default()`.

use serde::Serialize;
use std::collections::HashSet;

// ============================================================================
// ENTITIES
// ============================================================================

/// Who the site is about, plus the sidebar's fixed URLs
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub first_name: String,
    pub tagline: String,
    pub avatar_url: String,
    pub avatar_caption: String,
    /// About text; `**bold**` spans are rendered as <strong>
    pub about: String,
    pub hero_tags: Vec<String>,
    pub resume_url: String,
    /// Fixed recipient of contact-form mail links
    pub contact_email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickLink {
    pub icon: String,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Kpi {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub blurb: String,
}

/// One external link button under a project card
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub title: String,
    pub year: String,
    pub blurb: String,
    pub stack: Vec<String>,
    /// Ordered label -> URL mapping; may be empty
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResearchEntry {
    pub role: String,
    pub org: String,
    pub when: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Award {
    pub title: String,
    pub org: String,
    pub when: String,
}

/// Every dataset the page renderers read
#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub quick_links: Vec<QuickLink>,
    pub kpis: Vec<Kpi>,
    pub highlights: Vec<Highlight>,
    pub projects: Vec<Project>,
    pub research: Vec<ResearchEntry>,
    pub skills: Vec<SkillGroup>,
    pub awards: Vec<Award>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn links(items: &[(&str, &str)]) -> Vec<Link> {
    items
        .iter()
        .map(|(label, url)| Link {
            label: label.to_string(),
            url: url.to_string(),
        })
        .collect()
}

impl Project {
    fn new(title: &str, year: &str, blurb: &str, stack: &[&str], link_pairs: &[(&str, &str)]) -> Self {
        Project {
            title: title.to_string(),
            year: year.to_string(),
            blurb: blurb.to_string(),
            stack: strings(stack),
            links: links(link_pairs),
        }
    }
}

impl SkillGroup {
    fn new(category: &str, skills: &[&str]) -> Self {
        SkillGroup {
            category: category.to_string(),
            skills: strings(skills),
        }
    }
}

impl Award {
    fn new(title: &str, org: &str, when: &str) -> Self {
        Award {
            title: title.to_string(),
            org: org.to_string(),
            when: when.to_string(),
        }
    }
}

// ============================================================================
// DATA
// ============================================================================

impl Default for Portfolio {
    fn default() -> Self {
        let profile = Profile {
            name: "Abhinav Kochar".to_string(),
            first_name: "Abhinav".to_string(),
            tagline: "Data Scientist · AI/ML Engineer · CV Researcher".to_string(),
            avatar_url: "https://avatars.githubusercontent.com/u/9919?s=200&v=4".to_string(),
            avatar_caption: "(Replace with your photo/logo URL)".to_string(),
            about: "I'm a results-driven **Data Scientist & AI/ML Engineer** focused on \
                    **Computer Vision, LLMs, Multimodal AI,** and **Quantum ML**. \
                    I build **real-time intelligent systems** end-to-end, from research and \
                    modeling to deployment and delightful UX."
                .to_string(),
            hero_tags: strings(&[
                "Computer Vision",
                "LLMs & RAG",
                "Agentic AI",
                "Time Series",
                "Quantum ML",
                "Knowledge Graphs",
                "AWS",
                "Rust",
            ]),
            resume_url: "https://your-link-to-resume.pdf".to_string(),
            contact_email: "abhihk02@gmail.com".to_string(),
        };

        let quick_links = vec![
            QuickLink {
                icon: "🌐".to_string(),
                label: "Website".to_string(),
                url: "https://your-website.com".to_string(),
            },
            QuickLink {
                icon: "💼".to_string(),
                label: "LinkedIn".to_string(),
                url: "https://linkedin.com/in/abhinavkochar".to_string(),
            },
            QuickLink {
                icon: "🐙".to_string(),
                label: "GitHub".to_string(),
                url: "https://github.com/abhinavkochar9".to_string(),
            },
            QuickLink {
                icon: "✉️".to_string(),
                label: "Email".to_string(),
                url: format!("mailto:{}", profile.contact_email),
            },
        ];

        let kpis = [
            ("2+ yrs", "Data Analytics"),
            ("1+ yr", "Advanced AI Research"),
            ("3", "Tech Awards"),
            ("4+", "Production Projects"),
        ]
        .iter()
        .map(|(value, label)| Kpi {
            value: value.to_string(),
            label: label.to_string(),
        })
        .collect();

        let highlights = [
            (
                "🧠",
                "Multimodal & Agentic AI",
                "Vision + LLMs + Signals with RAG and knowledge graphs to deliver intelligent, real-time feedback.",
            ),
            (
                "🔬",
                "Research → Product",
                "End-to-end ownership: problem framing, modeling, MLOps, UX, and launch.",
            ),
            (
                "⚡",
                "Fast, Delightful UX",
                "Web apps that feel premium: clean layout, micro-interactions, and accessible defaults.",
            ),
        ]
        .iter()
        .map(|(icon, title, blurb)| Highlight {
            icon: icon.to_string(),
            title: title.to_string(),
            blurb: blurb.to_string(),
        })
        .collect();

        let projects = vec![
            Project::new(
                "Spectra — Stock Forecasting with Quantum ML",
                "2025",
                "Quantum-enhanced transformer for NIFTY50 forecasting (79% accuracy, RMSE 0.21). 30-min forward predictions for options.",
                &["Qiskit", "PyTorch", "Transformers", "Time Series"],
                &[
                    ("GitHub", "https://github.com/your/spectra"),
                    ("Demo", "https://your-demo-link"),
                ],
            ),
            Project::new(
                "PoseCorrect — AI-Powered Rehabilitation",
                "2025",
                "Real-time pose tracking + RAG-grounded LLM feedback for generalized exercises. Web UI with overlays.",
                &["MediaPipe", "PyTorch", "LangChain", "FAISS", "Streamlit"],
                &[("GitHub", "https://github.com/your/posecorrect")],
            ),
            Project::new(
                "FluidCloud — Decentralized Personal Cloud",
                "2024",
                "Erasure-coded, encrypted shards distributed over user devices via libp2p/IPFS. Privacy-first, self-healing.",
                &["Rust", "libp2p", "IPFS", "Reed-Solomon"],
                &[("GitHub", "https://github.com/your/fluidcloud")],
            ),
            Project::new(
                "CloudExpense — Serverless Expense Manager",
                "2024",
                "AWS Textract OCR → parsing → real-time split with taxes/tips. Streamlit dashboard.",
                &["AWS", "Textract", "Lambda", "Streamlit", "Flask"],
                &[("GitHub", "https://github.com/your/cloudexpense")],
            ),
        ];

        let research = vec![ResearchEntry {
            role: "Graduate Research Assistant".to_string(),
            org: "UMKC — Dr. Mei Fu's Lymphedema Research Lab".to_string(),
            when: "2024 — Present".to_string(),
            bullets: strings(&[
                "Real-time CV pose tracking and LLM voice guidance for rehabilitation.",
                "Exercise Knowledge Graph + Graph-RAG for precise instruction delivery.",
                "MCP integration for EMG forecasting and next-posture prediction.",
            ]),
        }];

        let skills = vec![
            SkillGroup::new(
                "AI/ML",
                &["PyTorch", "Transformers", "scikit-learn", "LLMs", "RAG", "Knowledge Graphs"],
            ),
            SkillGroup::new("Vision", &["OpenCV", "MediaPipe", "YOLO", "Pose Estimation"]),
            SkillGroup::new(
                "Cloud/Dev",
                &["AWS", "Docker", "GitHub Actions", "FastAPI", "Flask", "Streamlit"],
            ),
            SkillGroup::new("Data", &["Pandas", "NumPy", "Plotly", "SQL", "Tableau", "Power BI"]),
            SkillGroup::new("Quantum", &["Qiskit", "Hybrid Models", "QEC"]),
            SkillGroup::new("Langs", &["Python", "R", "Java", "C", "Rust", "SQL"]),
        ];

        let awards = vec![
            Award::new("2nd Prize — Quantum Computing Track", "UMKC Researchathon", "Spring 2025"),
            Award::new("Honorable Mention — Doctoral AI Track", "UMKC Researchathon", "Spring 2025"),
            Award::new("Exemplary Performance Award", "Cloud Computing Course", "2024"),
            Award::new("International Student Ambassador (Selective)", "UMKC", "2024"),
        ];

        Portfolio {
            profile,
            quick_links,
            kpis,
            highlights,
            projects,
            research,
            skills,
            awards,
        }
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Critical, // Renders, but a field the layout depends on is missing
    Warning,  // Renders fine, looks incomplete
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentIssue {
    pub severity: Severity,
    pub field: String,
    pub issue: String,
}

impl ContentIssue {
    fn critical(field: String, issue: &str) -> Self {
        ContentIssue {
            severity: Severity::Critical,
            field,
            issue: issue.to_string(),
        }
    }

    fn warning(field: String, issue: &str) -> Self {
        ContentIssue {
            severity: Severity::Warning,
            field,
            issue: issue.to_string(),
        }
    }
}

impl Portfolio {
    /// Check the data-model invariants. Never fails; the caller decides what to do with issues.
    pub fn validate(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();

        for (i, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                issues.push(ContentIssue::critical(
                    format!("projects[{}].title", i),
                    "project title is empty",
                ));
            }
            if project.stack.iter().all(|tag| tag.trim().is_empty()) {
                issues.push(ContentIssue::warning(
                    format!("projects[{}].stack", i),
                    "project has no stack tags",
                ));
            }
            for (j, link) in project.links.iter().enumerate() {
                if link.url.trim().is_empty() {
                    issues.push(ContentIssue::warning(
                        format!("projects[{}].links[{}]", i, j),
                        "link has no URL",
                    ));
                }
            }
        }

        for (i, entry) in self.research.iter().enumerate() {
            if entry.bullets.is_empty() {
                issues.push(ContentIssue::warning(
                    format!("research[{}].bullets", i),
                    "research entry has no bullets",
                ));
            }
        }

        let mut categories = HashSet::new();
        for (i, group) in self.skills.iter().enumerate() {
            if !categories.insert(group.category.as_str()) {
                issues.push(ContentIssue::critical(
                    format!("skills[{}].category", i),
                    "duplicate skill category",
                ));
            }
        }

        for (i, kpi) in self.kpis.iter().enumerate() {
            if kpi.value.trim().is_empty() {
                issues.push(ContentIssue::warning(
                    format!("kpis[{}].value", i),
                    "KPI value is empty",
                ));
            }
            if kpi.label.trim().is_empty() {
                issues.push(ContentIssue::warning(
                    format!("kpis[{}].label", i),
                    "KPI label is empty",
                ));
            }
        }

        for (i, award) in self.awards.iter().enumerate() {
            if award.title.trim().is_empty() {
                issues.push(ContentIssue::warning(
                    format!("awards[{}].title", i),
                    "award title is empty",
                ));
            }
        }

        if self.profile.contact_email.trim().is_empty() {
            issues.push(ContentIssue::critical(
                "profile.contact_email".to_string(),
                "contact recipient is empty",
            ));
        }

        issues
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shipped_content_is_valid() {
        let portfolio = Portfolio::default();
        let issues = portfolio.validate();
        assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
    }

    #[test]
    fn test_shipped_content_shape() {
        let portfolio = Portfolio::default();
        assert_eq!(portfolio.kpis.len(), 4);
        assert_eq!(portfolio.highlights.len(), 3);
        assert_eq!(portfolio.quick_links.len(), 4);
        assert_eq!(portfolio.projects.len(), 4);
        assert_eq!(portfolio.research.len(), 1);
        assert_eq!(portfolio.skills.len(), 6);
        assert_eq!(portfolio.awards.len(), 4);
        assert_eq!(portfolio.projects[0].links.len(), 2);
    }

    #[test]
    fn test_duplicate_category_flagged() {
        let mut portfolio = Portfolio::default();
        portfolio.skills.push(SkillGroup::new("Vision", &["OpenCV"]));

        let issues = portfolio.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Critical);
        assert_eq!(issues[0].field, "skills[6].category");
    }

    #[test]
    fn test_empty_stack_and_bullets_flagged() {
        let mut portfolio = Portfolio::default();
        portfolio.projects[1].stack.clear();
        portfolio.research[0].bullets.clear();

        let fields: Vec<String> = portfolio.validate().into_iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec!["projects[1].stack".to_string(), "research[0].bullets".to_string()]
        );
    }

    #[test]
    fn test_empty_kpi_fields_flagged() {
        let mut portfolio = Portfolio::default();
        portfolio.kpis[2].label.clear();
        portfolio.kpis[3].value = "  ".to_string();

        let issues = portfolio.validate();
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["kpis[2].label", "kpis[3].value"]);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
    }

    #[test]
    fn test_empty_links_are_allowed() {
        let mut portfolio = Portfolio::default();
        portfolio.projects[2].links.clear();
        assert!(portfolio.validate().is_empty());
    }
}
