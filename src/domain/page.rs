use crate::i18n::Strings;
use serde::{Deserialize, Serialize};

/// Scroll targets on the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Projects,
    Stack,
    Contact,
}

impl Section {
    #[must_use]
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::Projects,
            Section::Stack,
            Section::Contact,
        ]
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::Stack => "stack",
            Section::Contact => "contact",
        }
    }

    #[must_use]
    pub fn label(self, strings: &Strings) -> &'static str {
        match self {
            Section::Home => strings.nav_home,
            Section::Projects => strings.nav_work,
            Section::Stack => strings.nav_stack,
            Section::Contact => strings.nav_contact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Host-owned data the page and the command catalog are built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub email: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub cv_url: Option<String>,
    pub stack: Vec<String>,
    pub projects: Vec<Project>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Jane Doe".to_string(),
            role: "Full stack developer".to_string(),
            email: "jane@example.com".to_string(),
            github_url: "https://github.com/janedoe".to_string(),
            linkedin_url: "https://www.linkedin.com/in/janedoe/".to_string(),
            cv_url: None,
            stack: vec![
                "Rust".to_string(),
                "TypeScript".to_string(),
                "PostgreSQL".to_string(),
                "WebAssembly".to_string(),
            ],
            projects: vec![
                Project {
                    title: "Ledger Lite".to_string(),
                    description: "Inventory and sales dashboard with JWT auth.".to_string(),
                    tech: vec!["React".to_string(), "PostgreSQL".to_string()],
                    url: None,
                },
                Project {
                    title: "Dungeon Tutor".to_string(),
                    description: "Browser RPG that teaches Python through WebAssembly.".to_string(),
                    tech: vec!["TypeScript".to_string(), "WebAssembly".to_string()],
                    url: None,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLine {
    Title(String),
    Heading(String),
    Text(String),
    Bullet(String),
    Link { label: String, url: String },
    Blank,
}

/// Text of the whole page, one entry per terminal row, grouped by section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    pub sections: Vec<(Section, Vec<PageLine>)>,
}

impl PageModel {
    #[must_use]
    pub fn build(profile: &Profile, strings: &Strings) -> Self {
        let mut sections = Vec::with_capacity(Section::all().len());

        let home = vec![
            PageLine::Blank,
            PageLine::Title(profile.name.clone()),
            PageLine::Text(profile.role.clone()),
            PageLine::Blank,
            PageLine::Text(strings.hero_badge.to_string()),
            PageLine::Blank,
            PageLine::Blank,
        ];
        sections.push((Section::Home, home));

        let mut projects = vec![
            PageLine::Heading(strings.projects_title.to_string()),
            PageLine::Text(strings.projects_subtitle.to_string()),
            PageLine::Blank,
        ];
        for project in &profile.projects {
            projects.push(PageLine::Bullet(project.title.clone()));
            projects.push(PageLine::Text(format!("  {}", project.description)));
            if !project.tech.is_empty() {
                projects.push(PageLine::Text(format!("  [{}]", project.tech.join(", "))));
            }
            if let Some(url) = &project.url {
                projects.push(PageLine::Link {
                    label: "  ->".to_string(),
                    url: url.clone(),
                });
            }
            projects.push(PageLine::Blank);
        }
        sections.push((Section::Projects, projects));

        let mut stack = vec![
            PageLine::Heading(strings.stack_title.to_string()),
            PageLine::Blank,
        ];
        stack.extend(profile.stack.iter().map(|t| PageLine::Bullet(t.clone())));
        stack.push(PageLine::Blank);
        sections.push((Section::Stack, stack));

        let mut contact = vec![
            PageLine::Heading(strings.contact_title.to_string()),
            PageLine::Text(strings.contact_cta.to_string()),
            PageLine::Blank,
            PageLine::Link {
                label: "Email".to_string(),
                url: profile.email.clone(),
            },
            PageLine::Link {
                label: "GitHub".to_string(),
                url: profile.github_url.clone(),
            },
            PageLine::Link {
                label: "LinkedIn".to_string(),
                url: profile.linkedin_url.clone(),
            },
        ];
        if let Some(cv) = &profile.cv_url {
            contact.push(PageLine::Link {
                label: "CV".to_string(),
                url: cv.clone(),
            });
        }
        contact.push(PageLine::Blank);
        sections.push((Section::Contact, contact));

        Self { sections }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.iter().map(|(_, lines)| lines.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn lines(&self) -> impl Iterator<Item = &PageLine> {
        self.sections.iter().flat_map(|(_, lines)| lines.iter())
    }

    /// First row of `section`.
    #[must_use]
    pub fn offset_of(&self, section: Section) -> usize {
        let mut offset = 0;
        for (s, lines) in &self.sections {
            if *s == section {
                return offset;
            }
            offset += lines.len();
        }
        offset
    }

    /// Section that owns the row at `offset`; past the end maps to the last one.
    #[must_use]
    pub fn section_at(&self, offset: usize) -> Section {
        let mut end = 0;
        for (s, lines) in &self.sections {
            end += lines.len();
            if offset < end {
                return *s;
            }
        }
        self.sections
            .last()
            .map_or(Section::Home, |(s, _)| *s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::EN;

    #[test]
    fn test_offsets_follow_section_order() {
        let page = PageModel::build(&Profile::default(), &EN);
        let offsets: Vec<usize> = Section::all().iter().map(|s| page.offset_of(*s)).collect();

        assert_eq!(offsets[0], 0);
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        for section in Section::all() {
            assert_eq!(page.section_at(page.offset_of(*section)), *section);
        }
        assert_eq!(page.section_at(page.len() + 10), Section::Contact);
    }

    #[test]
    fn test_cv_link_only_when_configured() {
        let mut profile = Profile::default();
        let page = PageModel::build(&profile, &EN);
        assert!(!page
            .lines()
            .any(|l| matches!(l, PageLine::Link { label, .. } if label == "CV")));

        profile.cv_url = Some("https://example.com/cv.pdf".to_string());
        let page = PageModel::build(&profile, &EN);
        assert!(page
            .lines()
            .any(|l| matches!(l, PageLine::Link { label, .. } if label == "CV")));
    }
}
