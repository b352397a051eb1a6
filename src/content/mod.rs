//! Portfolio content.
//!
//! Content is loaded once at startup and never changes afterwards. List
//! identity is position: skill `i` is always the `i`-th card.

mod builtin;
mod load;

use serde::{Deserialize, Serialize};

pub use builtin::builtin_profile;
pub use load::{load_profile, parse_profile, validate_profile};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub title: String,
    pub value: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Technologies joined by " • "
    pub tech: String,
    pub repository_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Mail,
    GitHub,
    LinkedIn,
}

impl ContactKind {
    /// Glyph drawn for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            ContactKind::Mail => "✉",
            ContactKind::GitHub => "⌥",
            ContactKind::LinkedIn => "in",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    /// Pill above the name
    pub tagline: String,
    /// Gradient line under the name
    pub role: String,
    /// Hero paragraph
    pub summary: String,
    pub github_url: String,
    pub resume_path: String,
    pub profile_image_path: String,
    pub footer_role: String,
    pub about: Vec<String>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub contact: Vec<ContactLink>,
}

impl Profile {
    pub fn name(&self) -> String {
        if self.last_name.is_empty() {
            return self.first_name.clone();
        }
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Anchored sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Section for a 1-based nav key.
    pub fn from_key(n: u32) -> Option<Section> {
        Self::ALL.get((n as usize).checked_sub(1)?).copied()
    }
}

/// One navigation anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: Section,
}

pub fn nav_items() -> [NavItem; 4] {
    Section::ALL.map(|section| NavItem {
        label: section.label(),
        section,
    })
}
