use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

pub static GLOBAL_PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    let content = Assets::get(PORTFOLIO_FILE).expect("Should be able to get portfolio content");
    load(&content.data).expect("Couldn't parse portfolio content")
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Content list `{0}` is empty")]
    Empty(&'static str),
}

/// Decorative color tag shared by every section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Cyan,
    Purple,
    Pink,
}

impl Accent {
    pub fn text_class(self) -> &'static str {
        match self {
            Accent::Cyan => "text-neon-cyan",
            Accent::Purple => "text-neon-purple",
            Accent::Pink => "text-neon-pink",
        }
    }

    pub fn tint_class(self) -> &'static str {
        match self {
            Accent::Cyan => "bg-neon-cyan/10 border-neon-cyan/30 hover:bg-neon-cyan/20",
            Accent::Purple => "bg-neon-purple/10 border-neon-purple/30 hover:bg-neon-purple/20",
            Accent::Pink => "bg-neon-pink/10 border-neon-pink/30 hover:bg-neon-pink/20",
        }
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            Accent::Cyan => "bg-neon-cyan",
            Accent::Purple => "bg-neon-purple",
            Accent::Pink => "bg-neon-pink",
        }
    }

    pub fn from_class(self) -> &'static str {
        match self {
            Accent::Cyan => "from-neon-cyan",
            Accent::Purple => "from-neon-purple",
            Accent::Pink => "from-neon-pink",
        }
    }

    pub fn to_class(self) -> &'static str {
        match self {
            Accent::Cyan => "to-neon-cyan",
            Accent::Purple => "to-neon-purple",
            Accent::Pink => "to-neon-pink",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub from: Accent,
    pub to: Accent,
}

impl Gradient {
    pub fn class(self) -> String {
        format!("bg-gradient-to-r {} {}", self.from.from_class(), self.to.to_class())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Github,
    Linkedin,
    Mail,
    Phone,
    MapPin,
    Code,
    Trophy,
    Target,
    Dumbbell,
    Briefcase,
    GraduationCap,
    Award,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    #[serde(default)]
    pub accent: Option<Accent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub icon: Icon,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub name_lines: Vec<String>,
    pub tagline: String,
    pub location: String,
    pub phone: String,
    pub socials: Vec<Link>,
    pub resume_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: Icon,
    pub text: String,
    pub color: Accent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<Vec<Segment>>,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
    pub color: Accent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectAction {
    LiveDemo(String),
    Source(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub features: Vec<String>,
    pub github: String,
    #[serde(default)]
    pub live: Option<String>,
    pub gradient: Gradient,
}

const VISIBLE_TECH: usize = 4;
const VISIBLE_FEATURES: usize = 3;

impl Project {
    /// Action controls in render order; a project without a live demo only links its source.
    pub fn actions(&self) -> Vec<ProjectAction> {
        let mut actions = Vec::with_capacity(2);
        if let Some(live) = &self.live {
            actions.push(ProjectAction::LiveDemo(live.clone()));
        }
        actions.push(ProjectAction::Source(self.github.clone()));
        actions
    }

    /// Leading tech tags plus the size of the `+N` overflow badge, if any.
    pub fn visible_tech(&self) -> (&[String], Option<usize>) {
        let shown = self.tech.len().min(VISIBLE_TECH);
        let hidden = self.tech.len() - shown;
        (&self.tech[..shown], (hidden > 0).then_some(hidden))
    }

    pub fn visible_features(&self) -> &[String] {
        &self.features[..self.features.len().min(VISIBLE_FEATURES)]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub points: Vec<String>,
    pub color: Accent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub score: String,
    pub color: Accent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub color: Accent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub intro: String,
    pub info: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: String,
    pub initials: String,
    pub hero: Hero,
    pub about: About,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub contact: Contact,
}

impl Portfolio {
    /// Every content table must have at least one entry.
    pub fn validate(&self) -> Result<(), ContentError> {
        let lists = [
            ("hero.name_lines", self.hero.name_lines.len()),
            ("hero.socials", self.hero.socials.len()),
            ("about.paragraphs", self.about.paragraphs.len()),
            ("about.highlights", self.about.highlights.len()),
            ("skills", self.skills.len()),
            ("projects", self.projects.len()),
            ("experience", self.experience.len()),
            ("education", self.education.len()),
            ("certifications", self.certifications.len()),
            ("contact.info", self.contact.info.len()),
        ];
        match lists.into_iter().find(|(_, len)| *len == 0) {
            Some((name, _)) => Err(ContentError::Empty(name)),
            None => Ok(()),
        }
    }
}

pub fn load(bytes: &[u8]) -> Result<Portfolio, ContentError> {
    let portfolio = serde_json::from_slice::<Portfolio>(bytes)?;
    portfolio.validate()?;
    Ok(portfolio)
}

pub fn portfolio() -> &'static Portfolio {
    &GLOBAL_PORTFOLIO
}
