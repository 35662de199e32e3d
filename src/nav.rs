use std::{fmt, str::FromStr};

/// Scroll anchor of one page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Certifications,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Certifications,
        SectionId::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Certifications => "certifications",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Resolves a URL fragment such as `#contact` (leading `#` optional).
    pub fn from_fragment(fragment: &str) -> Option<SectionId> {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        id.parse().ok()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SectionId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem {
        label: "Home",
        target: SectionId::Home,
    },
    NavItem {
        label: "About",
        target: SectionId::About,
    },
    NavItem {
        label: "Skills",
        target: SectionId::Skills,
    },
    NavItem {
        label: "Projects",
        target: SectionId::Projects,
    },
    NavItem {
        label: "Experience",
        target: SectionId::Experience,
    },
    NavItem {
        label: "Certifications",
        target: SectionId::Certifications,
    },
    NavItem {
        label: "Contact",
        target: SectionId::Contact,
    },
];

const SCROLLED_THRESHOLD: f64 = 50.0;

/// Header compacts once the page has scrolled past the threshold.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Picking a destination always closes the mobile menu.
    pub fn select(&mut self, target: SectionId) -> SectionId {
        self.menu_open = false;
        target
    }
}
