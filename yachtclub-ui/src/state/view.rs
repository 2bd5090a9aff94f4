//! Navigation View State
//!
//! The page shows either the home content or exactly one content section.
//! [`NavState`] is a plain value: events go in through [`NavState::handle`],
//! side effects come back out as [`Effect`]s, and [`NavState::render`]
//! produces the visibility and highlight flags the components bind to.

/// A togglable block of page content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Accommodation,
    YachtClub,
    Gallery,
    Weather,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Accommodation,
        Section::YachtClub,
        Section::Gallery,
        Section::Weather,
        Section::Contact,
    ];

    /// DOM id, also the link fragment
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Accommodation => "accommodation",
            Section::YachtClub => "yacht-club",
            Section::Gallery => "gallery",
            Section::Weather => "weather",
            Section::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About Us",
            Section::Accommodation => "Accommodation",
            Section::YachtClub => "Yacht Club",
            Section::Gallery => "Gallery",
            Section::Weather => "Sea & Weather",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Where a navigation link points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    Section(Section),
}

/// Links in the navigation bar, in display order
pub const NAV_LINKS: [NavTarget; 7] = [
    NavTarget::Home,
    NavTarget::Section(Section::About),
    NavTarget::Section(Section::Accommodation),
    NavTarget::Section(Section::YachtClub),
    NavTarget::Section(Section::Gallery),
    NavTarget::Section(Section::Weather),
    NavTarget::Section(Section::Contact),
];

impl NavTarget {
    /// Parse `#home`, `#contact`, `gallery`, ...
    pub fn from_href(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#').unwrap_or(href);
        if id == "home" {
            Some(NavTarget::Home)
        } else {
            Section::from_id(id).map(NavTarget::Section)
        }
    }

    pub fn href(self) -> String {
        match self {
            NavTarget::Home => "#home".to_string(),
            NavTarget::Section(section) => format!("#{}", section.id()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavTarget::Home => "Home",
            NavTarget::Section(section) => section.title(),
        }
    }
}

/// What the page currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Section(Section),
}

/// User actions the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// A navigation link was clicked
    LinkClicked(NavTarget),
    /// A section's close button (its `data-target`) was clicked
    CloseClicked(Section),
    /// A "book" / "inquire" call-to-action was clicked
    InquireClicked,
    /// The mobile menu button was clicked
    MenuToggled,
}

/// Subject prefilled by the inquiry buttons
pub const INQUIRY_SUBJECT: &str = "Accommodation Inquiry";

/// Side effects requested by a transition, performed by the page layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Scroll the content wrapper to the top
    ScrollToTop,
    /// Scroll so the section's top sits just below the navigation bar
    ScrollToSection(Section),
    /// Recompute water particles from live layout
    RefreshParticles,
    /// Set the contact form subject
    PrefillSubject(&'static str),
    /// Focus the contact form subject field
    FocusSubject,
}

/// Navigation controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    view: View,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// The highlighted link: the shown section's, none at home
    pub fn active_link(&self) -> Option<NavTarget> {
        match self.view {
            View::Home => None,
            View::Section(section) => Some(NavTarget::Section(section)),
        }
    }

    /// Background scrolling is suppressed while any overlay is open
    pub fn body_locked(&self) -> bool {
        self.menu_open || matches!(self.view, View::Section(_))
    }

    /// Apply an event and return the effects to perform, in order
    pub fn handle(&mut self, event: NavEvent) -> Vec<Effect> {
        match event {
            NavEvent::LinkClicked(target) => {
                if self.active_link() == Some(target) {
                    return Vec::new();
                }
                match target {
                    NavTarget::Home => self.go_home(),
                    NavTarget::Section(section) => self.show(section),
                }
            }
            NavEvent::CloseClicked(_) => self.go_home(),
            NavEvent::InquireClicked => {
                let mut effects = self.show(Section::Contact);
                effects.push(Effect::PrefillSubject(INQUIRY_SUBJECT));
                effects.push(Effect::FocusSubject);
                effects
            }
            NavEvent::MenuToggled => {
                self.menu_open = !self.menu_open;
                Vec::new()
            }
        }
    }

    fn go_home(&mut self) -> Vec<Effect> {
        self.view = View::Home;
        self.menu_open = false;
        vec![Effect::ScrollToTop, Effect::RefreshParticles]
    }

    fn show(&mut self, section: Section) -> Vec<Effect> {
        self.view = View::Section(section);
        self.menu_open = false;
        vec![Effect::ScrollToSection(section)]
    }

    /// Visibility and highlight flags for every section and link
    pub fn render(&self) -> PageSnapshot {
        let active_section = match self.view {
            View::Home => None,
            View::Section(section) => Some(section),
        };
        let active_link = self.active_link();

        PageSnapshot {
            home_visible: active_section.is_none(),
            sections: Section::ALL
                .into_iter()
                .map(|section| {
                    let active = active_section == Some(section);
                    SectionView {
                        section,
                        active,
                        aria_hidden: !active,
                    }
                })
                .collect(),
            links: NAV_LINKS
                .into_iter()
                .map(|target| LinkView {
                    target,
                    active: active_link == Some(target),
                })
                .collect(),
            menu_open: self.menu_open,
            body_locked: self.body_locked(),
        }
    }
}

/// Rendered flags for one section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionView {
    pub section: Section,
    pub active: bool,
    pub aria_hidden: bool,
}

/// Rendered flags for one navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkView {
    pub target: NavTarget,
    pub active: bool,
}

/// Everything the page needs to draw the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub home_visible: bool,
    pub sections: Vec<SectionView>,
    pub links: Vec<LinkView>,
    pub menu_open: bool,
    pub body_locked: bool,
}

impl PageSnapshot {
    pub fn section(&self, section: Section) -> SectionView {
        self.sections
            .iter()
            .copied()
            .find(|view| view.section == section)
            .unwrap_or(SectionView {
                section,
                active: false,
                aria_hidden: true,
            })
    }

    pub fn link_active(&self, target: NavTarget) -> bool {
        self.links
            .iter()
            .any(|link| link.target == target && link.active)
    }

    pub fn active_sections(&self) -> Vec<Section> {
        self.sections
            .iter()
            .filter(|view| view.active)
            .map(|view| view.section)
            .collect()
    }

    pub fn active_links(&self) -> Vec<NavTarget> {
        self.links
            .iter()
            .filter(|link| link.active)
            .map(|link| link.target)
            .collect()
    }
}
