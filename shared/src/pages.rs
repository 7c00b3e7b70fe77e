use serde::{Deserialize, Serialize};

// ============================================================================
// Pages
// ============================================================================

/// A page reachable through the client-side router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Login,
    Signup,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Login => "/login",
            Page::Signup => "/signup",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Login => "Login",
            Page::Signup => "Sign Up",
        }
    }

    pub fn all() -> &'static [Page] {
        &[Page::Home, Page::Login, Page::Signup]
    }

    /// Resolves a request path to the page the router renders for it.
    ///
    /// Query strings and fragments are ignored and a single trailing slash
    /// is accepted, so `/login/?next=x` resolves to [`Page::Login`].
    pub fn from_path(path: &str) -> Option<Page> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        Page::all().iter().copied().find(|page| page.path() == path)
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// A labelled control that may navigate somewhere. Items without a target
/// are rendered but do nothing when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: Option<Page>,
}

impl NavItem {
    pub const fn inert(label: &'static str) -> Self {
        Self {
            label,
            target: None,
        }
    }

    pub const fn to(label: &'static str, page: Page) -> Self {
        Self {
            label,
            target: Some(page),
        }
    }
}

pub const HEADER_LINKS: &[NavItem] = &[
    NavItem::inert("Home"),
    NavItem::inert("Facts"),
    NavItem::inert("Symptoms-bot"),
    NavItem::inert("News"),
    NavItem::inert("About"),
    NavItem::inert("Contact Us"),
];

pub const HEADER_ACTIONS: &[NavItem] = &[
    NavItem::to("Sign Up", Page::Signup),
    NavItem::to("Login", Page::Login),
];

pub const HOME_CALL_TO_ACTION: NavItem = NavItem::to("Get Started", Page::Signup);
