//! Application root state: the current view, the auth flag and the
//! latest-wins result slots for AI answers.
//!
//! The server only publishes [`navigation`]. [`Shell`] and [`ResultSlot`] are
//! the state model the frontend mirrors: a view switch resets scroll and the
//! mobile menu, and a slow AI answer never overwrites a newer one.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// One panel of the site
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum View {
    Home,
    Explore,
    Map,
    Planner,
    Bookings,
    Artisans,
    Food,
    Packages,
    Impact,
    Login,
}

impl View {
    /// Stable slug used in deep links
    #[must_use]
    pub fn slug(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Explore => "Hidden Gems",
            View::Map => "Map",
            View::Planner => "AI Planner",
            View::Bookings => "Stays & Rides",
            View::Artisans => "Artisans",
            View::Food => "Food Guide",
            View::Packages => "Packages",
            View::Impact => "Our Impact",
            View::Login => "Sign In",
        }
    }

    /// Views whose content comes from the generative AI backend
    #[must_use]
    pub fn requires_ai(self) -> bool {
        matches!(self, View::Planner)
    }
}

/// Menu entry handed to the frontend
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    pub view: View,
    pub label: &'static str,
    pub requires_ai: bool,
    /// False when the view needs AI and no credential is configured
    pub available: bool,
}

/// Navigation menu in display order
#[must_use]
pub fn navigation(ai_enabled: bool) -> Vec<NavEntry> {
    View::iter()
        .map(|view| NavEntry {
            view,
            label: view.label(),
            requires_ai: view.requires_ai(),
            available: ai_enabled || !view.requires_ai(),
        })
        .collect()
}

/// Root UI state. Every transition is allowed; entering a view scrolls to
/// the top and closes the mobile menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    view: View,
    mobile_menu_open: bool,
    scroll_offset: u32,
    signed_in: bool,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(View::Home)
    }
}

impl Shell {
    #[must_use]
    pub fn new(initial: View) -> Self {
        Self {
            view: initial,
            mobile_menu_open: false,
            scroll_offset: 0,
            signed_in: false,
        }
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    #[must_use]
    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    pub fn navigate(&mut self, target: View) {
        tracing::trace!(from = self.view.slug(), to = target.slug(), "navigate");
        self.view = target;
        self.mobile_menu_open = false;
        self.scroll_offset = 0;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn scroll_to(&mut self, offset: u32) {
        self.scroll_offset = offset;
    }

    /// Credentials are never checked; signing in only flips the flag.
    pub fn sign_in(&mut self) {
        self.signed_in = true;
        self.navigate(View::Home);
    }

    pub fn sign_out(&mut self) {
        self.signed_in = false;
        self.navigate(View::Login);
    }
}

/// Ticket handed out when a request starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Holds the most recent answer for one panel. Completions carrying an older
/// ticket than the newest issued one are dropped.
#[derive(Debug, Clone)]
pub struct ResultSlot<T> {
    issued: u64,
    value: Option<T>,
}

impl<T> Default for ResultSlot<T> {
    fn default() -> Self {
        Self {
            issued: 0,
            value: None,
        }
    }
}

impl<T> ResultSlot<T> {
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Store `value` if `ticket` is still the newest. Returns whether it was stored.
    pub fn complete(&mut self, ticket: Ticket, value: T) -> bool {
        if ticket.0 != self.issued {
            tracing::debug!(ticket = ticket.0, newest = self.issued, "Dropping stale result");
            return false;
        }
        self.value = Some(value);
        true
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn clear(&mut self) {
        self.value = None;
    }
}
