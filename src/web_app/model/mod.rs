// web_app/model/mod.rs - Shared data models for client and server
//
// Plain data types the page is rendered from: the theme flag, navigation
// targets, product listings, the subscription input and entry animations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::web_app::error::SiteError;

/// Light/dark display mode of the page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

/// Classes shared by the page root in both modes
const ROOT_TRANSITION: &str = "transition-colors duration-500 ease-in-out";

impl ThemeState {
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeState::Dark)
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }

    /// Class list for the page root. Tailwind `dark:` variants key off `dark`.
    pub fn root_class(self) -> String {
        match self {
            ThemeState::Dark => format!("dark {}", ROOT_TRANSITION),
            ThemeState::Light => ROOT_TRANSITION.to_string(),
        }
    }

    /// Background of the toggle switch track
    pub fn track_class(self) -> &'static str {
        match self {
            ThemeState::Dark => "bg-blue-600",
            ThemeState::Light => "bg-gray-300",
        }
    }

    /// Horizontal offset of the toggle switch knob
    pub fn knob_class(self) -> &'static str {
        match self {
            ThemeState::Dark => "translate-x-6",
            ThemeState::Light => "translate-x-1",
        }
    }
}

/// The toggle reports `true` when switched to dark.
impl From<bool> for ThemeState {
    fn from(dark: bool) -> Self {
        if dark {
            ThemeState::Dark
        } else {
            ThemeState::Light
        }
    }
}

impl fmt::Display for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeState::Light => write!(f, "light"),
            ThemeState::Dark => write!(f, "dark"),
        }
    }
}

/// Destinations handed to the router
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationTarget {
    Home,
    Products,
    About,
    Contact,
}

impl NavigationTarget {
    /// Footer order
    pub const ALL: [NavigationTarget; 4] = [
        NavigationTarget::Home,
        NavigationTarget::About,
        NavigationTarget::Products,
        NavigationTarget::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            NavigationTarget::Home => "/",
            NavigationTarget::Products => "/products",
            NavigationTarget::About => "/about",
            NavigationTarget::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavigationTarget::Home => "Home",
            NavigationTarget::Products => "Products",
            NavigationTarget::About => "About",
            NavigationTarget::Contact => "Contact",
        }
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for NavigationTarget {
    type Err = SiteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.path() == path)
            .ok_or_else(|| SiteError::UnknownRoute(path.to_string()))
    }
}

/// One product in the showcase grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductListing {
    pub image_path: &'static str,
    pub display_name: &'static str,
}

/// Text typed into the newsletter field. Never validated, stored or sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionEmail(pub String);

impl SubscriptionEmail {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for SubscriptionEmail {
    fn from(value: String) -> Self {
        SubscriptionEmail(value)
    }
}

/// A rendered visual state: opacity plus a translation in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub x: i32,
    pub y: i32,
}

impl VisualState {
    /// Fully visible, in place
    pub const SHOWN: VisualState = VisualState { opacity: 1.0, x: 0, y: 0 };

    /// Transparent, optionally offset
    pub const fn hidden(x: i32, y: i32) -> Self {
        VisualState { opacity: 0.0, x, y }
    }

    pub fn to_css(self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px);",
            self.opacity, self.x, self.y
        )
    }
}

/// Timing of a transition in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Transition {
    pub const fn new(duration_ms: u32, delay_ms: u32) -> Self {
        Transition { duration_ms, delay_ms }
    }

    pub const fn delayed(delay_ms: u32) -> Self {
        Transition { duration_ms: 300, delay_ms }
    }

    pub fn to_css(self) -> String {
        format!(
            "transition: opacity {d}ms ease-out {w}ms, transform {d}ms ease-out {w}ms;",
            d = self.duration_ms,
            w = self.delay_ms
        )
    }
}

impl Default for Transition {
    fn default() -> Self {
        Transition::new(300, 0)
    }
}

/// When an entry animation fires
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Trigger {
    /// As soon as the element is mounted in the browser
    #[default]
    Mount,
    /// The first time the element scrolls into the viewport
    Viewport,
}

/// One-shot entry animation from `initial` to `target`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub initial: VisualState,
    pub target: VisualState,
    pub transition: Transition,
    pub trigger: Trigger,
}

impl Motion {
    /// Inline style for the element, before or after the animation fired
    pub fn style(&self, revealed: bool) -> String {
        let state = if revealed { self.target } else { self.initial };
        format!("{} {}", state.to_css(), self.transition.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default_is_light() {
        assert_eq!(ThemeState::default(), ThemeState::Light);
        assert!(!ThemeState::default().is_dark());
    }

    #[test]
    fn test_theme_from_toggle_value() {
        assert_eq!(ThemeState::from(true), ThemeState::Dark);
        assert_eq!(ThemeState::from(false), ThemeState::Light);
    }

    #[test]
    fn test_root_class_only_marks_dark() {
        assert!(ThemeState::Dark.root_class().split_whitespace().any(|c| c == "dark"));
        assert!(!ThemeState::Light.root_class().split_whitespace().any(|c| c == "dark"));
        assert!(ThemeState::Light.root_class().contains("duration-500"));
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        let json = serde_json::to_string(&ThemeState::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
    }

    #[test]
    fn test_navigation_paths() {
        assert_eq!(NavigationTarget::Home.path(), "/");
        assert_eq!(NavigationTarget::Products.path(), "/products");
        assert_eq!(NavigationTarget::About.path(), "/about");
        assert_eq!(NavigationTarget::Contact.path(), "/contact");
    }

    #[test]
    fn test_unknown_path_is_rejected() {
        let err = "/careers".parse::<NavigationTarget>().unwrap_err();
        assert!(matches!(err, SiteError::UnknownRoute(ref p) if p == "/careers"));
    }

    #[test]
    fn test_subscription_email_blank() {
        assert!(SubscriptionEmail::default().is_empty());
        assert!(SubscriptionEmail::from("   ".to_string()).is_empty());
        assert!(!SubscriptionEmail::from("a@b.c".to_string()).is_empty());
    }

    #[test]
    fn test_visual_state_css() {
        assert_eq!(
            VisualState::hidden(0, -20).to_css(),
            "opacity: 0; transform: translate(0px, -20px);"
        );
        assert_eq!(
            VisualState::SHOWN.to_css(),
            "opacity: 1; transform: translate(0px, 0px);"
        );
    }

    #[test]
    fn test_motion_style_switches_state_not_timing() {
        let motion = Motion {
            initial: VisualState::hidden(50, 0),
            target: VisualState::SHOWN,
            transition: Transition::new(500, 0),
            trigger: Trigger::Viewport,
        };

        let before = motion.style(false);
        let after = motion.style(true);
        assert!(before.starts_with("opacity: 0; transform: translate(50px, 0px);"));
        assert!(after.starts_with("opacity: 1; transform: translate(0px, 0px);"));
        assert!(before.ends_with("transition: opacity 500ms ease-out 0ms, transform 500ms ease-out 0ms;"));
        assert_eq!(
            before.split_once("transition:").map(|(_, t)| t),
            after.split_once("transition:").map(|(_, t)| t)
        );
    }

    #[test]
    fn test_delayed_transition_uses_default_duration() {
        let t = Transition::delayed(600);
        assert_eq!(t.duration_ms, Transition::default().duration_ms);
        assert_eq!(t.delay_ms, 600);
    }
}
