// tests/model_tests.rs - Page state and data types
//
// ThemeState is the only state machine on the page; these tests walk it.
// NavigationTarget is the contract with the router.

use twinefishery::web_app::error::SiteError;
use twinefishery::web_app::model::{NavigationTarget, SubscriptionEmail, ThemeState};

#[test]
fn test_initial_theme_is_light() {
    let theme = ThemeState::default();
    assert_eq!(theme, ThemeState::Light);
    assert_eq!(theme.knob_class(), "translate-x-1");
    assert_eq!(theme.track_class(), "bg-gray-300");
}

#[test]
fn test_toggle_round_trip_returns_to_light() {
    let start = ThemeState::Light;
    let dark = start.toggled();
    assert_eq!(dark, ThemeState::Dark);
    assert_eq!(dark.toggled(), start);
    assert_eq!(dark.toggled().root_class(), start.root_class());
}

#[test]
fn test_dark_classes() {
    let theme = ThemeState::from(true);
    assert!(theme.is_dark());
    assert!(theme.root_class().starts_with("dark "));
    assert_eq!(theme.knob_class(), "translate-x-6");
    assert_eq!(theme.track_class(), "bg-blue-600");
}

#[test]
fn test_theme_display() {
    assert_eq!(ThemeState::Light.to_string(), "light");
    assert_eq!(ThemeState::Dark.to_string(), "dark");
}

#[test]
fn test_navigation_targets_round_trip_through_paths() {
    for target in NavigationTarget::ALL {
        let parsed: NavigationTarget = target.path().parse().unwrap();
        assert_eq!(parsed, target);
        assert_eq!(target.to_string(), target.path());
    }
}

#[test]
fn test_navigation_set_is_closed() {
    let paths: Vec<&str> = NavigationTarget::ALL.iter().map(|t| t.path()).collect();
    assert_eq!(paths, ["/", "/about", "/products", "/contact"]);

    for unknown in ["", "/home", "/products/", "products", "/blog"] {
        let err = unknown.parse::<NavigationTarget>().unwrap_err();
        assert!(matches!(err, SiteError::UnknownRoute(_)), "{:?}", unknown);
    }
}

#[test]
fn test_footer_labels() {
    let labels: Vec<&str> = NavigationTarget::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Home", "About", "Products", "Contact"]);
}

#[test]
fn test_subscription_email_keeps_raw_text() {
    // No validation: whatever was typed is kept as-is
    let email = SubscriptionEmail::from("not an email".to_string());
    assert_eq!(email.as_str(), "not an email");
    assert!(!email.is_empty());
}
