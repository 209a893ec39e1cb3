// web_app/components/common.rs - Reusable UI components
//
// Small, stateless building blocks shared by the page sections.
// Everything they render comes in through props.

use leptos::prelude::*;

use crate::web_app::content::{CallToAction, MOON_ICON, SUN_ICON};
use crate::web_app::model::{NavigationTarget, ThemeState};

/// Visual style of a call-to-action button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonTone {
    /// Orange, large, scales on hover and press
    #[default]
    Accent,
    /// Orange, compact
    AccentCompact,
    /// Blue, scales on hover
    Primary,
    /// Blue, compact, no scaling
    PrimaryCompact,
}

impl ButtonTone {
    pub fn class(self) -> &'static str {
        match self {
            ButtonTone::Accent => "bg-orange-500 hover:bg-orange-600 text-white px-6 py-3 rounded-lg \
                                   font-semibold transition-transform hover:scale-105 active:scale-95",
            ButtonTone::AccentCompact => "bg-orange-500 hover:bg-orange-600 text-white px-5 py-2 rounded-md",
            ButtonTone::Primary => "bg-blue-600 hover:bg-blue-700 text-white px-5 py-2 rounded-md \
                                    transition-transform hover:scale-105",
            ButtonTone::PrimaryCompact => "bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-md",
        }
    }
}

/// Click handler shared by every navigating element
pub fn activate(cta: CallToAction, on_navigate: Callback<NavigationTarget>) {
    on_navigate.run(cta.target);
}

/// Button that hands its target to the router on click
#[component]
pub fn CtaButton(
    /// Label and destination
    cta: CallToAction,
    /// Navigation handler
    on_navigate: Callback<NavigationTarget>,
    #[prop(default = ButtonTone::Accent)]
    tone: ButtonTone,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!("{} {}", tone.class(), class)
            on:click=move |_| activate(cta, on_navigate)
        >
            {cta.label}
        </button>
    }
}

/// Light/dark switch flanked by sun and moon icons
///
/// Reports the requested mode as a boolean (`true` = dark).
#[component]
pub fn ThemeToggle(
    /// Current mode
    #[prop(into)]
    theme: Signal<ThemeState>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <span class="text-sm">{SUN_ICON}</span>
            <button
                type="button"
                role="switch"
                aria-label="Toggle dark mode"
                aria-checked=move || theme.get().is_dark().to_string()
                class=move || format!(
                    "{} relative inline-flex h-6 w-11 items-center rounded-full transition-colors",
                    theme.get().track_class()
                )
                on:click=move |_| on_toggle.run(theme.get_untracked().toggled().is_dark())
            >
                <span class=move || format!(
                    "{} inline-block h-4 w-4 transform rounded-full bg-white transition",
                    theme.get().knob_class()
                )></span>
            </button>
            <span class="text-sm">{MOON_ICON}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_button_scales_on_hover_and_press() {
        let class = ButtonTone::Accent.class();
        assert!(class.contains("hover:scale-105"));
        assert!(class.contains("active:scale-95"));
    }

    #[test]
    fn test_primary_button_scales_on_hover_only() {
        let class = ButtonTone::Primary.class();
        assert!(class.contains("hover:scale-105"));
        assert!(!class.contains("active:scale"));
    }

    #[test]
    fn test_compact_tones_do_not_scale() {
        for tone in [ButtonTone::AccentCompact, ButtonTone::PrimaryCompact] {
            assert!(!tone.class().contains("scale"), "{:?}", tone);
        }
    }
}
