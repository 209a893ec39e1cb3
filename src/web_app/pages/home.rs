// web_app/pages/home.rs - Landing page
//
// Owns the two pieces of page state (theme and the newsletter field) and
// wires the router into the sections.

use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::web_app::components::*;
use crate::web_app::model::{NavigationTarget, SubscriptionEmail, ThemeState};

/// Landing page component
#[component]
pub fn HomePage() -> impl IntoView {
    let theme = RwSignal::new(ThemeState::default());
    let email = RwSignal::new(SubscriptionEmail::default());
    let year = chrono::Local::now().year();

    let navigate = use_navigate();
    let on_navigate = Callback::new(move |target: NavigationTarget| {
        tracing::debug!(%target, "navigating");
        navigate(target.path(), Default::default());
    });

    let on_toggle = Callback::new(move |dark: bool| toggle_theme(theme, dark));

    let on_subscribe = subscription_handler(email);

    view! {
        <LandingLayout
            theme=theme
            year=year
            email=email
            on_toggle=on_toggle
            on_navigate=on_navigate
            on_subscribe=on_subscribe
        />
    }
}

/// Sets the page theme from the switch value (`true` = dark)
pub fn toggle_theme(theme: RwSignal<ThemeState>, dark: bool) {
    let next = ThemeState::from(dark);
    tracing::debug!(theme = %next, "theme toggled");
    theme.set(next);
}

/// Subscribe button callback
///
/// No subscription backend exists: the entered address is neither validated,
/// stored nor sent. The click is only recorded in the log.
pub fn subscription_handler(email: RwSignal<SubscriptionEmail>) -> Callback<()> {
    Callback::new(move |()| {
        let entered = email.with_untracked(|e| !e.is_empty());
        tracing::info!(entered, "newsletter subscription is not wired to a handler");
    })
}

/// The page body, independent of where state and navigation come from
#[component]
pub fn LandingLayout(
    #[prop(into)]
    theme: Signal<ThemeState>,
    /// Year shown in the footer
    year: i32,
    email: RwSignal<SubscriptionEmail>,
    on_toggle: Callback<bool>,
    on_navigate: Callback<NavigationTarget>,
    on_subscribe: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=move || theme.get().root_class()>
            <div class="font-sans text-gray-800 dark:text-gray-100 dark:bg-gray-900">
                <Header theme=theme on_toggle=on_toggle on_navigate=on_navigate />
                <Hero on_navigate=on_navigate />
                <About on_navigate=on_navigate />
                <Story on_navigate=on_navigate />
                <Products />
                <Partnering on_navigate=on_navigate />
                <Newsletter email=email on_subscribe=on_subscribe />
                <Footer year=year />
            </div>
        </div>
    }
}
