// web_app/components/sections.rs - Landing page sections
//
// One component per visual section, top to bottom:
// Header, Hero, About, Story, Products, Partnering, Newsletter, Footer.
// Navigation is passed in as a callback so sections never touch the router.

use leptos::prelude::*;

use super::common::{activate, ButtonTone, CtaButton, ThemeToggle};
use super::motion::Reveal;
use super::product::ProductShowcase;
use crate::web_app::content::{self, about, footer, hero, newsletter, partnering, products, story};
use crate::web_app::model::{NavigationTarget, SubscriptionEmail, ThemeState};

/// Top bar with the brand title and the theme switch
#[component]
pub fn Header(
    #[prop(into)]
    theme: Signal<ThemeState>,
    on_toggle: Callback<bool>,
    on_navigate: Callback<NavigationTarget>,
) -> impl IntoView {
    view! {
        <header class="flex justify-between items-center px-6 py-4 border-b dark:border-gray-700 bg-white dark:bg-gray-800">
            <h1
                class="text-xl font-bold text-blue-600 dark:text-blue-400 cursor-pointer"
                on:click=move |_| activate(content::HEADER_TITLE, on_navigate)
            >
                {content::HEADER_TITLE.label}
            </h1>
            <ThemeToggle theme=theme on_toggle=on_toggle />
        </header>
    }
}

/// Full-height banner over the hero image
#[component]
pub fn Hero(on_navigate: Callback<NavigationTarget>) -> impl IntoView {
    let background = format!("background-image: url('{}'); ", hero::BACKGROUND_IMAGE);

    view! {
        <section class="relative">
            <Reveal
                motion=hero::SECTION_MOTION
                class="relative bg-cover bg-center h-screen"
                base_style=background
            >
                <div class="absolute inset-0 bg-black bg-opacity-50 flex flex-col items-center justify-center text-white text-center px-4">
                    <Reveal motion=hero::HEADING_MOTION>
                        <h1 class="text-4xl md:text-6xl font-bold mb-4">{hero::HEADING}</h1>
                    </Reveal>
                    <Reveal motion=hero::SUBTITLE_MOTION>
                        <p class="mb-6 text-lg md:text-xl max-w-2xl">{hero::SUBTITLE}</p>
                    </Reveal>
                    <CtaButton cta=hero::CTA on_navigate=on_navigate tone=ButtonTone::Accent />
                </div>
            </Reveal>
        </section>
    }
}

/// Mission statement with a link to the about page
#[component]
pub fn About(on_navigate: Callback<NavigationTarget>) -> impl IntoView {
    view! {
        <section class="py-20 px-6 bg-white dark:bg-gray-800 text-center">
            <Reveal motion=about::HEADING_MOTION>
                <h2 class="text-3xl font-bold mb-4">{about::HEADING}</h2>
            </Reveal>
            <Reveal motion=about::BODY_MOTION>
                <p class="max-w-3xl mx-auto text-lg">{about::BODY}</p>
            </Reveal>
            <CtaButton cta=about::CTA on_navigate=on_navigate tone=ButtonTone::Primary class="mt-6" />
        </section>
    }
}

/// Company story beside the story photo
#[component]
pub fn Story(on_navigate: Callback<NavigationTarget>) -> impl IntoView {
    view! {
        <section class="grid md:grid-cols-2 items-center py-20 px-6 bg-gray-50 dark:bg-gray-900">
            <img src=story::IMAGE alt=story::IMAGE_ALT class="w-full h-auto rounded" />
            <Reveal motion=story::TEXT_MOTION class="p-6">
                <h3 class="text-2xl font-bold mb-4">{story::HEADING}</h3>
                <p class="text-lg mb-4">{story::BODY}</p>
                <CtaButton cta=story::CTA on_navigate=on_navigate tone=ButtonTone::PrimaryCompact />
            </Reveal>
        </section>
    }
}

/// Showcase of the product listings
#[component]
pub fn Products() -> impl IntoView {
    view! {
        <section class="py-20 px-6 text-center bg-white dark:bg-gray-800">
            <h3 class="text-3xl font-bold mb-4">{products::HEADING}</h3>
            <p class="max-w-2xl mx-auto text-lg mb-8">{products::INTRO}</p>
            <ProductShowcase items=products::LISTINGS.to_vec() />
        </section>
    }
}

/// Call to action for prospective buyers
#[component]
pub fn Partnering(on_navigate: Callback<NavigationTarget>) -> impl IntoView {
    view! {
        <section class="py-20 px-6 bg-gray-50 dark:bg-gray-900 text-center">
            <h3 class="text-3xl font-bold mb-4">{partnering::HEADING}</h3>
            <p class="max-w-2xl mx-auto text-lg mb-6">{partnering::BODY}</p>
            <CtaButton cta=partnering::CTA on_navigate=on_navigate tone=ButtonTone::AccentCompact />
        </section>
    }
}

/// Newsletter signup
///
/// The field is bound to `email`; `on_subscribe` is all that happens on click.
#[component]
pub fn Newsletter(email: RwSignal<SubscriptionEmail>, on_subscribe: Callback<()>) -> impl IntoView {
    view! {
        <section class="py-12 bg-blue-900 text-white text-center px-6">
            <h4 class="text-2xl font-bold mb-2">{newsletter::HEADING}</h4>
            <p class="mb-6">{newsletter::BODY}</p>
            <div class="flex flex-col md:flex-row justify-center gap-4 max-w-2xl mx-auto">
                <input
                    type="email"
                    placeholder=newsletter::PLACEHOLDER
                    class="w-full px-4 py-2 rounded-md text-gray-900"
                    prop:value=move || email.with(|e| e.as_str().to_string())
                    on:input=move |ev| email.set(SubscriptionEmail(event_target_value(&ev)))
                />
                <button
                    type="button"
                    class="bg-orange-500 hover:bg-orange-600 px-6 py-2 rounded-md font-semibold"
                    on:click=move |_| on_subscribe.run(())
                >
                    {newsletter::SUBMIT_LABEL}
                </button>
            </div>
        </section>
    }
}

/// Site footer; `year` goes into the copyright line
#[component]
pub fn Footer(year: i32) -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-10 px-6">
            <div class="max-w-6xl mx-auto grid md:grid-cols-4 gap-8 text-sm">
                <div>
                    <h5 class="font-bold text-lg mb-2">{content::BRAND}</h5>
                    <p>{footer::TAGLINE}</p>
                </div>
                <div>
                    <h5 class="font-bold text-lg mb-2">"Navigation"</h5>
                    <ul>
                        {NavigationTarget::ALL
                            .into_iter()
                            .map(|target| view! {
                                <li>
                                    <a href=target.path() class="hover:underline">{target.label()}</a>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h5 class="font-bold text-lg mb-2">"Contact"</h5>
                    <p>"Email: " {footer::EMAIL}</p>
                    <p>"Phone: " {footer::PHONE}</p>
                </div>
                <div>
                    <h5 class="font-bold text-lg mb-2">"Follow Us"</h5>
                    <p>{footer::SOCIAL}</p>
                </div>
            </div>
            <div class="text-center mt-6 text-gray-400 text-xs">
                {content::copyright_notice(year)}
            </div>
        </footer>
    }
}
