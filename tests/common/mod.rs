// common/mod.rs - Shared helpers for the render tests
//
// Components are rendered to an HTML string inside a fresh reactive owner,
// the same way the SSR server renders them for a request.

use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use twinefishery::web_app::model::NavigationTarget;

/// Render a view to HTML under its own owner
pub fn render<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| view().into_view().to_html())
}

/// Navigation callback that records every target it is handed
pub fn recording_navigator() -> (Callback<NavigationTarget>, Arc<Mutex<Vec<NavigationTarget>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let callback = Callback::new(move |target: NavigationTarget| {
        sink.lock().unwrap().push(target);
    });
    (callback, seen)
}

/// Position of `needle` in `html`, panicking with context if absent
pub fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{:?} not found in rendered html", needle))
}
