// lib.rs - Root module for the twinefishery crate
//
// The same library is compiled twice: into the SSR server binary (`ssr`)
// and into the WASM bundle that hydrates the page in the browser (`hydrate`).

pub mod web_app;

/// WASM entry point, called by the hydration script cargo-leptos emits
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use web_app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
