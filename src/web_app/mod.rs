// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Page state and data types (theme, navigation, products, motion)
// - content.rs: Static site configuration (copy, image paths, animations)
// - error.rs: Error types
// - components/: Section and widget components (both SSR and hydrate)
// - pages/: The landing page (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod content;
pub mod error;
pub mod model;

pub mod components;
pub mod pages;
pub mod app;

// Re-export main app component for convenience
pub use app::App;
