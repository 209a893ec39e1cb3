// web_app/pages/mod.rs - Page components module
//
// - HomePage: the landing page, the only routed page

pub mod home;

// Re-export page components
pub use home::{HomePage, LandingLayout};
