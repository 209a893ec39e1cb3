// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Buttons and the theme switch
// - motion.rs: Entry animation wrapper (mount / viewport triggers)
// - product.rs: Product card and showcase grid
// - sections.rs: The landing page sections, header to footer

pub mod common;
pub mod motion;
pub mod product;
pub mod sections;

// Re-export commonly used components for convenience
pub use common::*;
pub use motion::*;
pub use product::*;
pub use sections::*;
