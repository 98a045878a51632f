//! Leptos UI components for rendering the homepage.
//!
//! Each component is a Leptos `#[component]` function producing static
//! markup; there is no reactive state anywhere in the tree.
//!
//! # Component Hierarchy
//!
//! ```text
//! HomeDocument
//! └── FeaturesSection
//!     └── FeatureCard (one per FeatureRecord)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_homepage`], but can
//! be composed directly for custom layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use homepage_leptos::components::FeaturesSection;
//! use homepage_leptos::types::HomepageConfig;
//!
//! view! {
//!     <FeaturesSection config=HomepageConfig::builtin() />
//! }
//! ```

mod document;
mod features;

pub use document::HomeDocument;
pub use features::{FeatureCard, FeaturesSection};
