//! # homepage-leptos
//!
//! Leptos SSR renderer for the RoboFIS documentation homepage.
//!
//! This crate renders the homepage feature section - a grid of cards,
//! one per documentation category - as static HTML using
//! [Leptos](https://leptos.dev/) server-side rendering. The card catalog
//! is configuration data: a built-in list ships with the crate, and an
//! alternative catalog can be loaded from JSON and validated up front.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - Pure SSR, no hydration needed
//! - **Component-Based** - Modular, reusable UI components
//! - **Type-Safe** - Full Rust type safety from catalog to HTML
//! - **Fail-Fast Config** - authoring errors are rejected at load time
//!
//! ## Quick Start
//!
//! ```rust
//! use homepage_leptos::{render_homepage, types::HomepageConfig};
//!
//! // Built-in catalog; use HomepageConfig::load_from_path for a JSON file
//! let config = HomepageConfig::builtin();
//!
//! // Render to HTML string
//! let html = render_homepage(&config);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//!
//! - [`types`] - the feature catalog data model and validation
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! This library uses Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![doc(html_root_url = "https://docs.rs/homepage-leptos/0.2.1")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::{FeaturesSection, HomeDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::HomepageConfig;

/// Render the complete homepage as an HTML document.
///
/// This is the main entry point. It takes a validated [`HomepageConfig`]
/// and produces a standalone HTML page as a string, styles inlined.
///
/// # Example
///
/// ```rust
/// use homepage_leptos::{render_homepage, types::HomepageConfig};
///
/// let html = render_homepage(&HomepageConfig::builtin());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_homepage(config: &HomepageConfig) -> String {
    let doc = view! {
        <HomeDocument config=config.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the feature `<section>` fragment.
///
/// Use this when the section is embedded into a page produced elsewhere;
/// the caller is then responsible for including [`styles::HOMEPAGE_CSS`].
///
/// # Example
///
/// ```rust
/// use homepage_leptos::{render_features_section, types::HomepageConfig};
///
/// let html = render_features_section(&HomepageConfig::builtin());
/// assert!(html.contains("Stock y Logística"));
/// ```
pub fn render_features_section(config: &HomepageConfig) -> String {
    let section = view! {
        <FeaturesSection config=config.clone() />
    };

    section.to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn empty_catalog() -> HomepageConfig {
        HomepageConfig {
            heading: "Heading".into(),
            tagline: "Tagline".into(),
            features: vec![],
        }
    }

    #[test]
    fn renders_one_card_per_record() {
        let config = HomepageConfig::builtin();
        let html = render_features_section(&config);

        let cards = html.matches(r#"class="feature-card""#).count();
        assert_eq!(cards, config.features.len());
    }

    #[test]
    fn cards_preserve_catalog_order() {
        let config = HomepageConfig::builtin();
        let html = render_features_section(&config);

        let mut previous = 0;
        for record in &config.features {
            let position = html
                .find(record.title.as_str())
                .unwrap_or_else(|| panic!("title {:?} not rendered", record.title));
            assert!(position >= previous, "{:?} rendered out of order", record.title);
            previous = position;
        }
    }

    #[test]
    fn card_text_matches_catalog_exactly() {
        let config = HomepageConfig::builtin();
        let html = render_features_section(&config);

        for record in &config.features {
            assert!(html.contains(record.title.as_str()));
            assert!(html.contains(record.description.as_str()));
        }
    }

    #[test]
    fn card_links_target_catalog_destinations() {
        let config = HomepageConfig::builtin();
        let html = render_features_section(&config);

        for record in &config.features {
            assert!(html.contains(&format!(r#"href="{}""#, record.link)));
        }
    }

    #[test]
    fn stock_card_scenario() {
        let html = render_features_section(&HomepageConfig::builtin());

        assert!(html.contains("📦 Stock y Logística"));
        assert!(html.contains(r#"href="/docs/category/stock""#));
    }

    #[test]
    fn cards_carry_positional_ids() {
        let config = HomepageConfig::builtin();
        let html = render_features_section(&config);

        assert!(html.contains(r#"id="feature-0""#));
        assert!(html.contains(r#"id="feature-4""#));
        assert!(!html.contains(r#"id="feature-5""#));
    }

    #[test]
    fn rendering_is_idempotent() {
        let config = HomepageConfig::builtin();
        assert_eq!(
            render_features_section(&config),
            render_features_section(&config)
        );
        assert_eq!(render_homepage(&config), render_homepage(&config));
    }

    #[test]
    fn empty_catalog_renders_header_and_no_cards() {
        let html = render_features_section(&empty_catalog());

        assert!(html.contains("Heading"));
        assert!(html.contains("Tagline"));
        assert_eq!(html.matches(r#"class="feature-card""#).count(), 0);
    }

    #[test]
    fn homepage_is_a_standalone_document() {
        let html = render_homepage(&HomepageConfig::builtin());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="es""#));
        assert!(html.contains("<style>"));
        assert!(html.contains(".feature-card"));
        assert!(html.contains("🏗️ Arquitectura de Microservicios"));
    }
}
