//! Root document component - the complete HTML page.

use super::FeaturesSection;
use crate::styles::HOMEPAGE_CSS;
use crate::types::HomepageConfig;
use leptos::prelude::*;

// The documentation site is Spanish-language throughout.
const PAGE_TITLE: &str = "RoboFIS · Documentación";

/// The complete HTML document for the homepage.
///
/// Styles are inlined so the page renders standalone, with no asset
/// pipeline behind it.
#[component]
pub fn HomeDocument(config: HomepageConfig) -> impl IntoView {
    view! {
        <html lang="es">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{PAGE_TITLE}</title>
                <style>{HOMEPAGE_CSS}</style>
            </head>
            <body>
                <FeaturesSection config=config />
            </body>
        </html>
    }
}
