//! Feature section components - the card grid.

use crate::types::{FeatureRecord, HomepageConfig};
use leptos::prelude::*;

/// The homepage feature section: centered title/tagline pair followed by
/// one [`FeatureCard`] per catalog record, in catalog order.
///
/// An empty catalog renders the header with an empty row.
#[component]
pub fn FeaturesSection(config: HomepageConfig) -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{config.heading}</h2>
                    <p class="section-tagline">{config.tagline}</p>
                </div>
                <div class="features-row">
                    {config.features.into_iter().enumerate().map(|(idx, record)| {
                        // Positional ids are stable: the catalog never reorders at runtime.
                        let card_id = format!("feature-{}", idx);
                        view! { <FeatureCard record=record card_id=card_id /> }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One navigable card: centered emoji badge, heading, and description,
/// wrapped in a link to the record's destination.
#[component]
pub fn FeatureCard(record: FeatureRecord, card_id: String) -> impl IntoView {
    view! {
        <div class="feature-col" id=card_id>
            <a href=record.link class="feature-card">
                <div class="feature-badge">
                    <span class="feature-emoji">{record.emoji}</span>
                </div>
                <h3 class="feature-title">{record.title}</h3>
                <p class="feature-description">{record.description}</p>
            </a>
        </div>
    }
}
