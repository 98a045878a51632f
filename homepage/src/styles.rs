//! CSS styles for the homepage.
//!
//! This module contains the complete CSS for the feature section,
//! including the responsive card grid and dark mode support.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use homepage_leptos::styles::HOMEPAGE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", HOMEPAGE_CSS, my_css);
//! ```

/// Complete CSS for the homepage feature section.
///
/// This CSS provides:
/// - Base typography and spacing
/// - Centered section header
/// - Responsive wrapping card grid (three columns, collapsing to one)
/// - Card hover treatment
/// - Dark mode via `prefers-color-scheme`
pub const HOMEPAGE_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --surface: #f6f8fa;
    --text: #1c1e21;
    --text-dim: #525860;
    --border: rgba(28, 30, 33, 0.1);
    --accent: #2e8555;
    --shadow: rgba(0, 0, 0, 0.1);
    --font-base: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    --container-max: 1140px;
}

@media (prefers-color-scheme: dark) {
    :root {
        --bg: #1b1b1d;
        --surface: #242526;
        --text: #e3e3e3;
        --text-dim: #a0a5ab;
        --border: rgba(227, 227, 227, 0.12);
        --accent: #25c2a0;
        --shadow: rgba(0, 0, 0, 0.4);
    }
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-base);
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
    margin: 0;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
}

.features {
    padding: 64px 0;
}

.section-header {
    text-align: center;
    margin-bottom: 32px;
}

.section-title {
    font-size: 2rem;
    margin: 0 0 8px;
}

.section-tagline {
    color: var(--text-dim);
    margin: 0;
}

.features-row {
    display: flex;
    flex-wrap: wrap;
    margin: 0 -12px;
}

.feature-col {
    flex: 0 0 33.333%;
    max-width: 33.333%;
    padding: 12px;
}

@media (max-width: 996px) {
    .feature-col {
        flex: 0 0 50%;
        max-width: 50%;
    }
}

@media (max-width: 640px) {
    .feature-col {
        flex: 0 0 100%;
        max-width: 100%;
    }
}

.feature-card {
    display: block;
    height: 100%;
    padding: 24px 16px;
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 8px;
    color: inherit;
    text-decoration: none;
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}

.feature-card:hover {
    transform: translateY(-4px);
    box-shadow: 0 8px 24px var(--shadow);
}

.feature-badge {
    text-align: center;
    margin-bottom: 12px;
}

.feature-emoji {
    font-size: 3rem;
    line-height: 1;
}

.feature-title {
    text-align: center;
    font-size: 1.15rem;
    margin: 0 0 8px;
}

.feature-description {
    text-align: center;
    color: var(--text-dim);
    margin: 0;
    padding: 0 8px;
}
"#;
