//! Data model for the homepage feature catalog.
//!
//! These types define the configuration that drives the homepage. They're
//! designed to be:
//!
//! - **Serializable** - the catalog can live in a JSON file via serde
//! - **Clone-friendly** - components can own their data without borrowing issues
//! - **Validated up front** - authoring errors fail at load time, not at render time
//!
//! # Example
//!
//! ```rust
//! use homepage_leptos::types::{FeatureRecord, HomepageConfig};
//!
//! let config = HomepageConfig {
//!     heading: "🏗️ Arquitectura de Microservicios".into(),
//!     tagline: "Explora la documentación de cada componente del sistema RoboFIS".into(),
//!     features: vec![FeatureRecord {
//!         title: "📦 Stock y Logística".into(),
//!         emoji: "📦".into(),
//!         description: "Gestión de inventario, almacenes y movimientos de robots".into(),
//!         link: "/docs/category/stock".into(),
//!     }],
//! };
//!
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// One documentation category card on the homepage.
///
/// The `title` may embed a decorative symbol in addition to the `emoji`
/// badge; both are rendered as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Card heading, displayed in an `<h3>`
    pub title: String,
    /// Badge symbol, displayed centered above the heading
    pub emoji: String,
    /// Card body text
    pub description: String,
    /// Absolute site path the card navigates to (e.g. `/docs/category/stock`)
    pub link: String,
}

/// The homepage feature catalog: section header plus the ordered card list.
///
/// Order is display-significant (top-to-bottom, left-to-right in the
/// wrapping grid) and is preserved exactly in the rendered output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomepageConfig {
    /// Section title, displayed in an `<h2>`
    pub heading: String,
    /// Section subtitle, displayed below the title
    pub tagline: String,
    /// Feature cards, in display order. An empty list is valid and
    /// renders a section with the header and zero cards.
    #[serde(default)]
    pub features: Vec<FeatureRecord>,
}

/// Authoring errors detected when loading a catalog.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The catalog file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was attempted
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The catalog file is not valid JSON for this schema
    #[error("failed to parse feature catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// The section heading is missing
    #[error("section heading must not be empty")]
    EmptyHeading,
    /// A record is missing a required field
    #[error("feature {index} ({title:?}): {field} must not be empty")]
    EmptyField {
        /// Zero-based position in the list
        index: usize,
        /// Title of the offending record (may itself be the empty field)
        title: String,
        /// Name of the empty field
        field: &'static str,
    },
    /// A record's link is not an absolute site path
    #[error("feature {index} ({title:?}): link {link:?} must be an absolute site path starting with '/'")]
    RelativeLink {
        /// Zero-based position in the list
        index: usize,
        /// Title of the offending record
        title: String,
        /// The rejected link value
        link: String,
    },
    /// Two records point at the same destination
    #[error("feature {index}: link {link:?} is already used by an earlier card")]
    DuplicateLink {
        /// Zero-based position of the later record
        index: usize,
        /// The shared link value
        link: String,
    },
}

impl HomepageConfig {
    /// The built-in RoboFIS catalog: one card per microservice, in the
    /// order they appear on the homepage.
    pub fn builtin() -> Self {
        Self {
            heading: "🏗️ Arquitectura de Microservicios".into(),
            tagline: "Explora la documentación de cada componente del sistema RoboFIS".into(),
            features: vec![
                FeatureRecord {
                    title: "📦 Stock y Logística".into(),
                    emoji: "📦".into(),
                    description: "Gestión de inventario, almacenes y movimientos de robots".into(),
                    link: "/docs/category/stock".into(),
                },
                FeatureRecord {
                    title: "🤖 Alquiler".into(),
                    emoji: "🤖".into(),
                    description: "Gestión de reservas, modificaciones y cancelaciones".into(),
                    link: "/docs/category/alquiler".into(),
                },
                FeatureRecord {
                    title: "👤 Usuarios y Autenticación".into(),
                    emoji: "👤".into(),
                    description: "Gestión de usuarios, créditos y autenticación JWT".into(),
                    link: "/docs/category/usuarios".into(),
                },
                FeatureRecord {
                    title: "📊 Estado de Robots".into(),
                    emoji: "📊".into(),
                    description: "Monitoreo en tiempo real del estado de los robots".into(),
                    link: "/docs/category/estado-de-robots".into(),
                },
                FeatureRecord {
                    title: "🔔 Notificaciones".into(),
                    emoji: "🔔".into(),
                    description: "Sistema de notificaciones y alertas a usuarios".into(),
                    link: "/docs/category/notificaciones".into(),
                },
            ],
        }
    }

    /// Parse a catalog from JSON and validate it.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a catalog from a JSON file and validate it.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Check catalog invariants, returning the first violation found.
    ///
    /// Link destinations are not resolved here - whether a category page
    /// actually exists is the site build's concern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.heading.is_empty() {
            return Err(ConfigError::EmptyHeading);
        }

        let mut seen_links: HashSet<&str> = HashSet::new();
        for (index, record) in self.features.iter().enumerate() {
            for (field, value) in [
                ("title", &record.title),
                ("emoji", &record.emoji),
                ("description", &record.description),
                ("link", &record.link),
            ] {
                if value.is_empty() {
                    return Err(ConfigError::EmptyField {
                        index,
                        title: record.title.clone(),
                        field,
                    });
                }
            }

            if !record.link.starts_with('/') {
                return Err(ConfigError::RelativeLink {
                    index,
                    title: record.title.clone(),
                    link: record.link.clone(),
                });
            }

            if !seen_links.insert(record.link.as_str()) {
                return Err(ConfigError::DuplicateLink {
                    index,
                    link: record.link.clone(),
                });
            }
        }

        Ok(())
    }
}
