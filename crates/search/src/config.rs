//! Search configuration.
//!
//! Every key is optional; a missing file or section yields the defaults used
//! by the storefront.

use crate::{
    ProductField, Result, SearchError, DEFAULT_MAX_RECOMMENDATIONS, DEFAULT_MAX_SUGGESTIONS,
    DEFAULT_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchConfig {
    /// `[search]`
    #[serde(default)]
    pub search: SearchSection,

    /// `[suggestions]`
    #[serde(default)]
    pub suggestions: SuggestionsSection,

    /// `[recommendations]`
    #[serde(default)]
    pub recommendations: RecommendationsSection,
}

/// Fuzzy search settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSection {
    /// Edit tolerance for matching
    #[serde(default = "default_threshold")]
    pub threshold: u32,

    /// Product fields searched
    #[serde(default = "default_fields")]
    pub fields: Vec<ProductField>,

    /// Re-order results by relevance
    #[serde(default)]
    pub rank: bool,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            fields: default_fields(),
            rank: false,
        }
    }
}

/// Query suggestion settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionsSection {
    /// Edit tolerance for candidate words
    #[serde(default = "default_threshold")]
    pub threshold: u32,

    /// Maximum suggestions returned
    #[serde(default = "default_max_suggestions")]
    pub max: usize,
}

impl Default for SuggestionsSection {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            max: default_max_suggestions(),
        }
    }
}

/// Recommendation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsSection {
    /// Maximum related products returned
    #[serde(default = "default_max_recommendations")]
    pub max: usize,
}

impl Default for RecommendationsSection {
    fn default() -> Self {
        Self {
            max: default_max_recommendations(),
        }
    }
}

fn default_threshold() -> u32 {
    DEFAULT_THRESHOLD
}

fn default_fields() -> Vec<ProductField> {
    ProductField::ALL.to_vec()
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

fn default_max_recommendations() -> usize {
    DEFAULT_MAX_RECOMMENDATIONS
}

impl SearchConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading search configuration");
        Self::from_toml_str(&content)
    }

    /// Check that the settings can produce results.
    pub fn validate(&self) -> Result<()> {
        if self.search.fields.is_empty() {
            return Err(SearchError::Config("search.fields must not be empty".into()));
        }
        if self.suggestions.max == 0 {
            return Err(SearchError::Config("suggestions.max must be at least 1".into()));
        }
        if self.recommendations.max == 0 {
            return Err(SearchError::Config("recommendations.max must be at least 1".into()));
        }
        Ok(())
    }
}
