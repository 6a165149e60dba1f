use serde::{Deserialize, Serialize};
use thiserror::Error;

use riemann_catalog::Catalog;

use crate::RiemannModel;

/// A serializable description of a [`RiemannModel`] over the catalog.
///
/// Missing bounds stand for values the user has not entered yet and map to
/// the unbounded sentinels, so a partially filled document still builds a
/// model (one that reports itself as in error).
///
/// ```toml
/// x_min = -2.0
/// x_max = 2.0
/// interval_count = 8
/// function = "square"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_min: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_max: Option<f64>,

    pub interval_count: i64,

    pub function: Catalog,
}

/// Errors that can occur when reading a [`ModelConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            x_min: None,
            x_max: None,
            interval_count: 1,
            function: Catalog::default(),
        }
    }
}

impl ModelConfig {
    /// Parses a config from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or has unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parses a config from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or has unknown fields.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parses a config from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid YAML or has unknown fields.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Captures the current state of a model.
    ///
    /// Non-finite bounds, `NaN` included, are recorded as missing, so
    /// [`build`](Self::build) restores them as the `-inf`/`+inf` sentinels.
    /// A model in error because of a non-finite bound stays in error after the
    /// round trip, but a `NaN` bound comes back as an infinity.
    #[must_use]
    pub fn from_model(model: &RiemannModel<Catalog>) -> Self {
        let finite = |x: f64| x.is_finite().then_some(x);
        Self {
            x_min: finite(model.x_min()),
            x_max: finite(model.x_max()),
            interval_count: model.interval_count(),
            function: *model.function(),
        }
    }

    /// Builds the described model.
    #[must_use]
    pub fn build(&self) -> RiemannModel<Catalog> {
        let mut model = RiemannModel::new(self.function);
        model.set_domain(
            self.x_min.unwrap_or(f64::NEG_INFINITY),
            self.x_max.unwrap_or(f64::INFINITY),
        );
        model.set_interval_count(self.interval_count);
        model
    }
}

impl From<&ModelConfig> for RiemannModel<Catalog> {
    fn from(config: &ModelConfig) -> Self {
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use riemann_core::Domain;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ModelConfig::from_toml_str("").unwrap();

        assert_eq!(config, ModelConfig::default());

        let model = config.build();
        assert_eq!(model.domain(), Domain::UNBOUNDED);
        assert_eq!(model.interval_count(), 1);
        assert!(model.is_in_error());
    }

    #[test]
    fn parses_toml() {
        let config = ModelConfig::from_toml_str(
            r#"
            x_min = -2.0
            x_max = 2.0
            interval_count = 8
            function = "cube"
            "#,
        )
        .unwrap();

        let model = config.build();
        assert_eq!(model.domain(), Domain::new(-2.0, 2.0));
        assert_eq!(model.interval_count(), 8);
        assert_eq!(*model.function(), Catalog::Cube);
        assert!(!model.is_in_error());
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = ModelConfig::from_json_str(r#"{ "x_min": 0.0, "rule": "midpoint" }"#);

        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn rejects_unknown_function() {
        let result = ModelConfig::from_yaml_str("function: tangent\n");

        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn from_model_drops_sentinel_bounds() {
        let mut model = RiemannModel::new(Catalog::Sine);
        model.set_x_max(3.0);
        model.set_interval_count(12);

        let config = ModelConfig::from_model(&model);

        assert_eq!(config.x_min, None);
        assert_eq!(config.x_max, Some(3.0));
        assert_eq!(RiemannModel::from(&config), model);
    }

    #[test]
    fn nan_bound_restores_as_sentinel() {
        let mut model = RiemannModel::new(Catalog::Linear);
        model.set_domain(f64::NAN, 1.0);

        let restored = ModelConfig::from_model(&model).build();

        assert_eq!(restored.x_min(), f64::NEG_INFINITY);
        assert_eq!(restored.x_max(), 1.0);
        assert!(model.is_in_error());
        assert!(restored.is_in_error());
    }
}
