use approx::assert_relative_eq;

use integration_tests::documents;
use riemann_catalog::Catalog;
use riemann_model::{ModelConfig, RiemannModel};

fn assert_square_session(config: &ModelConfig) {
    assert_eq!(config.x_min, Some(-2.0));
    assert_eq!(config.x_max, Some(2.0));
    assert_eq!(config.interval_count, 4);
    assert_eq!(config.function, Catalog::Square);

    let model = config.build();
    assert!(!model.is_in_error());
    assert_relative_eq!(model.step_size(), 1.0);
    assert_relative_eq!(model.rectangle_sum(), 6.0);
}

#[test]
fn toml_document() {
    let config = ModelConfig::from_toml_str(documents::TOML).unwrap();
    assert_square_session(&config);
}

#[test]
fn json_document() {
    let config = ModelConfig::from_json_str(documents::JSON).unwrap();
    assert_square_session(&config);
}

#[test]
fn yaml_document() {
    let config = ModelConfig::from_yaml_str(documents::YAML).unwrap();
    assert_square_session(&config);
}

#[test]
fn saved_session_restores_the_same_model() {
    let mut model = RiemannModel::new(Catalog::Cosine);
    model.set_domain(-1.0, 1.0);
    model.set_interval_count(25);

    let json = serde_json::to_string(&ModelConfig::from_model(&model)).unwrap();
    let restored = ModelConfig::from_json_str(&json).unwrap().build();

    assert_eq!(restored, model);
    assert_relative_eq!(restored.rectangle_sum(), model.rectangle_sum());
}

#[test]
fn unentered_bounds_are_omitted_from_saved_session() {
    let model = RiemannModel::new(Catalog::Linear);

    let toml = toml::to_string(&ModelConfig::from_model(&model)).unwrap();

    assert!(!toml.contains("x_min"));
    assert!(!toml.contains("x_max"));
    assert!(ModelConfig::from_toml_str(&toml).unwrap().build().is_in_error());
}
