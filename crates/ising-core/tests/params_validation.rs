use ising_core::SimulationParameters;

#[test]
fn defaults_match_documented_values() {
    let params = SimulationParameters::default();
    assert_eq!(params.size, 100);
    assert_eq!(params.steps, 500_000);
    assert_eq!(params.field, 0.0);
    assert_eq!(params.coupling, -5.0);
    assert_eq!(params.temperature, 0.1);
    params.validate().unwrap();
}

#[test]
fn zero_size_is_rejected() {
    let err = SimulationParameters::new(0, 10, 0.0, 1.0, 1.0).unwrap_err();
    assert_eq!(err.info().code, "params-size");
}

#[test]
fn zero_steps_is_legal() {
    SimulationParameters::new(4, 0, 0.0, 1.0, 1.0).unwrap();
}

#[test]
fn zero_temperature_is_legal() {
    SimulationParameters::new(4, 10, 0.0, 1.0, 0.0).unwrap();
}

#[test]
fn negative_temperature_is_rejected() {
    let err = SimulationParameters::new(4, 10, 0.0, 1.0, -0.5).unwrap_err();
    assert_eq!(err.info().code, "params-temperature");
}

#[test]
fn non_finite_values_are_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(SimulationParameters::new(4, 10, bad, 1.0, 1.0).is_err());
        assert!(SimulationParameters::new(4, 10, 0.0, bad, 1.0).is_err());
        assert!(SimulationParameters::new(4, 10, 0.0, 1.0, bad).is_err());
    }
}

#[test]
fn missing_fields_deserialize_to_defaults() {
    let params: SimulationParameters = serde_json::from_str("{}").unwrap();
    assert_eq!(params, SimulationParameters::default());

    let params: SimulationParameters = serde_json::from_str(r#"{"size": 8}"#).unwrap();
    assert_eq!(params.size, 8);
    assert_eq!(params.steps, 500_000);
}
