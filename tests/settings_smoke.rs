use impulse2d_engine::{EngineError, Vec2, WorldCore, WorldSettings};

#[test]
fn settings_document_round_trips_through_world() {
    let json = r#"{
        "gravity": {"x": 0.0, "y": 250.0},
        "damping": 0.9,
        "angular_damping": 0.95,
        "collision_iterations": 4
    }"#;
    let settings = WorldSettings::from_json(json).expect("settings should parse");
    assert_eq!(settings.gravity, Vec2::new(0.0, 250.0));
    assert_eq!(settings.positional_correction, 0.8);
    assert_eq!(settings.joint_margin, 0.5);

    let mut world = WorldCore::with_settings(settings.clone());
    let ball = world.create_circle(Vec2::ZERO, 5.0, 1.0, 0.0, 0.0);
    world.step(50.0);
    assert!((world.body(ball).unwrap().velocity.y - 5.0).abs() < 1e-4);
    assert_eq!(world.settings(), &settings);
}

#[test]
fn bad_settings_surface_a_readable_error() {
    let err = WorldSettings::from_json(r#"{"damping": "lots"}"#).unwrap_err();
    assert!(matches!(err, EngineError::InvalidSettings(_)));
    assert!(err.to_string().starts_with("invalid world settings"));
}
