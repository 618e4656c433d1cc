//! JSON layout of problem instances.
#![cfg(feature = "serde")]

use drone_hub::generator::{generate, GeneratorConfig};
use drone_hub::geometry::{Bounds, Point};
use drone_hub::problem::{DeliveryPoint, ProblemInstance};

#[test]
fn test_reads_pascal_case_layout() {
    let json = r#"{
        "Points": [
            { "Coordinates": { "X": 2, "Y": 3 }, "Deliveries": 4 },
            { "Coordinates": { "X": 0, "Y": 1 }, "Deliveries": 1 }
        ],
        "Bounds": { "Minimum": { "X": 0, "Y": 0 }, "Maximum": { "X": 10, "Y": 8 } },
        "DroneDistance": 12.5
    }"#;

    let problem: ProblemInstance = serde_json::from_str(json).unwrap();

    assert_eq!(
        problem.points,
        vec![
            DeliveryPoint::new(Point::new(2, 3), 4),
            DeliveryPoint::new(Point::new(0, 1), 1),
        ]
    );
    assert_eq!(problem.bounds, Bounds::new(Point::new(0, 0), Point::new(10, 8)));
    assert_eq!(problem.drone_range, 12.5);
    assert!(problem.validate().is_ok());
}

#[test]
fn test_missing_bounds_and_range_use_defaults() {
    let json = r#"{ "Points": [] }"#;
    let problem: ProblemInstance = serde_json::from_str(json).unwrap();

    assert_eq!(problem.bounds, ProblemInstance::DEFAULT_BOUNDS);
    assert_eq!(problem.drone_range, ProblemInstance::DEFAULT_DRONE_RANGE);
}

#[test]
fn test_generated_instance_survives_json() {
    let problem = generate(&GeneratorConfig::default().with_seed(6).with_volume(0.3));
    let json = serde_json::to_string(&problem).unwrap();

    assert!(json.contains("\"DroneDistance\""));
    assert_eq!(serde_json::from_str::<ProblemInstance>(&json).unwrap(), problem);
}
