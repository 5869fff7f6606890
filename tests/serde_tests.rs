#![cfg(feature = "serde")]

//! Integration tests for serde support.

use fnkit::optional::Optional;
use rstest::rstest;

#[rstest]
#[case(Optional::some(42))]
#[case(Optional::none())]
fn test_optional_json_roundtrip(#[case] optional: Optional<i32>) {
    let json = serde_json::to_string(&optional).unwrap();
    let restored: Optional<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(optional, restored);
}

#[rstest]
fn test_optional_external_representation() {
    assert_eq!(serde_json::to_string(&Optional::some("x")).unwrap(), r#"{"Present":"x"}"#);
    assert_eq!(serde_json::to_string(&Optional::<u8>::none()).unwrap(), r#""Absent""#);
}

#[rstest]
fn test_nested_optionals() {
    let nested = vec![Optional::some(Optional::some(1_u8)), Optional::some(Optional::none()), Optional::none()];
    let json = serde_json::to_string(&nested).unwrap();
    let restored: Vec<Optional<Optional<u8>>> = serde_json::from_str(&json).unwrap();
    assert_eq!(nested, restored);
}
