use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RepeaterError::bad_parameter("x")
            .to_string()
            .contains("bad parameter:")
    );
    assert!(
        RepeaterError::camera("x")
            .to_string()
            .contains("camera error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RepeaterError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(!err.is_bad_parameter());
}
