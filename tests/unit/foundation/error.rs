use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VivifyError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        VivifyError::landmark("x")
            .to_string()
            .contains("landmark error:")
    );
    assert!(
        VivifyError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VivifyError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
