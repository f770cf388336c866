use super::*;

#[test]
fn constructors_carry_message() {
    let e = TickgifError::validation("bad frame");
    assert_eq!(e.to_string(), "validation error: bad frame");

    let e = TickgifError::font("missing face");
    assert_eq!(e.to_string(), "font error: missing face");

    let e = TickgifError::encode("no frames");
    assert_eq!(e.to_string(), "encode error: no frames");
}

#[test]
fn anyhow_errors_pass_through() {
    let e = TickgifError::from(anyhow::anyhow!("lower level"));
    assert_eq!(e.to_string(), "lower level");
}
