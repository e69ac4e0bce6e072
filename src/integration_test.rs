#![cfg(test)]

use crate::{DemoError, PROGRAM_NAME, PROGRAM_VERSION};

#[test]
fn program_identity_comes_from_the_manifest() {
    assert_eq!(PROGRAM_NAME, env!("CARGO_PKG_NAME"));
    assert_eq!(PROGRAM_VERSION, env!("CARGO_PKG_VERSION"));
}

#[test]
fn error_displays_underlying_io_message() {
    let err = DemoError::from(std::io::Error::new(
        std::io::ErrorKind::BrokenPipe,
        "stdout closed",
    ));
    assert_eq!(err.to_string(), "stdout closed");
}
