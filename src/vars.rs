// Variables hold primitive data or references to data
// Variables are immutable by default

use std::io::{self, Write};

use tracing::{debug, info, info_span};

use crate::{DemoError, PROGRAM_NAME, PROGRAM_VERSION};

// Constants cannot be changed and need an explicit type
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.14159;
pub const MAX_USERS: i32 = 100;

/// Writes the five demo lines to stdout.
pub fn run() -> Result<(), DemoError> {
    let span = info_span!("run", program = PROGRAM_NAME, version = PROGRAM_VERSION);
    let _guard = span.enter();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_lines(&mut out)?;
    out.flush()?;

    info!("printed all lines");
    Ok(())
}

/// Writes the five demo lines to any sink. Print arguments are joined by a
/// single space, one line per print.
pub fn write_lines<W: Write>(out: &mut W) -> Result<(), DemoError> {
    // Explicit type annotation
    let a: i32 = 10;
    let name: &str = "Gopher";
    debug!(a, name, "declared typed bindings");
    writeln!(out, "Value of a: {} Name: {}", a, name)?;
    writeln!(out, "Hello, Go!")?;

    let age: i32 = 25;

    // Type inferred
    let city = "New York";

    // Shorthand, the most common form inside functions
    let (count, message) = (10, "Hello");
    debug!(age, city, count, greeting = message, "declared inferred bindings");

    debug!(pi = PI, max_users = MAX_USERS, "constants in scope");

    writeln!(out, "Value of age: {} city: {}", age, city)?;
    writeln!(out, "Value of count: {} count: {}", count, count)?;
    writeln!(out, "Value of message: {} city: {}", message, city)?;

    Ok(())
}
