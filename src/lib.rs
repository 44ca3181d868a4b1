pub mod ast;
pub mod error;
pub mod frontend;
pub mod runtime;
mod stack;

use std::io::Write;
use std::sync::Once;

use ast::Program;
use error::{Bx0Error, RuntimeError, SyntaxError};
use frontend::Parser;
use runtime::Interpreter;

/// Parses BX0 source into a program. Stops at the first syntax error.
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    let mut parser = Parser::new(source);
    parser.parse_program()
}

/// Executes a parsed program against a fresh environment, writing each
/// `print` result as one line to `out`.
pub fn run<W: Write>(program: &Program, out: W) -> Result<(), RuntimeError> {
    let mut interpreter = Interpreter::new(out);
    interpreter.run(program)
}

/// Parses the whole source, then runs it. Nothing is executed when the
/// source has a syntax error.
pub fn interpret<W: Write>(source: &str, out: W) -> Result<(), Bx0Error> {
    let program = parse(source)?;
    run(&program, out)?;
    Ok(())
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=bx0=debug` or
/// `RUST_LOG=bx0=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}
