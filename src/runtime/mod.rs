mod environment;
mod interpreter;
pub mod ops;

pub use environment::Environment;
pub use interpreter::Interpreter;
