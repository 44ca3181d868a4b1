pub mod lexer;
mod parser;
mod source;

pub use parser::Parser;
pub use source::Source;
