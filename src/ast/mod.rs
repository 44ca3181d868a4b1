mod ast;
mod display;

pub use ast::*;
