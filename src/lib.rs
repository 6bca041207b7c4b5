mod generator;
mod parser;
mod printer;

pub use generator::{Count, Generator, Limits};
pub use parser::{ast, Ast, AstKind, ParseError, Parser, RepeatKind, Visitor};
pub use printer::TreePrinter;
