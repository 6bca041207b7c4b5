// syntax (like BNF)
//
// expression = term * ( '|' expression ) ?
// term       = atom ( '+' | '*' | '?' | '{' repeat '}' ) ?
// repeat     = number ( ',' number ? ) ?
// atom       = '(' expression ')' | char
// char       = any character except '(' ')' '|'
//
// '|' takes the whole concatenation on its left and the rest of the
// expression on its right, so chains nest to the right.

pub mod ast;
mod error;
mod parser;

pub use ast::{Ast, AstKind, RepeatKind, Visitor};
pub use error::ParseError;
pub use parser::Parser;

#[cfg(test)]
mod tests;
