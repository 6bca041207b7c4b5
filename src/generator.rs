//! Tree interpreters: a capped sample of accepted strings, the exact number
//! of accepted strings, and a written breakdown of that number.
//!
//! All three walk the tree through [`Visitor`](crate::parser::Visitor) and
//! share one reading of the node kinds, with unbounded repetition replaced by
//! [`Limits::repetition_limit`]. Without truncation the sample has exactly
//! [`Generator::count`] entries (duplicates included).

use indexmap::IndexSet;

use self::{count::Counter, explain::Explainer, sample::Sampler};
use crate::parser::{Ast, Parser};

mod config;
mod count;
mod explain;
mod sample;

pub use config::Limits;
pub use count::Count;


#[derive(Debug, Clone, Default)]
pub struct Generator {
    limits: Limits,
}

impl Generator {
    pub fn new(limits: Limits) -> Generator {
        Generator { limits }
    }

    /// Accepted strings in enumeration order, at most `max_combinations` of them.
    pub fn sample(&self, ast: &Ast) -> Vec<String> {
        Sampler::new(&self.limits).sample(ast)
    }

    pub fn sample_pattern(&self, pattern: &str) -> Vec<String> {
        self.sample(&Parser::parse(pattern))
    }

    /// The sample with duplicates removed, first occurrence kept.
    pub fn distinct(&self, ast: &Ast) -> IndexSet<String> {
        self.sample(ast).into_iter().collect()
    }

    pub fn distinct_pattern(&self, pattern: &str) -> IndexSet<String> {
        self.distinct(&Parser::parse(pattern))
    }

    pub fn count(&self, ast: &Ast) -> Count {
        Counter::new(self.limits.repetition_limit).count(ast)
    }

    pub fn count_pattern(&self, pattern: &str) -> Count {
        self.count(&Parser::parse(pattern))
    }

    pub fn explain(&self, ast: &Ast) -> String {
        Explainer::new(self.limits.repetition_limit).explain(ast)
    }

    pub fn explain_pattern(&self, pattern: &str) -> String {
        let ast = Parser::parse(pattern);
        format!(
            "Breaking down the pattern \"{}\":\n{}Total: {} possibilities\n",
            pattern,
            self.explain(&ast),
            self.count(&ast)
        )
    }
}
