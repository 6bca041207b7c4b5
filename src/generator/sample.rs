use super::config::Limits;
use crate::parser::{Ast, RepeatKind, Visitor};

/// Enumerates accepted strings depth first. Every intermediate list is
/// truncated to `cap`, so later combinations are dropped once it binds.
pub(crate) struct Sampler {
    limit: u32,
    cap: usize,
}

impl Sampler {
    pub fn new(limits: &Limits) -> Self {
        Sampler {
            limit: limits.repetition_limit,
            cap: limits.max_combinations,
        }
    }

    pub fn sample(&mut self, ast: &Ast) -> Vec<String> {
        let mut results = ast.accept(self);
        results.truncate(self.cap);
        results
    }

    // prefix-major product: every suffix is tried before the next prefix
    fn join(&self, prefixes: &[String], suffixes: &[String]) -> Vec<String> {
        let mut results = Vec::new();

        'outer: for prefix in prefixes.iter() {
            for suffix in suffixes.iter() {
                if results.len() >= self.cap {
                    break 'outer;
                }
                let mut s = String::with_capacity(prefix.len() + suffix.len());
                s.push_str(prefix);
                s.push_str(suffix);
                results.push(s);
            }
        }

        results
    }
}

impl Visitor for Sampler {
    type Output = Vec<String>;

    fn visit_literal(&mut self, c: char) -> Vec<String> {
        let mut results = vec![c.to_string()];
        results.truncate(self.cap);
        results
    }

    fn visit_union(&mut self, children: &[Ast]) -> Vec<String> {
        let mut results = Vec::new();

        for child in children.iter() {
            if results.len() >= self.cap {
                break;
            }
            results.extend(child.accept(self));
            results.truncate(self.cap);
        }

        results
    }

    fn visit_concat(&mut self, children: &[Ast]) -> Vec<String> {
        let mut results = vec![String::new()];
        results.truncate(self.cap);

        for child in children.iter() {
            if results.is_empty() {
                break;
            }
            let options = child.accept(self);
            results = self.join(&results, &options);
        }

        results
    }

    fn visit_repeat(&mut self, child: &Ast, min: u32, max: RepeatKind) -> Vec<String> {
        let upper = max.upper_bound(self.limit);
        if min > upper {
            return vec![];
        }

        let base = child.accept(self);
        let mut results = Vec::new();
        if min == 0 {
            results.push(String::new());
        }

        // power holds every k-fold concatenation of base
        let mut power = vec![String::new()];
        for k in 1..=upper {
            if results.len() >= self.cap {
                break;
            }
            power = self.join(&power, &base);
            if power.is_empty() {
                break;
            }
            if k >= min {
                results.extend(power.iter().cloned());
                results.truncate(self.cap);
            }
        }

        results.truncate(self.cap);
        results
    }
}
