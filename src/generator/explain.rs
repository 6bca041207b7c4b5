use std::fmt::Write;

use super::count::{repeat_total, Count, Counter};
use crate::parser::{Ast, AstKind, RepeatKind, Visitor};

/// Writes the counting recursion out as indented text, one `"* "` per level.
pub(crate) struct Explainer {
    limit: u32,
    depth: usize,
}

impl Explainer {
    pub fn new(limit: u32) -> Self {
        Explainer { limit, depth: 0 }
    }

    pub fn explain(&mut self, ast: &Ast) -> String {
        ast.accept(self)
    }

    fn indent(&self) -> String {
        "* ".repeat(self.depth)
    }

    fn count(&self, ast: &Ast) -> Count {
        Counter::new(self.limit).count(ast)
    }

    fn nested(&mut self, ast: &Ast) -> String {
        self.depth += 1;
        let text = ast.accept(self);
        self.depth -= 1;
        text
    }
}

fn possibilities(count: Count) -> String {
    match count {
        Count::ONE => "1 possibility".to_owned(),
        _ => format!("{} possibilities", count),
    }
}

impl Visitor for Explainer {
    type Output = String;

    fn visit_literal(&mut self, c: char) -> String {
        format!("{}`{}` - 1 possibility\n", self.indent(), c)
    }

    fn visit_union(&mut self, children: &[Ast]) -> String {
        let total: Count = children.iter().map(|child| self.count(child)).sum();
        let alternatives: Vec<String> = children.iter().map(|child| format!("`{}`", child)).collect();

        let mut text = format!(
            "{}({}) - {}\n",
            self.indent(),
            alternatives.join(" | "),
            possibilities(total)
        );
        for child in children.iter() {
            if !matches!(child.kind, AstKind::Literal(_)) {
                text.push_str(&self.nested(child));
            }
        }
        text
    }

    fn visit_concat(&mut self, children: &[Ast]) -> String {
        let mut text = String::new();
        if self.depth > 0 {
            let total: Count = children.iter().map(|child| self.count(child)).product();
            let _ = writeln!(
                text,
                "{}Concatenation of {} elements - {}",
                self.indent(),
                children.len(),
                possibilities(total)
            );
        }
        for child in children.iter() {
            text.push_str(&self.nested(child));
        }
        text
    }

    fn visit_repeat(&mut self, child: &Ast, min: u32, max: RepeatKind) -> String {
        let indent = self.indent();
        let base = self.count(child);
        let pattern = Ast::repeat(child.clone(), min, max);
        let mut text = String::new();

        if (min, max) == (0, RepeatKind::Num(1)) && self.limit >= 1 {
            let _ = writeln!(
                text,
                "{}`{}` - 1 + {} = {} (present or not)",
                indent,
                pattern,
                base,
                possibilities(Count::ONE + base)
            );
        } else {
            let upper = max.upper_bound(self.limit);
            match max {
                RepeatKind::Infinity => {
                    let _ = writeln!(text, "{}`{}` - with a {}-time repetition limit:", indent, pattern, self.limit);
                }
                RepeatKind::Num(_) => {
                    let _ = writeln!(text, "{}`{}` - with repetition limits {} to {}:", indent, pattern, min, upper);
                }
            }

            let total = repeat_total(base, min, upper);
            match base {
                // powers of 0 and 1 are constant past k = 0, one line covers the range
                Count::Finite(b @ (0 | 1)) if min < upper => {
                    let each = match b {
                        0 => "0^k = 0 possibilities for k > 0",
                        _ => "1^k = 1 possibility each",
                    };
                    let _ = writeln!(
                        text,
                        "{}  {} to {} repetitions: {} (running total {})",
                        indent, min, upper, each, total
                    );
                }
                _ if min <= upper => {
                    let mut running = Count::ZERO;
                    for k in min..=upper {
                        let power = base.pow(k);
                        running = running + power;
                        let _ = writeln!(
                            text,
                            "{}  {} repetitions: {}^{} = {} (running total {})",
                            indent,
                            k,
                            base,
                            k,
                            possibilities(power),
                            running
                        );
                        if running.is_overflow() {
                            break;
                        }
                    }
                }
                _ => {}
            }
            let _ = writeln!(text, "{}  Total for this part: {}", indent, possibilities(total));
        }

        if !matches!(child.kind, AstKind::Literal(_)) {
            text.push_str(&self.nested(child));
        }
        text
    }
}
