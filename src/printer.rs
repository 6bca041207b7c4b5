//! Display-only views of a syntax tree.

use std::fmt::Write;

use crate::parser::{Ast, AstKind, RepeatKind};

pub struct TreePrinter;

fn describe(ast: &Ast) -> String {
    match &ast.kind {
        AstKind::Literal(c) => format!("Literal: '{}'", c),
        AstKind::Union => "Alternation".to_owned(),
        AstKind::Concat => "Concatenation".to_owned(),
        AstKind::Repeat(min, max) => format!("Repetition ({} to {})", min, bound(*max)),
    }
}

fn bound(max: RepeatKind) -> String {
    match max {
        RepeatKind::Num(n) => n.to_string(),
        RepeatKind::Infinity => "∞".to_owned(),
    }
}

impl TreePrinter {
    /// One node per line, two spaces of indent per level.
    pub fn render(ast: &Ast) -> String {
        let mut out = String::new();
        Self::render_(ast, 0, &mut out);
        out
    }

    fn render_(ast: &Ast, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        match ast.kind {
            AstKind::Literal(_) => {
                let _ = writeln!(out, "{}{}", indent, describe(ast));
            }
            _ => {
                let _ = writeln!(out, "{}{}:", indent, describe(ast));
            }
        }
        for child in ast.children.iter() {
            Self::render_(child, depth + 1, out);
        }
    }

    pub fn visualize(ast: &Ast) -> String {
        let mut out = String::new();
        Self::visualize_(ast, "", true, &mut out);
        out
    }

    fn visualize_(ast: &Ast, prefix: &str, is_last: bool, out: &mut String) {
        let (connector, extension) = match is_last {
            true => ("└── ", "    "),
            false => ("├── ", "│   "),
        };
        let _ = writeln!(out, "{}{}{}", prefix, connector, describe(ast));

        let prefix = format!("{}{}", prefix, extension);
        let last = ast.children.len().saturating_sub(1);
        for (i, child) in ast.children.iter().enumerate() {
            Self::visualize_(child, &prefix, i == last, out);
        }
    }

    /// Two-step walkthrough: the tree, then how each node shapes the output.
    pub fn explain_processing(pattern: &str, ast: &Ast, repetition_limit: u32) -> String {
        let mut out = format!("Step-by-step processing of pattern '{}':\n\n", pattern);
        out.push_str("1. Parsing the regular expression into a syntax tree\n");
        out.push_str(&Self::visualize(ast));
        out.push_str("\n2. Interpreting the syntax tree to generate valid strings\n");
        Self::processing_(ast, 1, repetition_limit, &mut out);
        out
    }

    fn processing_(ast: &Ast, step: usize, limit: u32, out: &mut String) {
        match &ast.kind {
            AstKind::Literal(c) => {
                let _ = writeln!(out, "   {}. Process literal '{}' - adds exactly this character", step, c);
            }
            AstKind::Union => {
                let _ = writeln!(
                    out,
                    "   {}. Process alternation - chooses one of the following options:",
                    step
                );
                for (i, child) in ast.children.iter().enumerate() {
                    match &child.kind {
                        AstKind::Literal(c) => {
                            let _ = writeln!(out, "      {}.{}. Option: '{}'", step, i + 1, c);
                        }
                        _ => {
                            let _ = writeln!(out, "      {}.{}. Option: '{}'", step, i + 1, child);
                            Self::processing_(child, step + 1, limit, out);
                        }
                    }
                }
            }
            AstKind::Concat => {
                if ast.children.is_empty() {
                    let _ = writeln!(out, "   {}. Process empty sequence - adds nothing", step);
                    return;
                }
                let _ = writeln!(
                    out,
                    "   {}. Process concatenation - combines results from each part in sequence:",
                    step
                );
                for (i, child) in ast.children.iter().enumerate() {
                    Self::processing_(child, step + i + 1, limit, out);
                }
            }
            AstKind::Repeat(min, max) => {
                let operator = match (min, max) {
                    (0, RepeatKind::Infinity) => "*".to_owned(),
                    (1, RepeatKind::Infinity) => "+".to_owned(),
                    (0, RepeatKind::Num(1)) => "?".to_owned(),
                    (n, RepeatKind::Infinity) => format!("{{{},}}", n),
                    (n, RepeatKind::Num(m)) => format!("{{{},{}}}", n, m),
                };
                let upper = match max {
                    RepeatKind::Num(m) => m.to_string(),
                    RepeatKind::Infinity => format!("{} (limited)", limit),
                };
                let _ = writeln!(
                    out,
                    "   {}. Process repetition '{}' - repeats the following pattern {} to {} times:",
                    step, operator, min, upper
                );
                for child in ast.children.iter() {
                    Self::processing_(child, step + 1, limit, out);
                }
            }
        }
    }
}
