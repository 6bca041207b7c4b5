use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast {
    pub kind: AstKind,
    pub children: Vec<Ast>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstKind {
    Literal(char),           // a
    Union,                   // a|b, always two children
    Concat,                  // ab, zero or more children
    Repeat(u32, RepeatKind), // a{n,m}, exactly one child
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatKind {
    Num(u32),
    Infinity,
}

impl RepeatKind {
    /// Upper repeat count once unbounded repetition is capped at `limit`.
    pub fn upper_bound(self, limit: u32) -> u32 {
        match self {
            RepeatKind::Num(max) => max.min(limit),
            RepeatKind::Infinity => limit,
        }
    }
}

impl Ast {
    pub fn literal(c: char) -> Ast {
        Ast {
            kind: AstKind::Literal(c),
            children: vec![],
        }
    }

    pub fn union(lhs: Ast, rhs: Ast) -> Ast {
        Ast {
            kind: AstKind::Union,
            children: vec![lhs, rhs],
        }
    }

    pub fn concat(children: Vec<Ast>) -> Ast {
        Ast {
            kind: AstKind::Concat,
            children,
        }
    }

    pub fn repeat(child: Ast, min: u32, max: RepeatKind) -> Ast {
        Ast {
            kind: AstKind::Repeat(min, max),
            children: vec![child],
        }
    }

    pub fn min(&self) -> Option<u32> {
        match self.kind {
            AstKind::Repeat(min, _) => Some(min),
            _ => None,
        }
    }

    pub fn max(&self) -> Option<RepeatKind> {
        match self.kind {
            AstKind::Repeat(_, max) => Some(max),
            _ => None,
        }
    }

    /// Dispatches on the node kind. Every tree walk in the crate goes through here.
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match &self.kind {
            AstKind::Literal(c) => visitor.visit_literal(*c),
            AstKind::Union => visitor.visit_union(&self.children),
            AstKind::Concat => visitor.visit_concat(&self.children),
            AstKind::Repeat(min, max) => match self.children.first() {
                Some(child) => visitor.visit_repeat(child, *min, *max),
                // a hand-built repeat without an operand repeats the empty pattern
                None => visitor.visit_repeat(&Ast::concat(vec![]), *min, *max),
            },
        }
    }

    fn is_atomic(&self) -> bool {
        match self.kind {
            AstKind::Literal(c) => !is_quantifier(c),
            AstKind::Concat => self.children.len() == 1 && self.children[0].is_atomic(),
            _ => false,
        }
    }
}

// characters that would read as a quantifier right after an atom
fn is_quantifier(c: char) -> bool {
    matches!(c, '+' | '*' | '?' | '{')
}

pub trait Visitor {
    type Output;

    fn visit_literal(&mut self, c: char) -> Self::Output;
    fn visit_union(&mut self, children: &[Ast]) -> Self::Output;
    fn visit_concat(&mut self, children: &[Ast]) -> Self::Output;
    fn visit_repeat(&mut self, child: &Ast, min: u32, max: RepeatKind) -> Self::Output;
}

// Renders the tree back into pattern syntax.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AstKind::Literal(c) => write!(f, "{}", c),
            AstKind::Union => {
                for (i, child) in self.children.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
            AstKind::Concat => {
                for (i, child) in self.children.iter().enumerate() {
                    match child.kind {
                        AstKind::Union | AstKind::Concat => write!(f, "({})", child)?,
                        AstKind::Literal(c) if i > 0 && is_quantifier(c) => write!(f, "({})", child)?,
                        _ => write!(f, "{}", child)?,
                    }
                }
                Ok(())
            }
            AstKind::Repeat(min, max) => {
                match self.children.first() {
                    Some(child) if child.is_atomic() => write!(f, "{}", child)?,
                    Some(child) => write!(f, "({})", child)?,
                    None => f.write_str("()")?,
                }
                match (min, max) {
                    (0, RepeatKind::Num(1)) => f.write_str("?"),
                    (0, RepeatKind::Infinity) => f.write_str("*"),
                    (1, RepeatKind::Infinity) => f.write_str("+"),
                    (n, RepeatKind::Infinity) => write!(f, "{{{},}}", n),
                    (n, RepeatKind::Num(m)) if n == m => write!(f, "{{{}}}", n),
                    (n, RepeatKind::Num(m)) => write!(f, "{{{},{}}}", n, m),
                }
            }
        }
    }
}
