use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Mul};

use crate::parser::{Ast, RepeatKind, Visitor};

/// Exact number of accepted strings, saturating at [`Count::Overflow`] once
/// the value no longer fits in a `u128`.
///
/// `Finite` sorts below `Overflow`, so counts compare the way the numbers do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Count {
    Finite(u128),
    Overflow,
}

impl Count {
    pub const ZERO: Count = Count::Finite(0);
    pub const ONE: Count = Count::Finite(1);

    pub fn finite(self) -> Option<u128> {
        match self {
            Count::Finite(n) => Some(n),
            Count::Overflow => None,
        }
    }

    pub fn is_overflow(self) -> bool {
        self == Count::Overflow
    }

    pub fn pow(self, mut exp: u32) -> Count {
        let mut base = self;
        let mut acc = Count::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base;
            }
            exp >>= 1;
            if exp > 0 {
                base = base * base;
            }
        }
        acc
    }
}

impl Add for Count {
    type Output = Count;

    fn add(self, rhs: Count) -> Count {
        match (self, rhs) {
            (Count::Finite(a), Count::Finite(b)) => a.checked_add(b).map_or(Count::Overflow, Count::Finite),
            _ => Count::Overflow,
        }
    }
}

impl Mul for Count {
    type Output = Count;

    fn mul(self, rhs: Count) -> Count {
        match (self, rhs) {
            // nothing times anything is still nothing
            (Count::Finite(0), _) | (_, Count::Finite(0)) => Count::ZERO,
            (Count::Finite(a), Count::Finite(b)) => a.checked_mul(b).map_or(Count::Overflow, Count::Finite),
            _ => Count::Overflow,
        }
    }
}

impl Sum for Count {
    fn sum<I: Iterator<Item = Count>>(iter: I) -> Count {
        iter.fold(Count::ZERO, Add::add)
    }
}

impl Product for Count {
    fn product<I: Iterator<Item = Count>>(iter: I) -> Count {
        iter.fold(Count::ONE, Mul::mul)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Finite(n) => write!(f, "{}", n),
            Count::Overflow => write!(f, "more than {}", u128::MAX),
        }
    }
}

/// `Σ base^k` for `k` in `min..=upper`.
pub(crate) fn repeat_total(base: Count, min: u32, upper: u32) -> Count {
    if min > upper {
        return Count::ZERO;
    }
    match base {
        Count::Finite(0) => {
            if min == 0 {
                Count::ONE
            } else {
                Count::ZERO
            }
        }
        Count::Finite(1) => Count::Finite(u128::from(upper - min) + 1),
        _ => {
            let mut total = Count::ZERO;
            let mut power = base.pow(min);
            for _ in min..=upper {
                total = total + power;
                if total.is_overflow() {
                    break;
                }
                power = power * base;
            }
            total
        }
    }
}

pub(crate) struct Counter {
    limit: u32,
}

impl Counter {
    pub fn new(limit: u32) -> Self {
        Counter { limit }
    }

    pub fn count(&mut self, ast: &Ast) -> Count {
        ast.accept(self)
    }
}

impl Visitor for Counter {
    type Output = Count;

    fn visit_literal(&mut self, _: char) -> Count {
        Count::ONE
    }

    fn visit_union(&mut self, children: &[Ast]) -> Count {
        children.iter().map(|child| child.accept(self)).sum()
    }

    fn visit_concat(&mut self, children: &[Ast]) -> Count {
        children.iter().map(|child| child.accept(self)).product()
    }

    fn visit_repeat(&mut self, child: &Ast, min: u32, max: RepeatKind) -> Count {
        let upper = max.upper_bound(self.limit);
        if min > upper {
            return Count::ZERO;
        }
        let base = child.accept(self);
        repeat_total(base, min, upper)
    }
}
