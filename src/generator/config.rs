/// Bounds that make enumeration and counting finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Stand-in upper bound for `*`, `+` and `{n,}`, and a cap on `{n,m}`.
    pub repetition_limit: u32,
    /// Most sample strings kept at any stage of generation.
    pub max_combinations: usize,
}

impl Limits {
    pub const DEFAULT_REPETITION_LIMIT: u32 = 5;
    pub const DEFAULT_MAX_COMBINATIONS: usize = 50;

    pub fn new(repetition_limit: u32, max_combinations: usize) -> Self {
        Limits {
            repetition_limit,
            max_combinations,
        }
    }

    pub fn with_repetition_limit(self, repetition_limit: u32) -> Self {
        Limits {
            repetition_limit,
            ..self
        }
    }

    pub fn with_max_combinations(self, max_combinations: usize) -> Self {
        Limits {
            max_combinations,
            ..self
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits::new(Self::DEFAULT_REPETITION_LIMIT, Self::DEFAULT_MAX_COMBINATIONS)
    }
}
