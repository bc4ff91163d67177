//! Solver settings and the defaults of the interactive shell.

/// Prompt printed before every line the shell reads.
pub const DEFAULT_PROMPT: &str = "Edges: ";

/// Word that ends the shell, compared case-insensitively.
pub const DEFAULT_EXIT_KEYWORD: &str = "exit";

/// Prefix of every result line printed by the shell.
pub const RESULT_LABEL: &str = "MIS size:";

/// What the cycle solver does with a graph that is not exactly one cycle.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum CyclePolicy {
    /// Use the length of the first basis cycle no matter what else is in the graph.
    /// The answer is only exact for a pure cycle.
    #[default]
    Lenient,
    /// Refuse anything that is not a single simple cycle.
    Strict,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct SolverConfig {
    pub cycle_policy: CyclePolicy,
}

impl SolverConfig {
    pub fn strict() -> Self {
        Self {
            cycle_policy: CyclePolicy::Strict,
        }
    }
}
