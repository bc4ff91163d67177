/// Shape of a parsed graph, as far as the solvers are concerned.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Topology {
    /// No vertices at all.
    Empty,
    /// Connected and acyclic.
    Tree,
    /// Anything else: at least one cycle, or more than one component.
    Cyclic,
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Topology::Empty => write!(f, "Empty"),
            Topology::Tree => write!(f, "Tree"),
            Topology::Cyclic => write!(f, "Cyclic"),
        }
    }
}

/// Wrapper for petgraph's graph type. Node weights are the vertex labels from the input.
pub type LabelGraph = petgraph::graph::UnGraph<String, ()>;
