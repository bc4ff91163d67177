use crate::LabelGraph;
use petgraph::visit::NodeIndexable;

/// Iterates over every simple graph on `n` labeled vertices, one per subset of the
/// `n * (n - 1) / 2` possible edges.
pub(crate) struct GraphEnumeratorState {
    pub n: usize,
    pub mask: usize,
    pub last_mask: usize,
}

impl GraphEnumeratorState {
    pub fn new(n: usize) -> Self {
        let pairs = n * n.saturating_sub(1) / 2;
        Self {
            n,
            mask: 0,
            last_mask: 1 << pairs,
        }
    }
}

impl Iterator for GraphEnumeratorState {
    type Item = LabelGraph;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut graph = LabelGraph::new_undirected();
        for i in 0..self.n {
            graph.add_node(i.to_string());
        }

        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    graph.add_edge(graph.from_index(i), graph.from_index(j), ());
                }
                check += 1;
            }
        }

        self.mask += 1;
        Some(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_all_graphs() {
        assert_eq!(GraphEnumeratorState::new(1).count(), 1);
        assert_eq!(GraphEnumeratorState::new(3).count(), 8);
        assert_eq!(GraphEnumeratorState::new(4).count(), 64);
    }
}
