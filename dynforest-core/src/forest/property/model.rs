//! Naive edge-list model of the forest used as a reference in property tests.
//!
//! The model stores undirected edges in canonical `(min, max, weight)` form
//! and answers every query by brute-force search, so it shares no code with
//! the arena implementation.

use std::collections::VecDeque;

/// Undirected weighted edge in canonical form (`low <= high`).
pub(super) type ModelEdge = (usize, usize, i32);

#[derive(Clone, Debug)]
pub(super) struct ModelForest {
    node_count: usize,
    edges: Vec<ModelEdge>,
}

/// What the model expects an insertion to do.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum ModelInsert {
    Merged,
    Replaced(ModelEdge),
    Unchanged,
}

pub(super) fn canonical(a: usize, b: usize, weight: i32) -> ModelEdge {
    if a <= b { (a, b, weight) } else { (b, a, weight) }
}

impl ModelForest {
    pub(super) fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
        }
    }

    pub(super) fn sorted_edges(&self) -> Vec<ModelEdge> {
        let mut edges = self.edges.clone();
        edges.sort_unstable();
        edges
    }

    /// Applies the maximum spanning forest insertion policy.
    ///
    /// When `a` and `b` are connected, walks the path from `b` towards `a` and
    /// selects the first edge of strictly minimal weight, matching the
    /// tie-break of the arena implementation.
    pub(super) fn insert(&mut self, a: usize, b: usize, weight: i32) -> ModelInsert {
        if a == b {
            return ModelInsert::Unchanged;
        }
        let Some(path) = self.path(b, a) else {
            self.edges.push(canonical(a, b, weight));
            return ModelInsert::Merged;
        };

        let mut lightest: Option<ModelEdge> = None;
        for pair in path.windows(2) {
            let [from, to] = [pair[0], pair[1]];
            let Some(edge) = self.find_edge(from, to) else {
                continue;
            };
            if lightest.is_none_or(|current| edge.2 < current.2) {
                lightest = Some(edge);
            }
        }

        match lightest {
            Some(edge) if weight > edge.2 => {
                self.edges.retain(|candidate| *candidate != edge);
                self.edges.push(canonical(a, b, weight));
                ModelInsert::Replaced(edge)
            }
            _ => ModelInsert::Unchanged,
        }
    }

    /// Removes the edge between `a` and `b`, returning whether one existed.
    pub(super) fn remove(&mut self, a: usize, b: usize) -> bool {
        match self.find_edge(a, b) {
            Some(edge) => {
                self.edges.retain(|candidate| *candidate != edge);
                true
            }
            None => false,
        }
    }

    pub(super) fn component_count(&self, subset: &[usize]) -> usize {
        let labels = self.component_labels();
        let mut seen: Vec<usize> = subset.iter().map(|&node| labels[node]).collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }

    pub(super) fn connected(&self, a: usize, b: usize) -> bool {
        self.path(a, b).is_some()
    }

    fn find_edge(&self, a: usize, b: usize) -> Option<ModelEdge> {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        self.edges
            .iter()
            .copied()
            .find(|&(left, right, _)| left == low && right == high)
    }

    fn neighbours(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges.iter().filter_map(move |&(left, right, _)| {
            if left == node {
                Some(right)
            } else if right == node {
                Some(left)
            } else {
                None
            }
        })
    }

    /// Breadth-first path from `start` to `goal`, inclusive of both ends.
    fn path(&self, start: usize, goal: usize) -> Option<Vec<usize>> {
        let mut previous: Vec<Option<usize>> = vec![None; self.node_count];
        let mut visited = vec![false; self.node_count];
        let mut queue = VecDeque::from([start]);
        visited[start] = true;

        while let Some(node) = queue.pop_front() {
            if node == goal {
                let mut path = vec![goal];
                let mut cursor = goal;
                while let Some(prior) = previous[cursor] {
                    path.push(prior);
                    cursor = prior;
                }
                path.reverse();
                return Some(path);
            }
            for next in self.neighbours(node) {
                if !visited[next] {
                    visited[next] = true;
                    previous[next] = Some(node);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    fn component_labels(&self) -> Vec<usize> {
        let mut labels = vec![usize::MAX; self.node_count];
        for start in 0..self.node_count {
            if labels[start] != usize::MAX {
                continue;
            }
            let mut queue = VecDeque::from([start]);
            labels[start] = start;
            while let Some(node) = queue.pop_front() {
                for next in self.neighbours(node) {
                    if labels[next] == usize::MAX {
                        labels[next] = start;
                        queue.push_back(next);
                    }
                }
            }
        }
        labels
    }
}
