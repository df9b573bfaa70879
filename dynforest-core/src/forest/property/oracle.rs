//! Sequential Kruskal oracle for maximum spanning forest verification.
//!
//! Processes edges by descending weight and accepts an edge whenever its
//! endpoints are still in different components. Ties are broken by stream
//! position, which only matters when weights repeat.

use super::model::{ModelEdge, canonical};

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SpanningForest {
    /// Accepted edges in canonical form, sorted.
    pub edges: Vec<ModelEdge>,
    /// Sum of accepted weights.
    pub total_weight: i64,
    /// Number of components left after all acceptances.
    pub component_count: usize,
}

pub(super) fn maximum_spanning_forest(
    node_count: usize,
    edges: &[(usize, usize, i32)],
) -> SpanningForest {
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&left, &right| edges[right].2.cmp(&edges[left].2).then(left.cmp(&right)));

    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut accepted = Vec::new();
    let mut total_weight = 0_i64;
    let mut component_count = node_count;

    for index in order {
        let (a, b, weight) = edges[index];
        let left = find_root(&mut parent, a);
        let right = find_root(&mut parent, b);
        if left == right {
            continue;
        }
        parent[right] = left;
        accepted.push(canonical(a, b, weight));
        total_weight += i64::from(weight);
        component_count -= 1;
    }

    accepted.sort_unstable();
    SpanningForest {
        edges: accepted,
        total_weight,
        component_count,
    }
}

fn find_root(parent: &mut [usize], node: usize) -> usize {
    let mut current = node;
    while parent[current] != current {
        let grandparent = parent[parent[current]];
        parent[current] = grandparent;
        current = grandparent;
    }
    current
}
