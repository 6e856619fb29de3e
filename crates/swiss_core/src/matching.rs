//! Maximum-cardinality matching on general graphs.
//!
//! Edmonds' blossom algorithm: grow an alternating tree from every free
//! vertex, contract odd cycles into their base as they appear, and flip the
//! first augmenting path found. O(V³) on an adjacency matrix.

use std::collections::VecDeque;

const NIL: usize = usize::MAX;

/// Compute a maximum matching of the graph given by `adjacency`.
///
/// `adjacency[a][b]` marks an edge between `a` and `b`; the matrix is read
/// as undirected and the diagonal is ignored. Returns each vertex's mate.
pub fn maximum_matching(adjacency: &[Vec<bool>]) -> Vec<Option<usize>> {
    let mut search = BlossomSearch::new(adjacency);
    for root in 0..adjacency.len() {
        if search.mate[root] == NIL {
            search.augment_from(root);
        }
    }
    search
        .mate
        .iter()
        .map(|&m| if m == NIL { None } else { Some(m) })
        .collect()
}

/// Number of edges in a maximum matching.
pub fn matching_size(adjacency: &[Vec<bool>]) -> usize {
    maximum_matching(adjacency).iter().flatten().count() / 2
}

/// Find a perfect matching of the subgraph induced by `vertices`.
///
/// Returned pairs use the original vertex numbering, lower position in
/// `vertices` first. `None` when no perfect matching exists.
pub fn perfect_matching(adjacency: &[Vec<bool>], vertices: &[usize]) -> Option<Vec<(usize, usize)>> {
    if vertices.len() % 2 == 1 {
        return None;
    }

    let induced: Vec<Vec<bool>> = vertices
        .iter()
        .map(|&a| vertices.iter().map(|&b| a != b && adjacency[a][b]).collect())
        .collect();

    let mates = maximum_matching(&induced);
    let mut pairs = Vec::with_capacity(vertices.len() / 2);
    for (i, mate) in mates.iter().enumerate() {
        match *mate {
            Some(j) if i < j => pairs.push((vertices[i], vertices[j])),
            Some(_) => {}
            None => return None,
        }
    }
    Some(pairs)
}

struct BlossomSearch {
    neighbors: Vec<Vec<usize>>,
    mate: Vec<usize>,
    /// Alternating-tree parent of odd vertices
    parent: Vec<usize>,
    /// Base vertex of the blossom each vertex currently belongs to
    base: Vec<usize>,
    in_tree: Vec<bool>,
    in_blossom: Vec<bool>,
    queue: VecDeque<usize>,
}

impl BlossomSearch {
    fn new(adjacency: &[Vec<bool>]) -> Self {
        let n = adjacency.len();
        let neighbors = (0..n)
            .map(|a| {
                (0..n)
                    .filter(|&b| a != b && (adjacency[a][b] || adjacency[b][a]))
                    .collect()
            })
            .collect();

        Self {
            neighbors,
            mate: vec![NIL; n],
            parent: vec![NIL; n],
            base: (0..n).collect(),
            in_tree: vec![false; n],
            in_blossom: vec![false; n],
            queue: VecDeque::with_capacity(n),
        }
    }

    fn augment_from(&mut self, root: usize) -> bool {
        match self.find_augmenting_path(root) {
            Some(end) => {
                self.flip_path(end);
                true
            }
            None => false,
        }
    }

    /// Swap matched and unmatched edges along the path ending at `v`.
    fn flip_path(&mut self, mut v: usize) {
        while v != NIL {
            let pv = self.parent[v];
            let next = self.mate[pv];
            self.mate[v] = pv;
            self.mate[pv] = v;
            v = next;
        }
    }

    fn find_augmenting_path(&mut self, root: usize) -> Option<usize> {
        let n = self.mate.len();
        self.in_tree.fill(false);
        self.parent.fill(NIL);
        for (i, b) in self.base.iter_mut().enumerate() {
            *b = i;
        }
        self.queue.clear();

        self.in_tree[root] = true;
        self.queue.push_back(root);

        while let Some(v) = self.queue.pop_front() {
            for k in 0..self.neighbors[v].len() {
                let to = self.neighbors[v][k];
                if self.base[v] == self.base[to] || self.mate[v] == to {
                    continue;
                }

                let closes_odd_cycle =
                    to == root || (self.mate[to] != NIL && self.parent[self.mate[to]] != NIL);

                if closes_odd_cycle {
                    let ancestor = self.common_ancestor(v, to);
                    self.in_blossom.fill(false);
                    self.mark_path(v, ancestor, to);
                    self.mark_path(to, ancestor, v);
                    for i in 0..n {
                        if self.in_blossom[self.base[i]] {
                            self.base[i] = ancestor;
                            if !self.in_tree[i] {
                                self.in_tree[i] = true;
                                self.queue.push_back(i);
                            }
                        }
                    }
                } else if self.parent[to] == NIL {
                    self.parent[to] = v;
                    if self.mate[to] == NIL {
                        return Some(to);
                    }
                    let next = self.mate[to];
                    self.in_tree[next] = true;
                    self.queue.push_back(next);
                }
            }
        }

        None
    }

    fn common_ancestor(&self, mut a: usize, mut b: usize) -> usize {
        let mut seen = vec![false; self.mate.len()];
        loop {
            a = self.base[a];
            seen[a] = true;
            if self.mate[a] == NIL {
                break;
            }
            a = self.parent[self.mate[a]];
        }
        loop {
            b = self.base[b];
            if seen[b] {
                return b;
            }
            b = self.parent[self.mate[b]];
        }
    }

    fn mark_path(&mut self, mut v: usize, ancestor: usize, mut child: usize) {
        while self.base[v] != ancestor {
            let m = self.mate[v];
            self.in_blossom[self.base[v]] = true;
            self.in_blossom[self.base[m]] = true;
            self.parent[v] = child;
            child = m;
            v = self.parent[m];
        }
    }
}

#[cfg(test)]
#[path = "matching_tests.rs"]
mod matching_tests;
