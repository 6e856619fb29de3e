use super::*;

fn graph(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<bool>> {
    let mut adjacency = vec![vec![false; n]; n];
    for &(a, b) in edges {
        adjacency[a][b] = true;
        adjacency[b][a] = true;
    }
    adjacency
}

fn assert_valid(adjacency: &[Vec<bool>], mates: &[Option<usize>]) {
    for (v, mate) in mates.iter().enumerate() {
        if let Some(m) = *mate {
            assert_ne!(v, m, "vertex {v} matched to itself");
            assert!(adjacency[v][m], "matched non-edge {v}-{m}");
            assert_eq!(mates[m], Some(v), "matching is not symmetric at {v}");
        }
    }
}

/// Exhaustive maximum matching for cross-checking small graphs.
fn brute_force_size(adjacency: &[Vec<bool>], used: &mut [bool], from: usize) -> usize {
    let n = adjacency.len();
    let Some(v) = (from..n).find(|&v| !used[v]) else {
        return 0;
    };
    used[v] = true;
    let mut best = brute_force_size(adjacency, used, v + 1);
    for u in (v + 1)..n {
        if !used[u] && adjacency[v][u] {
            used[u] = true;
            best = best.max(1 + brute_force_size(adjacency, used, v + 1));
            used[u] = false;
        }
    }
    used[v] = false;
    best
}

#[test]
fn test_empty_graph() {
    assert!(maximum_matching(&[]).is_empty());
    assert_eq!(perfect_matching(&[], &[]), Some(vec![]));
}

#[test]
fn test_triangle_matches_one_edge() {
    let g = graph(3, &[(0, 1), (1, 2), (0, 2)]);
    assert_eq!(matching_size(&g), 1);
    assert_valid(&g, &maximum_matching(&g));
}

#[test]
fn test_star_matches_one_edge() {
    let g = graph(4, &[(0, 1), (0, 2), (0, 3)]);
    assert_eq!(matching_size(&g), 1);
    assert!(perfect_matching(&g, &[0, 1, 2, 3]).is_none());
}

#[test]
fn test_path_is_perfect() {
    let g = graph(4, &[(0, 1), (1, 2), (2, 3)]);
    let pairs = perfect_matching(&g, &[0, 1, 2, 3]).unwrap();
    assert_eq!(pairs, vec![(0, 1), (2, 3)]);
}

#[test]
fn test_blossom_contraction() {
    // Odd cycle 0-1-2-3-4 with tails on 0 and 2. Greedy search from the
    // cycle misses the perfect matching without contracting the blossom.
    let g = graph(
        8,
        &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 5), (2, 6), (6, 7)],
    );
    let mates = maximum_matching(&g);
    assert_valid(&g, &mates);
    assert_eq!(mates.iter().flatten().count(), 8);
}

#[test]
fn test_petersen_graph_is_perfect() {
    let mut edges = Vec::new();
    for i in 0..5 {
        edges.push((i, (i + 1) % 5));
        edges.push((i, i + 5));
        edges.push((5 + i, 5 + (i + 2) % 5));
    }
    let g = graph(10, &edges);
    let pairs = perfect_matching(&g, &(0..10).collect::<Vec<_>>()).unwrap();
    assert_eq!(pairs.len(), 5);
}

#[test]
fn test_induced_subgraph_uses_original_numbering() {
    let g = graph(6, &[(1, 4), (3, 5), (1, 3)]);
    let pairs = perfect_matching(&g, &[1, 3, 4, 5]).unwrap();
    assert_eq!(pairs, vec![(1, 4), (3, 5)]);
    assert!(perfect_matching(&g, &[1, 3, 4]).is_none());
}

#[test]
fn test_agrees_with_brute_force_on_all_six_vertex_graphs() {
    let n = 6;
    let slots: Vec<(usize, usize)> = (0..n)
        .flat_map(|a| ((a + 1)..n).map(move |b| (a, b)))
        .collect();

    for mask in 0u32..(1 << slots.len()) {
        let edges: Vec<(usize, usize)> = slots
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, &edge)| edge)
            .collect();
        let g = graph(n, &edges);
        let mates = maximum_matching(&g);
        assert_valid(&g, &mates);

        let expected = brute_force_size(&g, &mut vec![false; n], 0);
        assert_eq!(
            mates.iter().flatten().count() / 2,
            expected,
            "wrong matching size for edge mask {mask:#x}"
        );
    }
}
