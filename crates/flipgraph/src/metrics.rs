//! BFS metrics on a finished flip graph, plus flip-distance bounds.
//!
//! Graphs are plain adjacency lists (`&[Vec<usize>]`), so these functions work
//! on `FlipGraph::adjacency()` as well as on any hand-built graph.
//!
//! Center bounds
//! - Routing every pair of classes through one center `c` bounds the flip
//!   distance by `2 * ecc(c)`, or `2 * ecc(c) - 1` when only one class sits at
//!   the maximal distance (two distinct classes cannot both be that one).
//! - With two centers, a pair `(a, b)` may use whichever center is cheaper.

use std::collections::VecDeque;

/// Multi-source BFS distances; `None` for vertices not reachable from any source.
pub fn distances(graph: &[Vec<usize>], sources: &[usize]) -> Vec<Option<usize>> {
    let mut dist = vec![None; graph.len()];
    let mut queue = VecDeque::new();
    for &s in sources {
        if dist[s].is_none() {
            dist[s] = Some(0);
            queue.push_back(s);
        }
    }
    while let Some(u) = queue.pop_front() {
        let d = dist[u].unwrap_or(0);
        for &w in &graph[u] {
            if dist[w].is_none() {
                dist[w] = Some(d + 1);
                queue.push_back(w);
            }
        }
    }
    dist
}

/// Largest distance from `v` to any vertex reachable from it.
pub fn eccentricity(graph: &[Vec<usize>], v: usize) -> usize {
    distances(graph, &[v]).into_iter().flatten().max().unwrap_or(0)
}

/// Maximum eccentricity; `0` for empty and single-vertex graphs. O(V·(V+E)).
pub fn diameter(graph: &[Vec<usize>]) -> usize {
    (0..graph.len())
        .map(|v| eccentricity(graph, v))
        .max()
        .unwrap_or(0)
}

/// Counts of vertices at each distance from the nearest source.
pub fn distance_histogram(graph: &[Vec<usize>], sources: &[usize]) -> Vec<usize> {
    histogram_from_distances(&distances(graph, sources))
}

/// Bucket distances; unreachable entries are not counted.
pub fn histogram_from_distances(dist: &[Option<usize>]) -> Vec<usize> {
    let max = dist.iter().flatten().copied().max();
    let mut hist = vec![0; max.map_or(0, |m| m + 1)];
    for d in dist.iter().flatten() {
        hist[*d] += 1;
    }
    hist
}

/// Flip-distance bound from a single center with the given distance histogram.
pub fn center_bound(histogram: &[usize]) -> usize {
    match histogram.len() {
        0 | 1 => 0,
        len => {
            let d = len - 1;
            if histogram[d] == 1 {
                2 * d - 1
            } else {
                2 * d
            }
        }
    }
}

/// For every vertex used as center, its bound; returns counts indexed by bound.
pub fn center_bound_counts(graph: &[Vec<usize>]) -> Vec<usize> {
    let mut counts = Vec::new();
    for v in 0..graph.len() {
        let bound = center_bound(&distance_histogram(graph, &[v]));
        if counts.len() <= bound {
            counts.resize(bound + 1, 0);
        }
        counts[bound] += 1;
    }
    counts
}

/// All-pairs distance matrix (`dist[a][b]`); unreachable pairs are `usize::MAX`.
pub fn distance_matrix(graph: &[Vec<usize>]) -> Vec<Vec<usize>> {
    (0..graph.len())
        .map(|v| {
            distances(graph, &[v])
                .into_iter()
                .map(|d| d.unwrap_or(usize::MAX))
                .collect()
        })
        .collect()
}

/// Worst pair cost when every pair `(a, b)`, `a < b`, may route through
/// either `c1` or `c2`.
pub fn two_center_bound(dist: &[Vec<usize>], c1: usize, c2: usize) -> usize {
    let size = dist.len();
    let mut bound = 0;
    for a in 0..size {
        for b in a + 1..size {
            let via1 = dist[a][c1].saturating_add(dist[b][c1]);
            let via2 = dist[a][c2].saturating_add(dist[b][c2]);
            bound = bound.max(via1.min(via2));
        }
    }
    bound
}

/// Counts of [`two_center_bound`] values over all unordered center pairs,
/// `c1 == c2` included. O(V^4); intended for small graphs.
pub fn two_center_bound_counts(graph: &[Vec<usize>]) -> Vec<usize> {
    let dist = distance_matrix(graph);
    let mut counts = Vec::new();
    for c1 in 0..graph.len() {
        for c2 in c1..graph.len() {
            let bound = two_center_bound(&dist, c1, c2);
            if counts.len() <= bound {
                counts.resize(bound + 1, 0);
            }
            counts[bound] += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(len: usize) -> Vec<Vec<usize>> {
        (0..len)
            .map(|i| {
                let mut out = Vec::new();
                if i > 0 {
                    out.push(i - 1);
                }
                if i + 1 < len {
                    out.push(i + 1);
                }
                out
            })
            .collect()
    }

    fn cycle(len: usize) -> Vec<Vec<usize>> {
        (0..len)
            .map(|i| vec![(i + len - 1) % len, (i + 1) % len])
            .collect()
    }

    #[test]
    fn path_eccentricity_and_diameter() {
        let g = path(5);
        assert_eq!(eccentricity(&g, 0), 4);
        assert_eq!(eccentricity(&g, 2), 2);
        assert_eq!(diameter(&g), 4);
    }

    #[test]
    fn trivial_graphs_have_zero_diameter() {
        assert_eq!(diameter(&[]), 0);
        assert_eq!(diameter(&[vec![]]), 0);
        assert_eq!(diameter(&[vec![1], vec![0]]), 1);
    }

    #[test]
    fn multi_source_histogram() {
        let g = path(7);
        assert_eq!(distance_histogram(&g, &[0]), vec![1, 1, 1, 1, 1, 1, 1]);
        // Sources at both ends meet in the middle.
        assert_eq!(distance_histogram(&g, &[0, 6]), vec![2, 2, 2, 1]);
        // Duplicate sources count once.
        assert_eq!(distance_histogram(&g, &[3, 3]), vec![1, 2, 2, 2]);
    }

    #[test]
    fn unreachable_vertices_are_not_counted() {
        let g = vec![vec![1], vec![0], vec![]];
        let dist = distances(&g, &[0]);
        assert_eq!(dist, vec![Some(0), Some(1), None]);
        assert_eq!(histogram_from_distances(&dist), vec![1, 1]);
    }

    #[test]
    fn center_bound_uses_unique_farthest_vertex() {
        assert_eq!(center_bound(&[1]), 0);
        // Path of 3 from its middle: two vertices at distance 1.
        assert_eq!(center_bound(&[1, 2]), 2);
        // Path of 3 from an end: one vertex at distance 2.
        assert_eq!(center_bound(&[1, 1, 1]), 3);
    }

    #[test]
    fn center_bound_counts_on_path() {
        // Ends give 2*2-1 = 3, middle gives 2.
        assert_eq!(center_bound_counts(&path(3)), vec![0, 0, 1, 2]);
    }

    #[test]
    fn two_centers_never_worse_than_one() {
        let g = cycle(8);
        let dist = distance_matrix(&g);
        for c1 in 0..8 {
            let single = two_center_bound(&dist, c1, c1);
            for c2 in 0..8 {
                assert!(two_center_bound(&dist, c1, c2) <= single);
            }
        }
        let counts = two_center_bound_counts(&g);
        assert_eq!(counts.iter().sum::<usize>(), 8 * 9 / 2);
    }
}
