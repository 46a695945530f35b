pub mod results;
pub mod timing;

/// (vertices, connections) pairs of the default benchmark sweep
pub const DEFAULT_SWEEP: [(usize, usize); 10] = [
    (10, 50),
    (100, 500),
    (1_000, 5_000),
    (10_000, 50_000),
    (10_000, 100_000),
    (50_000, 1_000_000),
    (100_000, 1_000_000),
    (1_000_000, 10_000_000),
    (2_000_000, 10_000_000),
    (20_000_000, 50_000_000),
];

/// Pairs up vertex counts with edge counts, falling back to the default sweep
/// when neither is given. Returns `None` if the two lists have different lengths.
pub fn build_sweep(
    sizes: Option<Vec<usize>>,
    connections: Option<Vec<usize>>,
    max_size: Option<usize>,
) -> Option<Vec<(usize, usize)>> {
    let sweep: Vec<(usize, usize)> = match (sizes, connections) {
        (None, None) => DEFAULT_SWEEP.to_vec(),
        (Some(sizes), Some(connections)) if sizes.len() == connections.len() => {
            sizes.into_iter().zip(connections).collect()
        }
        _ => return None,
    };

    Some(
        sweep
            .into_iter()
            .filter(|&(size, _)| max_size.map_or(true, |max| size <= max))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sweep_is_used_without_arguments() {
        let sweep = build_sweep(None, None, None).unwrap();
        assert_eq!(sweep, DEFAULT_SWEEP.to_vec());
    }

    #[test]
    fn max_size_drops_large_graphs() {
        let sweep = build_sweep(None, None, Some(10_000)).unwrap();
        assert_eq!(
            sweep,
            vec![(10, 50), (100, 500), (1_000, 5_000), (10_000, 50_000), (10_000, 100_000)]
        );
    }

    #[test]
    fn explicit_lists_are_zipped() {
        let sweep = build_sweep(Some(vec![5, 6]), Some(vec![7, 8]), None).unwrap();
        assert_eq!(sweep, vec![(5, 7), (6, 8)]);
    }

    #[test]
    fn mismatched_lists_are_rejected() {
        assert!(build_sweep(Some(vec![5, 6]), Some(vec![7]), None).is_none());
        assert!(build_sweep(Some(vec![5]), None, None).is_none());
        assert!(build_sweep(None, Some(vec![5]), None).is_none());
    }
}
