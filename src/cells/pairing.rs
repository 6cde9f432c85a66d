use serde::Serialize;

/// Two adjacent boundary positions delimiting one cell along one axis.
/// `start` is inclusive, `end` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BoundaryPair {
    pub start: usize,
    pub end: usize,
}

impl BoundaryPair {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `(b[i], b[i + 1])` for every adjacent pair, in order. Fewer than two
/// boundaries yield no pairs.
pub fn consecutive_pairs(boundaries: &[usize]) -> Vec<BoundaryPair> {
    boundaries
        .windows(2)
        .map(|w| BoundaryPair::new(w[0], w[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_adjacent_not_combinations() {
        let pairs = consecutive_pairs(&[1, 4, 9, 12]);
        assert_eq!(
            pairs,
            vec![
                BoundaryPair::new(1, 4),
                BoundaryPair::new(4, 9),
                BoundaryPair::new(9, 12)
            ]
        );
        assert!(pairs.iter().all(|p| p.start < p.end));
    }

    #[test]
    fn pair_count_is_len_minus_one() {
        for n in 0..6usize {
            let b: Vec<usize> = (0..n).map(|i| i * 3).collect();
            assert_eq!(consecutive_pairs(&b).len(), n.saturating_sub(1));
        }
    }

    #[test]
    fn repeated_boundary_gives_empty_extent() {
        let pairs = consecutive_pairs(&[2, 2]);
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].is_empty());
    }
}
