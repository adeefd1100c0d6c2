/// Returns every `k`-element combination of `sequence`.
///
/// Elements keep their relative order inside each combination. The result is
/// built by splitting on the last element: combinations that leave it out come
/// first, followed by the combinations that end with it.
pub fn choose<T: Clone>(sequence: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 {
        return vec![Vec::new()];
    }

    let Some((last, rest)) = sequence.split_last() else {
        return Vec::new();
    };

    let mut combinations = choose(rest, k);
    combinations.extend(choose(rest, k - 1).into_iter().map(|mut combination| {
        combination.push(last.clone());
        combination
    }));
    combinations
}

/// Number of `k`-element combinations of `n` elements.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }

    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_has_one_empty_combination() {
        let empty: [u32; 0] = [];
        assert_eq!(choose(&empty, 0), vec![Vec::<u32>::new()]);
        assert!(choose(&empty, 1).is_empty());
        assert!(choose(&empty, 3).is_empty());
    }

    #[test]
    fn zero_sized_combination_of_non_empty_sequence() {
        assert_eq!(choose(&[4, 5, 6], 0), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn pairs_preserve_element_order() {
        let pairs = choose(&[3, 1, 2], 2);
        assert_eq!(pairs, vec![vec![3, 1], vec![3, 2], vec![1, 2]]);
    }

    #[test]
    fn oversized_k_yields_nothing() {
        assert!(choose(&[1, 2], 3).is_empty());
    }

    #[test]
    fn counts_match_binomial_coefficients() {
        let sequence: Vec<u32> = (0..8).collect();
        for k in 0..=9 {
            assert_eq!(choose(&sequence, k).len() as u64, binomial(8, k as u64));
        }
    }

    #[test]
    fn binomial_edges() {
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(12, 2), 66);
        assert_eq!(binomial(12, 6), 924);
        assert_eq!(binomial(3, 5), 0);
    }
}
