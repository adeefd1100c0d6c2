use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{choose, pearson, PcSetError, PitchClassSet, Result};

/// Huron's consonance weights per interval class, m2/M7 through A4/d5.
///
/// Huron, "Interval-Class Content in Equally Tempered Pitch-Class Sets:
/// Common Scales Exhibit Optimum Tonal Consonance", Music Perception 11(3),
/// 1994.
pub const HURON_WEIGHTS: [f64; 6] = [-1.428, -0.582, 0.594, 0.386, 1.240, -0.453];

/// Huron's aggregate dyadic consonance for a mod-12 set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HuronConsonance {
    /// Dot product of the interval vector with [`HURON_WEIGHTS`].
    pub aggregate: f64,
    /// Pearson correlation between the interval vector and the weights. `NaN`
    /// when the interval vector is constant (e.g. the empty set).
    pub correlation: f64,
}

impl PitchClassSet {
    /// Counts of every interval `1..base` between ordered pairs, taken as
    /// `(later - earlier) mod base` in the current pitch order.
    pub fn full_interval_vector(&self) -> Vec<u32> {
        let modulus = i64::from(self.base());
        let mut counts = vec![0u32; self.base() as usize - 1];

        for pair in choose(self.pitches(), 2) {
            let interval = (i64::from(pair[1]) - i64::from(pair[0])).rem_euclid(modulus);
            counts[interval as usize - 1] += 1;
        }
        counts
    }

    /// Interval-class vector: the full vector with interval `k` and `base - k`
    /// folded together. Six entries modulo 12.
    pub fn interval_vector(&self) -> Vec<u32> {
        let mut counts = self.full_interval_vector();
        let folds = (self.base() as usize - 1) / 2;

        for class in 0..folds {
            if let Some(complementary) = counts.pop() {
                counts[class] += complementary;
            }
        }
        counts
    }

    /// Morris's invariance vector for multiplier `m`.
    ///
    /// For each of the eight operator families `T`, `TI`, `TM`, `TMI` and the
    /// same four applied to the complement, counts the transpositions that map
    /// the set into itself (their intersection with the set is the whole set).
    pub fn invariance_vector(&self, m: i64) -> [usize; 8] {
        let complement = self.complement();
        let families = [
            self.clone(),
            self.invert(0),
            self.multiply(m),
            self.invert(0).multiply(m),
            complement.clone(),
            complement.invert(0),
            complement.multiply(m),
            complement.invert(0).multiply(m),
        ];

        families.map(|family| {
            family
                .transpositions()
                .iter()
                .filter(|transposition| (self & *transposition).pitches() == self.pitches())
                .count()
        })
    }

    /// Huron's aggregate dyadic consonance. Only defined modulo 12.
    pub fn huron(&self) -> Result<HuronConsonance> {
        if self.base() != 12 {
            return Err(PcSetError::domain(format!(
                "huron consonance only makes sense for mod 12 sets, got mod {}",
                self.base()
            )));
        }

        let vector = self.interval_vector();
        let aggregate: f64 = vector
            .iter()
            .zip(HURON_WEIGHTS)
            .map(|(&count, weight)| f64::from(count) * weight)
            .sum();
        let correlation = pearson(vector.as_slice(), &HURON_WEIGHTS[..])?;

        Ok(HuronConsonance {
            aggregate,
            correlation,
        })
    }

    /// Balzano's vector of relations: row `i` lists the intervals spanned by
    /// `0..len` scale steps starting from degree `i`, in current pitch order.
    pub fn vector_of_relations(&self) -> Vec<Vec<u32>> {
        let pitches = self.pitches();
        let len = pitches.len();
        let modulus = i64::from(self.base());

        (0..len)
            .map(|i| {
                (0..len)
                    .map(|j| {
                        let span = i64::from(pitches[(i + j) % len]) - i64::from(pitches[i]);
                        span.rem_euclid(modulus) as u32
                    })
                    .collect()
            })
            .collect()
    }

    /// Balzano uniqueness: no two scale degrees share the same row of
    /// relations.
    pub fn is_unique(&self) -> bool {
        let relations = self.vector_of_relations();
        let distinct: HashSet<&Vec<u32>> = relations.iter().collect();
        distinct.len() == relations.len()
    }

    /// Balzano scalestep-semitone coherence: spanning fewer steps never spans
    /// a larger interval. A span of exactly a tritone may equal a longer span.
    pub fn is_coherent(&self) -> bool {
        self.coherence(true)
    }

    /// Coherence without the tritone allowance.
    pub fn is_strictly_coherent(&self) -> bool {
        self.coherence(false)
    }

    fn coherence(&self, allow_tritone: bool) -> bool {
        let v = self.vector_of_relations();
        let base = self.base();
        let tritone = (base % 2 == 0).then_some(base / 2);
        let precedes = |shorter: u32, longer: u32| {
            if allow_tritone && Some(shorter) == tritone {
                shorter <= longer
            } else {
                shorter < longer
            }
        };

        let indices: Vec<usize> = (0..v.len()).collect();
        let pairs = choose(&indices, 2);

        pairs.iter().all(|degrees| {
            let (i, i1) = (degrees[0], degrees[1]);
            pairs.iter().all(|steps| {
                let (j, k) = (steps[0], steps[1]);
                precedes(v[i][j], v[i1][k]) && precedes(v[i1][j], v[i][k])
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{binomial, DEFAULT_MULTIPLIER};

    fn set(pitches: &[i64]) -> PitchClassSet {
        PitchClassSet::new(pitches)
    }

    #[test]
    fn computes_interval_vectors() {
        assert_eq!(set(&[0, 1, 3, 4]).interval_vector(), vec![2, 1, 2, 1, 0, 0]);
        assert_eq!(set(&[0, 1, 3, 5, 6, 8, 10]).interval_vector(), vec![2, 5, 4, 3, 6, 1]);
        assert_eq!(set(&[0, 2, 4, 6, 8, 10]).interval_vector(), vec![0, 6, 0, 6, 0, 3]);
    }

    #[test]
    fn full_interval_vector_follows_pitch_order() {
        assert_eq!(
            set(&[0, 4, 7]).full_interval_vector(),
            vec![0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0]
        );
        assert_eq!(
            set(&[7, 4, 0]).full_interval_vector(),
            vec![0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0]
        );
        assert_eq!(set(&[7, 4, 0]).interval_vector(), set(&[0, 4, 7]).interval_vector());
    }

    #[test]
    fn full_interval_vector_sums_to_pair_count() {
        let s = set(&[0, 1, 3, 5, 6, 8, 10]);
        let total: u32 = s.full_interval_vector().iter().sum();
        assert_eq!(u64::from(total), binomial(7, 2));
    }

    #[test]
    fn interval_vectors_for_other_moduli() {
        let s = PitchClassSet::with_base(&[0, 1, 3], 7).unwrap();
        assert_eq!(s.full_interval_vector(), vec![1, 1, 1, 0, 0, 0]);
        assert_eq!(s.interval_vector(), vec![1, 1, 1]);

        let trivial = PitchClassSet::with_base(&[5], 1).unwrap();
        assert!(trivial.full_interval_vector().is_empty());
        assert!(trivial.interval_vector().is_empty());
    }

    #[test]
    fn computes_invariance_vectors() {
        assert_eq!(set(&[0, 2, 5]).invariance_vector(DEFAULT_MULTIPLIER), [1, 0, 0, 0, 5, 6, 5, 5]);
        assert_eq!(set(&[0, 1, 6, 7]).invariance_vector(DEFAULT_MULTIPLIER), [2, 2, 2, 2, 6, 6, 6, 6]);
        assert_eq!(
            set(&[0, 2, 4, 6, 8, 10]).invariance_vector(DEFAULT_MULTIPLIER),
            [6, 6, 6, 6, 6, 6, 6, 6]
        );
        assert_eq!(
            set(&[0, 1, 2, 3, 4, 5, 8]).invariance_vector(DEFAULT_MULTIPLIER),
            [1, 0, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(
            set(&[0, 1, 2, 3, 5, 6, 8]).invariance_vector(DEFAULT_MULTIPLIER),
            [1, 0, 0, 1, 0, 0, 0, 0]
        );
        let aggregate: Vec<i64> = (0..12).collect();
        assert_eq!(
            set(&aggregate).invariance_vector(DEFAULT_MULTIPLIER),
            [12, 12, 12, 12, 0, 0, 0, 0]
        );
    }

    #[test]
    fn huron_consonance_matches_published_values() {
        let aggregate: Vec<i64> = (0..12).collect();
        let h = set(&aggregate).huron().unwrap();
        assert!((h.aggregate - -0.2).abs() < 0.01);
        assert!((h.correlation - 0.21).abs() < 0.01);

        let h = set(&[0, 2, 4, 5, 7, 9, 11]).huron().unwrap();
        assert!((h.aggregate - 4.76).abs() < 0.01);
        assert!((h.correlation - 0.62).abs() < 0.01);
    }

    #[test]
    fn huron_is_mod_12_only() {
        let s = PitchClassSet::with_base(&[0, 1, 3], 7).unwrap();
        assert!(s.huron().unwrap_err().is_domain());
    }

    #[test]
    fn huron_of_empty_set_has_undefined_correlation() {
        let h = set(&[]).huron().unwrap();
        assert_eq!(h.aggregate, 0.0);
        assert!(h.correlation.is_nan());
    }

    #[test]
    fn vector_of_relations_uses_current_order() {
        let v = set(&[0, 2, 4, 5, 7, 9, 11]).vector_of_relations();
        assert_eq!(v.len(), 7);
        assert_eq!(v[0], vec![0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(v[1], vec![0, 2, 3, 5, 7, 9, 10]);

        let reordered = set(&[11, 0, 2, 4, 5, 7, 9]).vector_of_relations();
        assert_eq!(reordered[1], v[0]);
    }

    #[test]
    fn uniqueness() {
        assert!(set(&[0, 2, 4, 5, 7, 9, 11]).is_unique());
        assert!(set(&[0, 2, 4, 7, 9]).is_unique());
        assert!(!set(&[0, 2, 4, 6, 8, 10]).is_unique());
        assert!(!set(&[0, 1, 4, 5, 8, 9]).is_unique());
    }

    #[test]
    fn coherence_relaxes_tritones_only() {
        let diatonic = set(&[0, 2, 4, 5, 7, 9, 11]);
        assert!(diatonic.is_coherent());
        assert!(!diatonic.is_strictly_coherent());

        let pentatonic = set(&[0, 2, 4, 7, 9]);
        assert!(pentatonic.is_coherent());
        assert!(pentatonic.is_strictly_coherent());

        let octatonic = set(&[0, 2, 3, 5, 6, 8, 9, 11]);
        assert!(octatonic.is_strictly_coherent());
    }

    #[test]
    fn incoherent_sets() {
        assert!(!set(&[0, 1, 3]).is_coherent());
        assert!(!set(&[0, 1, 2]).is_strictly_coherent());
    }
}
