//! Normal form, prime form and set-class enumeration.
//!
//! Canonical forms follow Straus: among candidate orderings, the winner is the
//! one whose zero-anchored pitches, read as a bitmask (bit `p` set for every
//! pitch `p`), has the smallest value. Ties go to the lexicographically
//! smallest raw pitch sequence.

use std::cmp::Ordering;

use crate::{PcSetError, PitchClassSet, Result};

/// Picks the most left-compact set among `candidates`.
///
/// All candidates must share one cardinality. An empty candidate list is
/// rejected as well, since there is nothing to pick.
pub fn most_left_compact(candidates: &[PitchClassSet]) -> Result<PitchClassSet> {
    let Some(first) = candidates.first() else {
        return Err(PcSetError::invalid_argument(
            "most_left_compact: no candidates to choose from",
        ));
    };

    if let Some(odd) = candidates.iter().find(|c| c.len() != first.len()) {
        return Err(PcSetError::invalid_argument(format!(
            "most_left_compact: all sets must be of the same cardinality \
             ({} has {} pitches, expected {})",
            odd,
            odd.len(),
            first.len()
        )));
    }

    select(candidates.to_vec()).ok_or_else(|| {
        PcSetError::invalid_argument("most_left_compact: no candidates to choose from")
    })
}

/// Sort key equivalent to the bitmask `Σ 2^p` of the zero-anchored pitches.
///
/// Comparing the anchored pitches in descending order compares the highest set
/// bits first, which orders the same way as the bitmask values themselves
/// without overflowing for large moduli.
fn compactness(set: &PitchClassSet) -> Vec<u32> {
    let mut anchored = set.zero().pitches().to_vec();
    anchored.sort_unstable_by(|a, b| b.cmp(a));
    anchored
}

fn by_compactness(a: &(Vec<u32>, PitchClassSet), b: &(Vec<u32>, PitchClassSet)) -> Ordering {
    a.0.cmp(&b.0).then_with(|| a.1.pitches().cmp(b.1.pitches()))
}

fn select(candidates: Vec<PitchClassSet>) -> Option<PitchClassSet> {
    let winner = candidates
        .into_iter()
        .map(|candidate| (compactness(&candidate), candidate))
        .min_by(by_compactness)
        .map(|(_, candidate)| candidate);

    if let Some(winner) = &winner {
        tracing::trace!(%winner, "most left-compact candidate");
    }
    winner
}

impl PitchClassSet {
    /// The most left-compact rotation of the sorted pitches.
    pub fn normal_form(&self) -> Self {
        let mut sorted = self.pitches().to_vec();
        sorted.sort_unstable();

        let rotations = (0..sorted.len())
            .map(|_| {
                sorted.rotate_right(1);
                self.derive(sorted.clone())
            })
            .collect();

        select(rotations).unwrap_or_else(|| self.clone())
    }

    pub fn normal_form_in_place(&mut self) {
        let normal = self.normal_form();
        self.set_pitches(normal.pitches().to_vec());
    }

    /// Whether the current pitch order already is the normal form.
    pub fn is_normal_form(&self) -> bool {
        self.pitches() == self.normal_form().pitches()
    }

    /// The more left-compact of the zero-anchored normal forms of the set and
    /// of its inversion.
    pub fn prime(&self) -> Self {
        let candidates = vec![
            self.normal_form().zero(),
            self.invert(0).normal_form().zero(),
        ];
        select(candidates).unwrap_or_else(|| self.clone())
    }

    pub fn prime_in_place(&mut self) {
        let prime = self.prime();
        self.set_pitches(prime.pitches().to_vec());
    }

    pub fn is_prime(&self) -> bool {
        self.pitches() == self.prime().pitches()
    }

    /// Normal forms of every transposition and inversion, sorted. Any member
    /// of a class yields the same list.
    pub fn set_class(&self) -> Vec<Self> {
        let mut members: Vec<Self> = self
            .transpositions_and_inversions(0)
            .iter()
            .map(Self::normal_form)
            .collect();
        members.sort();
        members
    }
}
