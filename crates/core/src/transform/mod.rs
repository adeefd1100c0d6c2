//! Elementary group operations on pitch-class sets.
//!
//! Each operation comes as a pair: the plain form returns a fresh set and the
//! `_in_place` form rewrites the receiver's pitches. Neither touches `base` or
//! `input`.

use crate::PitchClassSet;

/// Multiplier used by the `M` operation when none is given (M5, the
/// circle-of-fourths mapping).
pub const DEFAULT_MULTIPLIER: i64 = 5;

impl PitchClassSet {
    /// Adds `interval` to every pitch.
    pub fn transpose(&self, interval: i64) -> Self {
        self.derive(self.transposed(interval))
    }

    pub fn transpose_in_place(&mut self, interval: i64) {
        let pitches = self.transposed(interval);
        self.set_pitches(pitches);
    }

    /// Reflects every pitch around `axis`: `p -> axis - p`.
    pub fn invert(&self, axis: i64) -> Self {
        self.derive(self.inverted(axis))
    }

    pub fn invert_in_place(&mut self, axis: i64) {
        let pitches = self.inverted(axis);
        self.set_pitches(pitches);
    }

    /// Multiplies every pitch by `m`.
    pub fn multiply(&self, m: i64) -> Self {
        self.derive(self.multiplied(m))
    }

    pub fn multiply_in_place(&mut self, m: i64) {
        let pitches = self.multiplied(m);
        self.set_pitches(pitches);
    }

    /// Transposes so that the current first pitch becomes 0. This anchors on
    /// sequence order, not on the smallest pitch.
    pub fn zero(&self) -> Self {
        match self.get(0) {
            Some(first) => self.transpose(-i64::from(first)),
            None => self.clone(),
        }
    }

    pub fn zero_in_place(&mut self) {
        if let Some(first) = self.get(0) {
            self.transpose_in_place(-i64::from(first));
        }
    }

    /// Every residue of the modulus missing from the set, ascending.
    pub fn complement(&self) -> Self {
        let pitches = (0..self.base()).filter(|p| !self.contains(*p)).collect();
        self.derive(pitches)
    }

    /// The `base` transpositions `T0..T(base-1)`, ordered lexicographically by
    /// their pitch sequences.
    pub fn transpositions(&self) -> Vec<Self> {
        let mut sequences: Vec<Vec<u32>> = (0..self.base())
            .map(|interval| self.transposed(i64::from(interval)))
            .collect();
        sequences.sort();
        sequences
            .into_iter()
            .map(|pitches| self.derive(pitches))
            .collect()
    }

    /// All transpositions followed by all transpositions of the inversion
    /// around `axis`.
    pub fn transpositions_and_inversions(&self, axis: i64) -> Vec<Self> {
        let mut sets = self.transpositions();
        sets.extend(self.invert(axis).transpositions());
        sets
    }

    fn modulus(&self) -> u64 {
        u64::from(self.base())
    }

    fn residue(&self, value: i64) -> u64 {
        value.rem_euclid(i64::from(self.base())) as u64
    }

    fn transposed(&self, interval: i64) -> Vec<u32> {
        let shift = self.residue(interval);
        let modulus = self.modulus();
        self.pitches()
            .iter()
            .map(|&p| ((u64::from(p) + shift) % modulus) as u32)
            .collect()
    }

    fn inverted(&self, axis: i64) -> Vec<u32> {
        let axis = self.residue(axis);
        let modulus = self.modulus();
        self.pitches()
            .iter()
            .map(|&p| ((axis + modulus - u64::from(p)) % modulus) as u32)
            .collect()
    }

    fn multiplied(&self, m: i64) -> Vec<u32> {
        let factor = self.residue(m);
        let modulus = self.modulus();
        self.pitches()
            .iter()
            .map(|&p| ((u64::from(p) * factor) % modulus) as u32)
            .collect()
    }
}
