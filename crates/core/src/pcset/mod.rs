use std::{
    cmp::Ordering,
    collections::HashSet,
    fmt,
    ops::{BitAnd, BitOr, Index},
};

use serde::Serialize;
use serde_json::Value;

use crate::{PcSetError, Result};

/// Modulus used when none is given: the twelve equal-tempered pitch classes.
pub const DEFAULT_BASE: u32 = 12;

/// Largest modulus the compact string encoding can express (digits `0-9a-z`).
pub const MAX_STRING_BASE: u32 = 36;

/// An ordered collection of distinct pitch classes modulo `base`.
///
/// `pitches` keeps first-occurrence order rather than numeric order; `zero`
/// and the Balzano relations depend on it. `input` records what the caller
/// originally supplied and is never consulted by any computation.
#[derive(Debug, Clone, Serialize)]
pub struct PitchClassSet {
    base: u32,
    input: Vec<i64>,
    pitches: Vec<u32>,
}

impl PitchClassSet {
    /// Builds a set modulo 12.
    pub fn new(input: &[i64]) -> Self {
        Self::reduce(input.to_vec(), DEFAULT_BASE)
    }

    /// Builds a set modulo `base`, reducing every value and dropping repeats.
    pub fn with_base(input: &[i64], base: u32) -> Result<Self> {
        if base == 0 {
            return Err(PcSetError::invalid_argument("base must be at least 1"));
        }
        Ok(Self::reduce(input.to_vec(), base))
    }

    /// Builds a set from a dynamically typed value, which must be an array of
    /// integers. Integral floats such as `3.0` are rejected like any other
    /// non-integer.
    pub fn from_json(value: &Value, base: u32) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(PcSetError::invalid_argument(
                "improperly formatted pitch-class array: expected an array",
            ));
        };

        let input = items
            .iter()
            .map(|item| {
                item.as_i64().ok_or_else(|| {
                    PcSetError::invalid_argument(format!(
                        "improperly formatted pitch-class array: `{item}` is not an integer"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::with_base(&input, base)
    }

    /// Decodes a compact string such as `"321bac"`, one base-36 digit per
    /// pitch. Letters are case-insensitive and any other character is skipped.
    pub fn from_string(encoded: &str, base: u32) -> Result<Self> {
        if base > MAX_STRING_BASE {
            return Err(PcSetError::domain(format!(
                "string decoding supports bases up to {MAX_STRING_BASE}, got {base}; \
                 build larger sets from integers instead"
            )));
        }

        let mut skipped = 0usize;
        let input: Vec<i64> = encoded
            .chars()
            .filter_map(|c| {
                let digit = c.to_digit(MAX_STRING_BASE);
                if digit.is_none() {
                    skipped += 1;
                }
                digit.map(i64::from)
            })
            .collect();

        if skipped > 0 {
            tracing::debug!(encoded, skipped, "skipped non-digit characters");
        }

        Self::with_base(&input, base)
    }

    /// Wraps a reduced pitch sequence computed from this set, keeping the
    /// modulus.
    pub(crate) fn derive(&self, pitches: Vec<u32>) -> Self {
        let pitches = first_occurrences(pitches);
        Self {
            base: self.base,
            input: pitches.iter().map(|&p| i64::from(p)).collect(),
            pitches,
        }
    }

    fn reduce(input: Vec<i64>, base: u32) -> Self {
        let modulus = i64::from(base);
        let pitches = first_occurrences(
            input
                .iter()
                .map(|value| value.rem_euclid(modulus) as u32)
                .collect(),
        );

        Self {
            base,
            input,
            pitches,
        }
    }

    /// Replaces the pitch sequence, keeping `base` and `input`. Repeats that a
    /// non-invertible multiplication may introduce are dropped.
    pub(crate) fn set_pitches(&mut self, pitches: Vec<u32>) {
        self.pitches = first_occurrences(pitches);
    }

    pub fn pitches(&self) -> &[u32] {
        &self.pitches
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn input(&self) -> &[i64] {
        &self.input
    }

    /// Cardinality of the set.
    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        self.pitches.get(index).copied()
    }

    pub fn contains(&self, pitch: u32) -> bool {
        self.pitches.contains(&pitch)
    }

    /// Pitches of `self` that also occur in `other`, in `self`'s order.
    pub fn intersection(&self, other: &Self) -> Self {
        let input: Vec<i64> = self
            .pitches
            .iter()
            .filter(|pitch| other.contains(**pitch))
            .map(|&pitch| i64::from(pitch))
            .collect();
        Self::reduce(input, self.base)
    }

    /// Pitches of `self` followed by those of `other` not already present.
    pub fn union(&self, other: &Self) -> Self {
        let input: Vec<i64> = self
            .pitches
            .iter()
            .chain(&other.pitches)
            .map(|&pitch| i64::from(pitch))
            .collect();
        Self::reduce(input, self.base)
    }
}

fn first_occurrences(pitches: Vec<u32>) -> Vec<u32> {
    let mut seen = HashSet::with_capacity(pitches.len());
    pitches.into_iter().filter(|pitch| seen.insert(*pitch)).collect()
}

impl Index<usize> for PitchClassSet {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pitches[index]
    }
}

impl BitAnd for &PitchClassSet {
    type Output = PitchClassSet;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl BitOr for &PitchClassSet {
    type Output = PitchClassSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

// Sets order lexicographically by pitch sequence; the modulus only separates
// otherwise identical sequences. `input` is provenance and never compared.
impl PartialEq for PitchClassSet {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PitchClassSet {}

impl PartialOrd for PitchClassSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PitchClassSet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pitches
            .cmp(&other.pitches)
            .then_with(|| self.base.cmp(&other.base))
    }
}

impl fmt::Display for PitchClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, pitch) in self.pitches.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{pitch}")?;
        }
        write!(f, "]")
    }
}
