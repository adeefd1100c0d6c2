use std::fmt;

use pcset_core::{AnalysisConfig, HuronConsonance, PcSetError, PitchClassSet, Result};
use serde::Serialize;

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Renders a mod-12 set as note names, with `middle_c` sounding as `C`.
pub fn notes(set: &PitchClassSet, middle_c: i64) -> Result<String> {
    if set.base() != 12 {
        return Err(PcSetError::domain(format!(
            "note names only make sense for mod 12 sets, got mod {}",
            set.base()
        )));
    }

    let names: Vec<&str> = set
        .transpose(-middle_c)
        .pitches()
        .iter()
        .map(|&p| NOTE_NAMES[p as usize])
        .collect();
    Ok(names.join(", "))
}

/// Balzano coherence verdict, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Coherence {
    StrictlyCoherent,
    Coherent,
    Incoherent,
}

impl Coherence {
    fn of(set: &PitchClassSet) -> Self {
        if set.is_strictly_coherent() {
            Self::StrictlyCoherent
        } else if set.is_coherent() {
            Self::Coherent
        } else {
            Self::Incoherent
        }
    }
}

impl fmt::Display for Coherence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::StrictlyCoherent => "strictly coherent",
            Self::Coherent => "coherent",
            Self::Incoherent => "false",
        };
        f.write_str(label)
    }
}

/// Everything the `info` command prints about a set.
#[derive(Debug, Clone, Serialize)]
pub struct SetReport {
    pub modulo: u32,
    pub input: Vec<i64>,
    pub pitches: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub inversion: Vec<u32>,
    pub normal_form: Vec<u32>,
    pub prime_form: Vec<u32>,
    pub interval_vector: Vec<u32>,
    pub invariance_vector: [usize; 8],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub huron: Option<HuronConsonance>,
    pub unique: bool,
    pub coherence: Coherence,
}

impl SetReport {
    /// Runs every analysis on `set`. Mod-12-only measures are left out for
    /// other moduli.
    pub fn build(set: &PitchClassSet, config: &AnalysisConfig) -> Result<Self> {
        let twelve_tone = set.base() == 12;

        Ok(Self {
            modulo: set.base(),
            input: set.input().to_vec(),
            pitches: set.pitches().to_vec(),
            notes: if twelve_tone {
                Some(notes(set, config.middle_c)?)
            } else {
                None
            },
            inversion: set.invert(config.axis).pitches().to_vec(),
            normal_form: set.normal_form().pitches().to_vec(),
            prime_form: set.prime().pitches().to_vec(),
            interval_vector: set.interval_vector(),
            invariance_vector: set.invariance_vector(config.multiplier),
            huron: if twelve_tone { Some(set.huron()?) } else { None },
            unique: set.is_unique(),
            coherence: Coherence::of(set),
        })
    }
}

impl fmt::Display for SetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "modulo: {}", self.modulo)?;
        writeln!(f, "raw input: {:?}", self.input)?;
        writeln!(f, "pitch set: {:?}", self.pitches)?;
        if let Some(notes) = &self.notes {
            writeln!(f, "notes: {notes}")?;
        }
        writeln!(f, "inversion: {:?}", self.inversion)?;
        writeln!(f, "normal: {:?}", self.normal_form)?;
        writeln!(f, "prime: {:?}", self.prime_form)?;
        writeln!(f, "interval vector: {:?}", self.interval_vector)?;
        writeln!(f, "invariance vector: {:?}", self.invariance_vector)?;
        if let Some(huron) = &self.huron {
            writeln!(
                f,
                "huron ADC: {}  pearsons: {}",
                huron.aggregate, huron.correlation
            )?;
        }
        writeln!(f, "balzano uniqueness: {}", self.unique)?;
        write!(f, "balzano coherence: {}", self.coherence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_notes_relative_to_middle_c() {
        let set = PitchClassSet::new(&[0, 4, 7, 10]);
        assert_eq!(notes(&set, 0).unwrap(), "C, E, G, A#");
        assert_eq!(notes(&set, 2).unwrap(), "A#, D, F, G#");
        assert_eq!(notes(&PitchClassSet::new(&[]), 0).unwrap(), "");
    }

    #[test]
    fn note_names_are_mod_12_only() {
        let set = PitchClassSet::with_base(&[0, 1], 7).unwrap();
        assert!(notes(&set, 0).unwrap_err().is_domain());
    }

    #[test]
    fn reports_the_diatonic_collection() {
        let set = PitchClassSet::new(&[0, 2, 4, 5, 7, 9, 11]);
        let report = SetReport::build(&set, &AnalysisConfig::default()).unwrap();

        assert_eq!(report.inversion, vec![0, 10, 8, 7, 5, 3, 1]);
        assert_eq!(report.prime_form, vec![0, 1, 3, 5, 6, 8, 10]);
        assert_eq!(report.interval_vector, vec![2, 5, 4, 3, 6, 1]);
        assert_eq!(report.coherence, Coherence::Coherent);
        assert!(report.unique);

        let text = report.to_string();
        assert!(text.contains("notes: C, D, E, F, G, A, B"));
        assert!(text.ends_with("balzano coherence: coherent"));
    }

    #[test]
    fn omits_twelve_tone_measures_for_other_moduli() {
        let set = PitchClassSet::with_base(&[0, 1, 3], 7).unwrap();
        let report = SetReport::build(&set, &AnalysisConfig::default()).unwrap();
        assert!(report.notes.is_none());
        assert!(report.huron.is_none());
        assert!(!report.to_string().contains("huron"));
    }
}
