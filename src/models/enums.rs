use serde::{Deserialize, Serialize};

/// Document category detected from recognized text.
///
/// Classification priority is fixed: prescription keywords win over
/// consultation, consultation over lab results, and so on
/// (see `pipeline::extraction::classify`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Prescription,
    Consultation,
    LabResults,
    Discharge,
    #[default]
    Generic,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prescription => "prescription",
            Self::Consultation => "consultation",
            Self::LabResults => "lab_results",
            Self::Discharge => "discharge",
            Self::Generic => "generic",
        }
    }

    /// Human-readable name used in the report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Prescription => "Prescription",
            Self::Consultation => "Medical consultation",
            Self::LabResults => "Laboratory results",
            Self::Discharge => "Discharge summary",
            Self::Generic => "Medical document",
        }
    }
}

/// Outcome of cross-document patient identity reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityStatus {
    /// Every document that names a patient names the same one.
    Confirmed,
    /// At least two distinct patient names appear across the batch.
    Mismatch,
    /// No document yielded a patient name.
    Unknown,
}

/// Quality band for the total document score. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    VeryGood,
    Good,
    Satisfactory,
    NeedsImprovement,
    Unsatisfactory,
}

impl ScoreBand {
    pub fn from_score(total: u32) -> Self {
        match total {
            90.. => Self::Excellent,
            80..=89 => Self::VeryGood,
            70..=79 => Self::Good,
            60..=69 => Self::Satisfactory,
            50..=59 => Self::NeedsImprovement,
            _ => Self::Unsatisfactory,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very good",
            Self::Good => "Good",
            Self::Satisfactory => "Satisfactory",
            Self::NeedsImprovement => "Needs improvement",
            Self::Unsatisfactory => "Unsatisfactory",
        }
    }

    /// Display color for the presentation layer.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Excellent => "#10b981",
            Self::VeryGood => "#22c55e",
            Self::Good => "#84cc16",
            Self::Satisfactory => "#eab308",
            Self::NeedsImprovement => "#f59e0b",
            Self::Unsatisfactory => "#ef4444",
        }
    }

    /// One-sentence commentary appended to the report for this band.
    pub fn commentary(&self) -> &'static str {
        match self {
            Self::Excellent => {
                "Excellent work. The document meets professional standards; \
                 only minimal improvements may be needed."
            }
            Self::VeryGood => {
                "Very good. The document is nearly complete; review the minor \
                 improvements below."
            }
            Self::Good => {
                "Good work. The document is functional but could be improved \
                 for a more professional presentation."
            }
            Self::Satisfactory => {
                "Satisfactory. The document needs improvements to meet the \
                 expected standards."
            }
            Self::NeedsImprovement => {
                "Needs improvement. Several important elements are missing or \
                 incomplete."
            }
            Self::Unsatisfactory => {
                "Unsatisfactory. The document requires substantial rework to \
                 meet medical documentation standards."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_type_is_generic() {
        assert_eq!(DocumentType::default(), DocumentType::Generic);
    }

    #[test]
    fn document_type_round_trip_strings() {
        assert_eq!(DocumentType::Prescription.as_str(), "prescription");
        assert_eq!(DocumentType::LabResults.as_str(), "lab_results");
        assert_eq!(DocumentType::Generic.label(), "Medical document");
    }

    #[test]
    fn band_lower_bounds_are_inclusive() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(90), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(89), ScoreBand::VeryGood);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::VeryGood);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(70), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(69), ScoreBand::Satisfactory);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Satisfactory);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::from_score(50), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::from_score(49), ScoreBand::Unsatisfactory);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Unsatisfactory);
    }

    #[test]
    fn every_band_has_label_color_commentary() {
        let bands = [
            ScoreBand::Excellent,
            ScoreBand::VeryGood,
            ScoreBand::Good,
            ScoreBand::Satisfactory,
            ScoreBand::NeedsImprovement,
            ScoreBand::Unsatisfactory,
        ];
        for band in bands {
            assert!(!band.label().is_empty());
            assert!(band.color().starts_with('#'));
            assert!(!band.commentary().is_empty());
        }
    }
}
