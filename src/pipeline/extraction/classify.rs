use crate::models::enums::DocumentType;

/// Keyword rules in priority order; the first category with any keyword
/// present in the lowercased text wins. A prescription that also mentions
/// lab tests therefore still classifies as a prescription.
const TYPE_RULES: &[(DocumentType, &[&str])] = &[
    (DocumentType::Prescription, &["prescription", "rx", "рецепт"]),
    (DocumentType::Consultation, &["consultation", "консультация"]),
    (DocumentType::LabResults, &["lab", "test", "анализ"]),
    (DocumentType::Discharge, &["discharge", "выписка"]),
];

/// Classify a document from its recognized text. Defaults to
/// [`DocumentType::Generic`] when no keyword matches.
pub fn classify_document_type(text: &str) -> DocumentType {
    let lower = text.to_lowercase();
    TYPE_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(document_type, _)| *document_type)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_prescription() {
        assert_eq!(
            classify_document_type("Рецепт на амоксициллин"),
            DocumentType::Prescription
        );
        assert_eq!(classify_document_type("Rx #12345"), DocumentType::Prescription);
    }

    #[test]
    fn classify_consultation() {
        assert_eq!(
            classify_document_type("Консультация терапевта"),
            DocumentType::Consultation
        );
        assert_eq!(
            classify_document_type("Cardiology consultation notes"),
            DocumentType::Consultation
        );
    }

    #[test]
    fn classify_lab_results() {
        assert_eq!(
            classify_document_type("Общий анализ крови"),
            DocumentType::LabResults
        );
        assert_eq!(
            classify_document_type("Lab report, fasting glucose"),
            DocumentType::LabResults
        );
    }

    #[test]
    fn classify_discharge() {
        assert_eq!(
            classify_document_type("Выписка из стационара"),
            DocumentType::Discharge
        );
    }

    #[test]
    fn prescription_priority_beats_lab_keywords() {
        // Both "рецепт" and "анализ" present: priority order wins.
        assert_eq!(
            classify_document_type("Рецепт выдан по результатам: анализ крови"),
            DocumentType::Prescription
        );
    }

    #[test]
    fn consultation_priority_beats_discharge() {
        // Both "консультация" and "выписка" present: priority order wins.
        assert_eq!(
            classify_document_type("Выписка оформлена, консультация назначена"),
            DocumentType::Consultation
        );
    }

    #[test]
    fn no_keywords_defaults_to_generic() {
        assert_eq!(classify_document_type("Справка о прививках"), DocumentType::Generic);
        assert_eq!(classify_document_type(""), DocumentType::Generic);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify_document_type("РЕЦЕПТ"), DocumentType::Prescription);
        assert_eq!(classify_document_type("DISCHARGE SUMMARY"), DocumentType::Discharge);
    }
}
