//! Clinical-guideline and protocol presence checks.
//!
//! One finding about an explicit guideline reference is always emitted.
//! Specialty-specific checks live in a static table: adding a specialty
//! means adding an entry, not new control flow. The table is deliberately
//! not exhaustive.

use crate::models::enums::DocumentType;

/// Phrases that count as an explicit clinical-guideline reference.
const GUIDELINE_MARKERS: &[&str] = &[
    "клинические рекомендации",
    "клинический протокол",
    "clinical guideline",
    "протокол",
    "protocol",
];

struct ProtocolCheck {
    label: &'static str,
    keywords: &'static [&'static str],
}

/// One specialty's additional protocol checks. A protocol applies when its
/// trigger keywords appear in the text or the document classified into one
/// of its listed types.
struct SpecialtyProtocol {
    name: &'static str,
    triggers: &'static [&'static str],
    document_types: &'static [DocumentType],
    checks: &'static [ProtocolCheck],
}

impl SpecialtyProtocol {
    fn applies(&self, lower_text: &str, document_type: DocumentType) -> bool {
        self.document_types.contains(&document_type)
            || self.triggers.iter().any(|t| lower_text.contains(t))
    }
}

static PROTOCOLS: &[SpecialtyProtocol] = &[SpecialtyProtocol {
    name: "Gynecology",
    triggers: &["гинеколог", "gynecol", "женск", "матк", "uterus"],
    document_types: &[],
    checks: &[
        ProtocolCheck {
            label: "pelvic imaging (ultrasound)",
            keywords: &["узи", "ультразвук", "ultrasound", "sonograph"],
        },
        ProtocolCheck {
            label: "laboratory orders (smear/cytology)",
            keywords: &["мазок", "цитолог", "cytolog", "smear", "pap"],
        },
    ],
}];

/// Check one document's text for guideline references and type-specific
/// protocol markers. Returns ordered human-readable findings; the
/// guideline-reference finding always comes first.
pub fn check(text: &str, document_type: DocumentType) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut findings = Vec::new();

    if GUIDELINE_MARKERS.iter().any(|m| lower.contains(m)) {
        findings.push("Clinical guideline reference: present".to_string());
    } else {
        findings.push("Clinical guideline reference: absent".to_string());
    }

    for protocol in PROTOCOLS {
        if !protocol.applies(&lower, document_type) {
            continue;
        }
        for check in protocol.checks {
            let present = check.keywords.iter().any(|k| lower.contains(k));
            findings.push(format!(
                "{} protocol, {}: {}",
                protocol.name,
                check.label,
                if present { "documented" } else { "not documented" },
            ));
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_exactly_one_guideline_finding_for_plain_text() {
        let findings = check("Диагноз: ОРВИ", DocumentType::Generic);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0], "Clinical guideline reference: absent");
    }

    #[test]
    fn guideline_reference_detected() {
        let findings = check(
            "Лечение по клиническим рекомендациям... Протокол ведения пациента",
            DocumentType::Consultation,
        );
        assert_eq!(findings[0], "Clinical guideline reference: present");
    }

    #[test]
    fn english_guideline_reference_detected() {
        let findings = check(
            "Treatment follows the NICE clinical guideline",
            DocumentType::Generic,
        );
        assert_eq!(findings[0], "Clinical guideline reference: present");
    }

    #[test]
    fn gynecology_text_adds_protocol_findings() {
        let findings = check(
            "Консультация гинеколога. УЗИ органов малого таза выполнено.",
            DocumentType::Consultation,
        );
        assert_eq!(findings.len(), 3);
        assert!(findings[1].contains("pelvic imaging"));
        assert!(findings[1].ends_with(": documented"));
        assert!(findings[2].contains("smear/cytology"));
        assert!(findings[2].ends_with("not documented"));
    }

    #[test]
    fn gynecology_findings_report_absence() {
        let findings = check("Осмотр гинеколога, жалоб нет", DocumentType::Generic);
        assert_eq!(findings.len(), 3);
        assert!(findings[1].ends_with("not documented"));
        assert!(findings[2].ends_with("not documented"));
    }

    #[test]
    fn non_gynecology_types_emit_no_extra_findings() {
        let findings = check("Рецепт на амоксициллин", DocumentType::Prescription);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn guideline_finding_stays_first() {
        let findings = check(
            "Протокол осмотра гинеколога, мазок взят",
            DocumentType::Consultation,
        );
        assert!(findings[0].starts_with("Clinical guideline reference"));
        assert!(findings.len() > 1);
    }
}
