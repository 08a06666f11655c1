//! Cross-document patient identity reconciliation.
//!
//! Mixing documents from different patients would corrupt the aggregate
//! score and recommendations, so the verdict is a correctness gate surfaced
//! in the report, not a cosmetic note. A mismatch does not abort the
//! analysis; the caller decides whether to treat it as blocking.

use serde::{Deserialize, Serialize};

use crate::models::enums::IdentityStatus;

/// Verdict on whether the batch belongs to one patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityReconciliation {
    pub status: IdentityStatus,
    /// Confirmed name, in its first-seen casing.
    pub canonical_name: Option<String>,
    /// Distinct conflicting names, in order of first appearance.
    pub conflicting_names: Vec<String>,
}

/// Reconcile patient names extracted across the batch.
///
/// Documents with no extracted name are skipped. Case and surrounding
/// whitespace are ignored for comparison; display keeps the original
/// casing of the first occurrence.
pub fn reconcile(names: &[Option<String>]) -> IdentityReconciliation {
    let mut normalized_seen: Vec<String> = Vec::new();
    let mut distinct: Vec<String> = Vec::new();

    for name in names.iter().flatten() {
        let normalized = name.trim().to_lowercase();
        if normalized.is_empty() {
            continue;
        }
        if !normalized_seen.contains(&normalized) {
            normalized_seen.push(normalized);
            distinct.push(name.trim().to_string());
        }
    }

    match distinct.len() {
        0 => IdentityReconciliation {
            status: IdentityStatus::Unknown,
            canonical_name: None,
            conflicting_names: Vec::new(),
        },
        1 => IdentityReconciliation {
            status: IdentityStatus::Confirmed,
            canonical_name: distinct.pop(),
            conflicting_names: Vec::new(),
        },
        _ => IdentityReconciliation {
            status: IdentityStatus::Mismatch,
            canonical_name: None,
            conflicting_names: distinct,
        },
    }
}
