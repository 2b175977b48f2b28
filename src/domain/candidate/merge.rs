use std::collections::HashSet;

use super::entity::TextCandidate;

/// Merges the two recognition passes into one candidate list.
///
/// Accurate candidates come first in their original order, followed by the
/// fast candidates whose trimmed text was not already seen. Whitespace-only
/// texts are dropped. The dedup key is the trimmed text, compared exactly.
pub fn merge_candidates(fast: &[TextCandidate], accurate: &[TextCandidate]) -> Vec<TextCandidate> {
    let mut merged = Vec::with_capacity(fast.len() + accurate.len());
    let mut seen: HashSet<&str> = HashSet::new();

    for candidate in accurate.iter().chain(fast.iter()) {
        let key = candidate.trimmed();
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        merged.push(candidate.clone());
    }

    merged
}
