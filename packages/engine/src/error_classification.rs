use crate::CensusError;

/// True when the store reports a missing table or namespace, which for a
/// vintage scan means that vintage simply is not loaded.
pub(crate) fn is_missing_relation_error(err: &CensusError) -> bool {
    let lower = err.description.to_lowercase();
    lower.contains("no such table")
        || lower.contains("unknown database")
        || (lower.contains("relation") || lower.contains("schema"))
            && (lower.contains("does not exist")
                || lower.contains("undefined table")
                || lower.contains("unknown"))
}
