/// Classification of database-raised write failures. Repositories turn
/// these into domain errors with user-facing messages; anything
/// unclassified stays a generic operation error and is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Exclusion constraint (SQLSTATE 23P01) — overlapping booking ranges.
    Exclusion,
    Unique,
    ForeignKey,
    Check,
}

const EXCLUSION_VIOLATION: &str = "23P01";

pub fn constraint_kind(err: &sqlx::Error) -> Option<ConstraintKind> {
    let sqlx::Error::Database(db) = err else {
        return None;
    };
    if db.code().as_deref() == Some(EXCLUSION_VIOLATION) {
        return Some(ConstraintKind::Exclusion);
    }
    if db.is_unique_violation() {
        return Some(ConstraintKind::Unique);
    }
    if db.is_foreign_key_violation() {
        return Some(ConstraintKind::ForeignKey);
    }
    if db.is_check_violation() {
        return Some(ConstraintKind::Check);
    }
    None
}
