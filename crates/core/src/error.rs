//! Static data integrity errors.

/// Inconsistencies between the catalogue, the alias table and the record
/// registry. These indicate a content editing mistake, not a runtime
/// condition; resolution itself is total and never fails.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("authored record {slug:?} is not reachable from any catalogued slug")]
    OrphanRecord { slug: String },
    #[error("alias {alias:?} does not match any catalogued routing slug")]
    DanglingAlias { alias: String },
}

pub type ContentResult<T> = std::result::Result<T, ContentError>;
