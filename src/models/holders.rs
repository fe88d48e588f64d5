use crate::types::Guid;
use serde::Deserialize;
use time::OffsetDateTime;

/// Composite identifier of a single survey version, returned by survey
/// create, update, and version calls.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GuidVersionedOnHolder {
    pub guid: Guid,
    #[serde(with = "time::serde::rfc3339")]
    pub versioned_on: OffsetDateTime,
}

/// Identifier plus optimistic-lock version, returned by schedule plan
/// create and update calls.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GuidVersionHolder {
    pub guid: Guid,
    pub version: i64,
}

/// Optimistic-lock version returned when updating a study.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VersionHolder {
    pub version: i64,
}

/// Envelope around list responses.
#[derive(Deserialize, Debug)]
pub struct ResourceList<T> {
    pub items: Vec<T>,
    pub total: u32,
}
