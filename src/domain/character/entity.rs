use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One catalog character as delivered by the listing endpoint.
/// Immutable once fetched; `id` is the stable collection key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Stable identifier assigned by the endpoint
    pub id: i64,

    /// Display name
    pub name: String,

    /// Species label
    pub species: String,

    /// Sub-type label; empty for most records.
    /// The endpoint calls this field `type`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Gender label as reported by the endpoint
    pub gender: String,

    /// Status label as reported by the endpoint
    pub status: String,

    /// Place of origin
    pub origin: LocationRef,

    /// Last known location
    pub location: LocationRef,

    /// Portrait image URI (opaque to the core)
    pub image: String,

    /// Episode references, in endpoint order. Each is an opaque URI
    /// whose final path segment is the episode identifier.
    pub episode: Vec<String>,

    /// Creation timestamp. `None` when the endpoint's timestamp string
    /// failed to parse; derived ages are undefined for such records.
    #[serde(default, with = "lenient_created")]
    pub created: Option<DateTime<Utc>>,
}

/// Named reference to a place (origin or location)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    pub url: String,
}

/// Tolerant (de)serialization for the `created` field.
///
/// A missing, null or unparseable timestamp maps to `None` instead of
/// rejecting the record; the rest of the record stays usable.
mod lenient_created {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(|s| {
            DateTime::parse_from_rfc3339(&s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        }))
    }
}
