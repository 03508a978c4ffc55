//! Draw inputs and outputs.
//!
//! All types serialize with camelCase field names so callers can load
//! requests from JSON and persist results as they are. The engine only
//! reads participants; it never mutates or retains them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rng::Algorithm;

/// Where a participant entry came from. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantSource {
    #[default]
    Manual,
    Csv,
    Social,
}

/// A contest entry.
///
/// `id` must be unique within one participant list. The engine trusts that
/// and does not deduplicate by `name` or `identifier`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub source: ParticipantSource,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Participant {
    /// Creates a manually entered participant with an empty identifier.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            identifier: String::new(),
            source: ParticipantSource::Manual,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn with_source(mut self, source: ParticipantSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Parameters of a single draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawRequest {
    /// Candidates in input order. Order does not affect fairness.
    pub participants: Vec<Participant>,
    pub number_of_winners: usize,
    #[serde(default)]
    pub allow_duplicates: bool,
    /// Present: replayable seeded draw. Absent: live CSPRNG draw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
}

impl DrawRequest {
    pub fn new(participants: Vec<Participant>, number_of_winners: usize) -> Self {
        Self {
            participants,
            number_of_winners,
            allow_duplicates: false,
            seed: None,
        }
    }

    pub fn allow_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }
}

/// Outcome of a successful draw.
///
/// Immutable once built; the certificate hash commits to `draw_id`, the
/// winner ids in order, `timestamp`, `algorithm` and `seed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawResult {
    pub draw_id: String,
    /// Selection order: the first entry is winner #1.
    pub winners: Vec<Participant>,
    pub timestamp: DateTime<Utc>,
    pub algorithm: Algorithm,
    /// The seed verbatim, or the auto-generated label for live draws.
    pub seed: String,
    /// 64 lowercase hex characters.
    pub certificate_hash: String,
}

impl DrawResult {
    /// Winner ids in selection order.
    pub fn winner_ids(&self) -> Vec<&str> {
        self.winners.iter().map(|winner| winner.id.as_str()).collect()
    }
}
