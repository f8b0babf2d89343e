//! # Core Domain Entities
//!
//! Identity types, the priority tier, and the two records that cross the
//! engine boundary.
//!
//! ```text
//! intake ──Submission──→ ordering engine ──Dispatch──→ worker
//! ```

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::timestamp::Timestamp;

// =============================================================================
// IDENTITIES
// =============================================================================

/// Identifier of a work type (e.g. a data provider name).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkTypeId(String);

impl WorkTypeId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkTypeId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for WorkTypeId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for WorkTypeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// PRIORITY
// =============================================================================

/// Ordering tier. Lower numeric value ranks first.
///
/// Unrecognised raw values (numbers other than 1/2, unknown strings, any
/// other JSON shape) normalise to `Normal` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum PriorityTier {
    High = 1,
    #[default]
    Normal = 2,
}

impl PriorityTier {
    /// Normalises a raw numeric tier.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            1 => Self::High,
            _ => Self::Normal,
        }
    }

    /// Normalises a textual tier (`"HIGH"`, `"normal"`, `"1"`, ...).
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("high") || label == "1" {
            Self::High
        } else {
            Self::Normal
        }
    }

    pub fn as_raw(self) -> u8 {
        self as u8
    }
}

impl Serialize for PriorityTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_raw())
    }
}

impl<'de> Deserialize<'de> for PriorityTier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawPriority {
            Number(i64),
            Label(String),
            Other(serde::de::IgnoredAny),
        }

        Ok(match RawPriority::deserialize(deserializer)? {
            RawPriority::Number(raw) => Self::from_raw(raw),
            RawPriority::Label(label) => Self::from_label(&label),
            RawPriority::Other(_) => Self::Normal,
        })
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => f.write_str("HIGH"),
            Self::Normal => f.write_str("NORMAL"),
        }
    }
}

// =============================================================================
// SUBMISSION / DISPATCH
// =============================================================================

/// Optional ordering hints carried by a submission.
///
/// Absent fields take the engine defaults: `Normal` tier, no group
/// timestamp, complexity weight 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionAttributes {
    pub priority: Option<PriorityTier>,
    pub group_earliest_timestamp: Option<Timestamp>,
    pub complexity_weight: Option<u8>,
}

/// A request to run one work type for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub work_type: WorkTypeId,
    pub user_id: UserId,
    pub timestamp: Timestamp,
    #[serde(default, alias = "metadata")]
    pub attributes: SubmissionAttributes,
}

impl Submission {
    /// Creates a submission with default attributes.
    pub fn new(
        work_type: impl Into<WorkTypeId>,
        user_id: impl Into<UserId>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            work_type: work_type.into(),
            user_id: user_id.into(),
            timestamp,
            attributes: SubmissionAttributes::default(),
        }
    }

    pub fn with_priority(mut self, priority: PriorityTier) -> Self {
        self.attributes.priority = Some(priority);
        self
    }

    pub fn with_attributes(mut self, attributes: SubmissionAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// The record handed to a worker. Identity only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dispatch {
    pub work_type: WorkTypeId,
    pub user_id: UserId,
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dispatch(work_type={}, user_id={})",
            self.work_type, self.user_id
        )
    }
}
