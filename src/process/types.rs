/*!
 * Process Types
 * Process records consumed by the scheduling engine
 */

use crate::core::data_structures::InlineString;
use crate::core::limits::DEFAULT_PRIORITY;
use crate::core::types::{Priority, Ticks};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique process label, e.g. `P1`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessId(InlineString);

impl ProcessId {
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Conventional label for the n-th process (1-based): `P1`, `P2`, ...
    pub fn numbered(n: usize) -> Self {
        Self(format!("P{}", n).into())
    }
}

impl From<&str> for ProcessId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for ProcessId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One schedulable unit
///
/// Read-only for the duration of a run; strategies keep their own
/// remaining-time bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub id: ProcessId,
    pub arrival: Ticks,
    pub burst: Ticks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl Process {
    pub fn new(id: impl Into<ProcessId>, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Declared priority, or the neutral default
    #[inline]
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }
}
