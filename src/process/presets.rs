/*!
 * Canned Process Sets
 * Ready-made workloads for demonstrations and the CLI
 */

use super::types::Process;
use crate::core::errors::AppError;
use std::str::FromStr;

/// Named example workloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Four processes with staggered arrivals and mixed bursts
    Basic,
    /// One long job ahead of several short ones
    Convoy,
    /// Arrivals separated by gaps that leave the CPU idle
    Staggered,
    /// Simultaneous arrivals that differ only in priority
    PriorityMix,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Basic,
        Preset::Convoy,
        Preset::Staggered,
        Preset::PriorityMix,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Convoy => "convoy",
            Self::Staggered => "staggered",
            Self::PriorityMix => "priority-mix",
        }
    }

    pub fn processes(&self) -> Vec<Process> {
        match self {
            Self::Basic => vec![
                Process::new("P1", 0, 5).with_priority(2),
                Process::new("P2", 1, 3).with_priority(1),
                Process::new("P3", 2, 8).with_priority(4),
                Process::new("P4", 3, 6).with_priority(3),
            ],
            Self::Convoy => vec![
                Process::new("P1", 0, 24),
                Process::new("P2", 1, 3),
                Process::new("P3", 2, 3),
                Process::new("P4", 3, 2),
            ],
            Self::Staggered => vec![
                Process::new("P1", 2, 3),
                Process::new("P2", 4, 2),
                Process::new("P3", 9, 4),
                Process::new("P4", 10, 1),
            ],
            Self::PriorityMix => vec![
                Process::new("P1", 0, 10).with_priority(3),
                Process::new("P2", 0, 1).with_priority(1),
                Process::new("P3", 0, 2).with_priority(4),
                Process::new("P4", 0, 1).with_priority(5),
                Process::new("P5", 0, 5).with_priority(2),
            ],
        }
    }
}

impl FromStr for Preset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "basic" | "default" => Ok(Self::Basic),
            "convoy" => Ok(Self::Convoy),
            "staggered" | "idle" => Ok(Self::Staggered),
            "priority-mix" | "priority" => Ok(Self::PriorityMix),
            _ => Err(AppError::Configuration(
                format!(
                    "Unknown preset '{}'. Valid: basic, convoy, staggered, priority-mix",
                    s
                )
                .into(),
            )),
        }
    }
}
