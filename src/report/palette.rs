/*!
 * Color Assignment
 * Stable display colors for processes in reports
 */

use crate::process::{Process, ProcessId};
use crate::scheduler::Occupant;
use ahash::RandomState;
use std::collections::HashMap;

/// Colors cycled through by declaration index
pub const PALETTE: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

/// Color used for idle intervals
pub const IDLE_COLOR: &str = "#d3d3d3";

/// Process-to-color assignment for one process set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMap {
    colors: HashMap<ProcessId, &'static str, RandomState>,
}

impl ColorMap {
    /// Assign colors by declaration index, wrapping around the palette
    pub fn assign(processes: &[Process]) -> Self {
        let mut colors = HashMap::with_capacity_and_hasher(processes.len(), RandomState::new());
        for (index, process) in processes.iter().enumerate() {
            colors.insert(process.id.clone(), PALETTE[index % PALETTE.len()]);
        }
        Self { colors }
    }

    /// Color of an interval's occupant; unknown processes render as idle
    pub fn color_of(&self, occupant: &Occupant) -> &'static str {
        match occupant {
            Occupant::Idle => IDLE_COLOR,
            Occupant::Process(pid) => self.colors.get(pid).copied().unwrap_or(IDLE_COLOR),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
