/*!
 * Engine Limits and Constants
 *
 * Centralized location for defaults and bounds used by the engine.
 */

use super::types::{Priority, Ticks};

/// Priority assumed for processes that do not declare one
pub const DEFAULT_PRIORITY: Priority = 0;

/// Default Round Robin quantum used by presets and the CLI when none is given
pub const DEFAULT_QUANTUM: Ticks = 2;

/// Upper bound on the worst-case makespan of a single run (10M ticks)
///
/// Work per run is proportional to the number of emitted intervals, which is
/// itself bounded by the makespan. Inputs beyond this are refused.
pub const DEFAULT_MAX_TICKS: Ticks = 10_000_000;

/// Maximum number of processes accepted from a single input source
pub const MAX_INPUT_PROCESSES: usize = 10_000;
