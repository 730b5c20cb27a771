/*!
 * Core Types
 * Common types used across the engine
 */

/// Simulation time in ticks
///
/// Signed so that negative values in user input reach validation intact
/// instead of being rejected by the parser.
pub type Ticks = i64;

/// Priority level (lower is more urgent)
pub type Priority = i64;

/// Position of a process in its input list; the stable identity order
pub type DeclIndex = usize;
