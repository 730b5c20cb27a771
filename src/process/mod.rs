/*!
 * Process Module
 * Process records, validation and input sources
 */

pub mod parse;
pub mod presets;
pub mod types;
pub mod validation;

pub use parse::{parse_input, parse_json, parse_table};
pub use presets::Preset;
pub use types::{Process, ProcessId};
pub use validation::{validate, validate_all};
