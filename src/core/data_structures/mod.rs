/*!
 * Data Structures
 * Specialized storage used across the engine
 */

mod inline_string;

pub use inline_string::InlineString;
