/*!
 * Reports
 * Text and JSON renderings of a schedule for the CLI and front ends
 */

mod json;
mod palette;
mod text;

pub use json::{render_error_json, render_json};
pub use palette::{ColorMap, IDLE_COLOR, PALETTE};
pub use text::render_text;
