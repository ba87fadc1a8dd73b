//! HTML to LaTeX conversion
//!
//! The emitter turns a document tree into raw LaTeX; the cleanup passes then
//! tidy the spacing it leaves behind.

pub mod cleanup;
pub mod html_to_latex;
pub mod text;

pub use cleanup::post_process;
pub use html_to_latex::{LatexEmitter, emit_latex};
