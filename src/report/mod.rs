//! Report model consumed by the text, JSON and CSV outputs

pub mod output;
pub mod text;

pub use output::{EncounterReport, TargetReport};
pub use text::{render_csv, render_text};
