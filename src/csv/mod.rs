//! CSV parsing and display
//!
//! Turns raw text lines into a rectangular table and renders it:
//! - Quote-aware single-line tokenizing
//! - Ragged rows padded with absent cells
//! - Header names taken from the first row or synthesized from column indices
//!
//! # Architecture
//!
//! ```text
//! lines ──► CsvTable::parse ──► tokenize (per line)
//!                │
//!                ▼
//!           CsvTable { headers, records[col][row] }
//!                │
//!                ▼
//!        render_text / render_json
//! ```

pub mod render;
mod table;
mod tokenizer;

pub use render::{render_json, render_text, RenderOptions};
pub use table::{split_lines, Cell, CsvTable};
pub use tokenizer::tokenize;
