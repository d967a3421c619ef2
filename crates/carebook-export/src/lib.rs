//! carebook-export
//!
//! Renders a form schema and its answers into a tree of typed nodes, then
//! into a terminal outline or a DOCX document.

pub mod docx;
pub mod error;
pub mod header;
pub mod node;
pub mod outline;
pub mod render;
pub mod styles;
