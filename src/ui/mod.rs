//! Rendering: sidebar controls, charts and the raw table.

pub mod panels;
pub mod plot;
pub mod table;
