// Celulares POA - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: ui, app, or egui.

pub mod export;
pub mod ingest;
pub mod model;
pub mod stats;
