// Celulares POA - app/mod.rs
//
// Application layer: state management and load orchestration.
// Dependencies: core layer.
// Must NOT depend on: ui.

pub mod state;
