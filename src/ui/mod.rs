// Celulares POA - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (read-only models), egui.
// Must NOT depend on: direct file I/O except export dialogs.

pub mod panels;
pub mod theme;
