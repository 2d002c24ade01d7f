//! Interactive dashboard over the penguin measurements dataset.
//!
//! The `data` module holds the reproducible core (model, loader, filter,
//! summaries); `state` owns the dataset and the cached filtered view; `app`
//! and `ui` render it with egui.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
