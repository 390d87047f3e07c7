//! Controller layer: UI events and their orchestration across store, surface and persistence.

pub mod events;
pub mod orchestration;
