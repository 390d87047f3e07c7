//! Calorie tracker core: the item collection, the presentation contract, and
//! the orchestrator that keeps collection, screen and persistence in step.

pub mod controller;
pub mod item_store;
pub mod surface;

pub use controller::{
    events::{UiError, UiErrorContext, UiEvent},
    orchestration::Orchestrator,
};
pub use item_store::{ItemStore, StoreSnapshot};
pub use surface::PresentationSurface;
