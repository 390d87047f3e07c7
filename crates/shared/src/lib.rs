pub mod domain;
pub mod error;

pub use domain::{EditMode, Item, ItemId, ItemInput};
pub use error::{ErrorCode, ErrorNotice, TrackerError};
