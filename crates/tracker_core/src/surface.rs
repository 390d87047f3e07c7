//! Contract between the orchestrator and whatever draws the list.

use shared::{
    domain::{EditMode, Item, ItemId, ItemInput},
    error::ErrorNotice,
};

/// Rendering and input layer. Rows are addressed by
/// [`ItemId::element_id`]; edit requests carry that token back.
pub trait PresentationSurface {
    fn render_all(&mut self, items: &[Item]);
    fn append_one(&mut self, item: &Item);
    fn update_one(&mut self, item: &Item);
    fn remove_one(&mut self, id: ItemId);
    fn clear_all(&mut self);
    fn show_total(&mut self, total: i64);
    /// Shows or hides the list as a whole.
    fn set_visible(&mut self, visible: bool);
    /// Swaps the visible action controls.
    fn set_mode(&mut self, mode: EditMode);
    fn read_form(&self) -> ItemInput;
    fn populate_form(&mut self, item: &Item);
    fn clear_form(&mut self);
    fn show_error(&mut self, notice: &ErrorNotice);
}
