//! Text rendition of the presentation surface.
//!
//! Keeps the screen state (rows, total, form, mode) in memory and renders it
//! on demand; error notices are queued for the caller to print.

use shared::{
    domain::{EditMode, Item, ItemId, ItemInput},
    error::ErrorNotice,
};
use tracker_core::PresentationSurface;

#[derive(Debug, Default)]
pub struct TerminalSurface {
    rows: Vec<(ItemId, String)>,
    total: i64,
    visible: bool,
    mode: EditMode,
    form: ItemInput,
    notices: Vec<ErrorNotice>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_form_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_form_calories(&mut self, calories: impl Into<String>) {
        self.form.calories = calories.into();
    }

    pub fn fill_form(&mut self, input: ItemInput) {
        self.form = input;
    }

    pub fn take_notices(&mut self) -> Vec<ErrorNotice> {
        std::mem::take(&mut self.notices)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.visible {
            for (id, label) in &self.rows {
                out.push_str(&format!("  {:<8} {label}\n", id.element_id()));
            }
        } else {
            out.push_str("  (no items)\n");
        }
        out.push_str(&format!("Total Calories: {}\n", self.total));

        match self.mode {
            EditMode::Adding => out.push_str("[add]\n"),
            EditMode::Editing => out.push_str(&format!(
                "editing: name={:?} calories={:?}\n[update] [delete] [back]\n",
                self.form.name, self.form.calories
            )),
        }
        out
    }
}

impl PresentationSurface for TerminalSurface {
    fn render_all(&mut self, items: &[Item]) {
        self.rows = items.iter().map(|item| (item.id, item.label())).collect();
    }

    fn append_one(&mut self, item: &Item) {
        self.rows.push((item.id, item.label()));
    }

    fn update_one(&mut self, item: &Item) {
        if let Some(row) = self.rows.iter_mut().find(|(id, _)| *id == item.id) {
            row.1 = item.label();
        }
    }

    fn remove_one(&mut self, id: ItemId) {
        self.rows.retain(|(row_id, _)| *row_id != id);
    }

    fn clear_all(&mut self) {
        self.rows.clear();
    }

    fn show_total(&mut self, total: i64) {
        self.total = total;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_mode(&mut self, mode: EditMode) {
        self.mode = mode;
    }

    fn read_form(&self) -> ItemInput {
        self.form.clone()
    }

    fn populate_form(&mut self, item: &Item) {
        self.form = ItemInput::from_item(item);
    }

    fn clear_form(&mut self) {
        self.form = ItemInput::default();
    }

    fn show_error(&mut self, notice: &ErrorNotice) {
        self.notices.push(notice.clone());
    }
}

#[cfg(test)]
#[path = "tests/terminal_tests.rs"]
mod tests;
