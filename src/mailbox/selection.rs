//! Keeps the selected message consistent with the derived view.

use crate::models::email::message::Message;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
  selected_id: Option<String>,
}

impl Selection {
  pub fn id(&self) -> Option<&str> {
    self.selected_id.as_deref()
  }

  pub fn select(&mut self, id: impl Into<String>) {
    self.selected_id = Some(id.into());
  }

  /// Forget the selection so the next reconcile picks the view's first entry.
  pub fn clear(&mut self) {
    self.selected_id = None;
  }

  /// With nothing selected, select the head of a non-empty view.
  pub fn reconcile(&mut self, view: &[&Message]) {
    if self.selected_id.is_none() {
      if let Some(first) = view.first() {
        self.selected_id = Some(first.id.clone());
      }
    }
  }

  /// Message to show: the selected one if it is in the view, otherwise the
  /// view's first entry.
  pub fn resolve<'m>(&self, view: &[&'m Message]) -> Option<&'m Message> {
    self
      .selected_id
      .as_deref()
      .and_then(|id| view.iter().find(|m| m.id == id))
      .or_else(|| view.first())
      .copied()
  }
}
