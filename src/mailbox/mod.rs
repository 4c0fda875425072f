//! Mailbox view model: the message store plus the reader's current folder,
//! search query, unread filter and selection.
//!
//! Every action mutates through the [`Store`] (which persists) and then
//! reconciles the selection against the freshly derived view.

pub mod sample;
pub mod scenario;
pub mod selection;
pub mod store;
pub mod view;

pub use scenario::ImportError;
pub use selection::Selection;
pub use store::{MemoryStorage, Storage, Store};

use crate::models::email::{folder::Folder, message::Message};
use tracing::info;
use view::{UnreadCounts, ViewFilter, derive_view};

pub struct Mailbox<S> {
  store: Store<S>,
  folder: Folder,
  query: String,
  unread_only: bool,
  selection: Selection,
}

impl<S: Storage> Mailbox<S> {
  /// Open the mailbox stored under `key`, falling back to the sample.
  pub async fn open(storage: S, key: impl Into<String>) -> Self {
    Self::from_store(Store::load(storage, key).await)
  }

  pub fn from_store(store: Store<S>) -> Self {
    let mut mailbox = Mailbox {
      store,
      folder: Folder::Inbox,
      query: String::new(),
      unread_only: false,
      selection: Selection::default(),
    };
    mailbox.reconcile();
    mailbox
  }

  pub fn store(&self) -> &Store<S> {
    &self.store
  }

  pub fn messages(&self) -> &[Message] {
    self.store.messages()
  }

  pub fn message(&self, id: &str) -> Option<&Message> {
    self.store.get(id)
  }

  pub fn folder(&self) -> &Folder {
    &self.folder
  }

  pub fn query(&self) -> &str {
    &self.query
  }

  pub fn unread_only(&self) -> bool {
    self.unread_only
  }

  pub fn selected_id(&self) -> Option<&str> {
    self.selection.id()
  }

  fn filter(&self) -> ViewFilter<'_> {
    ViewFilter {
      folder: &self.folder,
      query: &self.query,
      unread_only: self.unread_only,
    }
  }

  /// Current list pane contents.
  pub fn view(&self) -> Vec<&Message> {
    derive_view(self.store.messages(), &self.filter())
  }

  pub fn unread_counts(&self) -> UnreadCounts {
    UnreadCounts::tally(self.store.messages())
  }

  /// Message shown in the reading pane.
  pub fn selected(&self) -> Option<&Message> {
    self.selection.resolve(&self.view())
  }

  fn reconcile(&mut self) {
    let filter = ViewFilter {
      folder: &self.folder,
      query: &self.query,
      unread_only: self.unread_only,
    };
    let view = derive_view(self.store.messages(), &filter);
    self.selection.reconcile(&view);
  }

  /// Navigate to `folder`; the selection restarts at its newest message.
  pub fn switch_folder(&mut self, folder: Folder) {
    self.folder = folder;
    self.selection.clear();
    self.reconcile();
  }

  pub fn set_query(&mut self, query: impl Into<String>) {
    self.query = query.into();
    self.reconcile();
  }

  pub fn set_unread_only(&mut self, unread_only: bool) {
    self.unread_only = unread_only;
    self.reconcile();
  }

  /// Select a message and mark it read in one step.
  pub async fn open_message(&mut self, id: &str) -> bool {
    let Some(message) = self.store.get(id) else {
      return false;
    };
    let was_unread = message.unread;
    self.selection.select(id);
    if was_unread {
      self.store.mutate_one(id, |m| m.unread = false).await;
    }
    self.reconcile();
    true
  }

  pub async fn mark_read(&mut self, id: &str, unread: bool) -> bool {
    self.mutate(id, |m| m.unread = unread).await
  }

  pub async fn toggle_star(&mut self, id: &str) -> bool {
    self.mutate(id, |m| m.starred = !m.starred).await
  }

  pub async fn move_to(&mut self, id: &str, destination: Folder) -> bool {
    self.mutate(id, |m| m.folder = destination).await
  }

  /// Delete is a move to Trash; nothing is ever purged.
  pub async fn remove(&mut self, id: &str) -> bool {
    self.move_to(id, Folder::Trash).await
  }

  pub async fn restore(&mut self, id: &str) -> bool {
    self.move_to(id, Folder::Inbox).await
  }

  async fn mutate<F>(&mut self, id: &str, update: F) -> bool
  where
    F: FnOnce(&mut Message),
  {
    let changed = self.store.mutate_one(id, update).await;
    self.reconcile();
    changed
  }

  /// Replace the collection with a scenario. On error nothing changes.
  pub async fn import_scenario(&mut self, raw: &str) -> Result<usize, ImportError> {
    let messages = scenario::parse_scenario(raw)?;
    let count = messages.len();
    self.store.replace_all(messages).await;
    info!("imported scenario with {count} messages");
    self.switch_folder(Folder::Inbox);
    Ok(count)
  }

  pub fn export_scenario(&self) -> Result<String, serde_json::Error> {
    scenario::export_scenario(self.store.messages())
  }

  /// Back to the bootstrap sample, with ids never seen before.
  pub async fn reset_to_sample(&mut self) {
    self.store.replace_all(sample::sample_messages()).await;
    info!("mailbox reset to sample scenario");
    self.switch_folder(Folder::Inbox);
  }
}
