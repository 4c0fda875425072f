//! Persistent message store.
//!
//! The store owns the message collection and writes the whole of it back
//! under a single key after every successful mutation. Persistence is
//! best-effort: read failures fall back to the bootstrap sample, write
//! failures are logged and the in-memory collection stays authoritative.

use super::sample;
use crate::{error::Result, models::email::message::Message};
use std::{collections::HashMap, future::Future, sync::Mutex};
use tracing::{debug, warn};

/// Key-value backend holding the serialized collection.
pub trait Storage: Send + Sync {
  fn load(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;
  fn save(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;
}

/// In-process storage, used by tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  entries: Mutex<HashMap<String, String>>,
  reject_writes: Mutex<bool>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Storage pre-seeded with one entry.
  pub fn with_entry(key: &str, value: &str) -> Self {
    let storage = Self::default();
    storage.put(key, value);
    storage
  }

  pub fn get(&self, key: &str) -> Option<String> {
    self.entries.lock().ok()?.get(key).cloned()
  }

  pub fn put(&self, key: &str, value: &str) {
    if let Ok(mut entries) = self.entries.lock() {
      entries.insert(key.to_string(), value.to_string());
    }
  }

  /// Make every subsequent save fail, as a full browser quota would.
  pub fn set_reject_writes(&self, reject: bool) {
    if let Ok(mut flag) = self.reject_writes.lock() {
      *flag = reject;
    }
  }
}

impl Storage for MemoryStorage {
  async fn load(&self, key: &str) -> Result<Option<String>> {
    Ok(self.get(key))
  }

  async fn save(&self, key: &str, value: &str) -> Result<()> {
    let rejected = self.reject_writes.lock().map(|f| *f).unwrap_or(false);
    if rejected {
      return Err(crate::error::Error::Unavailable("quota exceeded".into()));
    }
    self.put(key, value);
    Ok(())
  }
}

impl<S: Storage> Storage for std::sync::Arc<S> {
  fn load(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send {
    S::load(self, key)
  }

  fn save(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send {
    S::save(self, key, value)
  }
}

pub struct Store<S> {
  storage: S,
  key: String,
  messages: Vec<Message>,
}

impl<S: Storage> Store<S> {
  /// Read the collection from storage. Never fails: a missing key, a
  /// storage error or unreadable JSON all yield a fresh bootstrap sample.
  pub async fn load(storage: S, key: impl Into<String>) -> Self {
    let key = key.into();
    let restored = match storage.load(&key).await {
      Ok(Some(raw)) => match serde_json::from_str::<Vec<Message>>(&raw) {
        Ok(messages) => Some(messages),
        Err(e) => {
          warn!("stored messages under '{key}' are unreadable, using sample: {e}");
          None
        }
      },
      Ok(None) => {
        debug!("no stored messages under '{key}', using sample");
        None
      }
      Err(e) => {
        warn!("could not read stored messages, using sample: {e}");
        None
      }
    };
    let fresh = restored.is_none();
    let store = Store {
      storage,
      key,
      messages: restored.unwrap_or_else(sample::sample_messages),
    };
    if fresh {
      store.save().await;
    }
    store
  }

  pub fn messages(&self) -> &[Message] {
    &self.messages
  }

  pub fn get(&self, id: &str) -> Option<&Message> {
    self.messages.iter().find(|m| m.id == id)
  }

  pub fn storage(&self) -> &S {
    &self.storage
  }

  /// Swap in a whole new collection (import, reset).
  pub async fn replace_all(&mut self, messages: Vec<Message>) {
    self.messages = messages;
    self.save().await;
  }

  /// Apply `update` to the message with `id`. Returns false, without
  /// touching storage, when no such message exists.
  pub async fn mutate_one<F>(&mut self, id: &str, update: F) -> bool
  where
    F: FnOnce(&mut Message),
  {
    let Some(message) = self.messages.iter_mut().find(|m| m.id == id) else {
      debug!("mutation for unknown message {id} ignored");
      return false;
    };
    update(message);
    self.save().await;
    true
  }

  async fn save(&self) {
    let raw = match serde_json::to_string_pretty(&self.messages) {
      Ok(raw) => raw,
      Err(e) => {
        warn!("could not serialize messages: {e}");
        return;
      }
    };
    if let Err(e) = self.storage.save(&self.key, &raw).await {
      warn!("could not persist messages under '{}': {e}", self.key);
    }
  }
}
