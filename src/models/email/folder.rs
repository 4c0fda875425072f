//! Mailbox folder a message is filed under.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Folder of a message.
///
/// Scenario files may carry folder names outside the five known ones; those
/// are kept verbatim in `Other` and never show up under any navigable folder.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Folder {
    Inbox,
    Sent,
    Archive,
    Spam,
    Trash,
    Other(String),
}

impl Folder {
    /// The five folders every mailbox knows about.
    pub const KNOWN: [Folder; 5] = [
        Folder::Inbox,
        Folder::Sent,
        Folder::Archive,
        Folder::Spam,
        Folder::Trash,
    ];

    /// Folders with a navigation entry. Spam is counted but not reachable.
    pub const NAVIGABLE: [Folder; 4] = [Folder::Inbox, Folder::Sent, Folder::Archive, Folder::Trash];

    pub fn as_str(&self) -> &str {
        match self {
            Folder::Inbox => "Inbox",
            Folder::Sent => "Sent",
            Folder::Archive => "Archive",
            Folder::Spam => "Spam",
            Folder::Trash => "Trash",
            Folder::Other(name) => name,
        }
    }

    pub fn is_navigable(&self) -> bool {
        Self::NAVIGABLE.contains(self)
    }
}

impl From<String> for Folder {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Inbox" => Folder::Inbox,
            "Sent" => Folder::Sent,
            "Archive" => Folder::Archive,
            "Spam" => Folder::Spam,
            "Trash" => Folder::Trash,
            _ => Folder::Other(name),
        }
    }
}

impl From<&str> for Folder {
    fn from(name: &str) -> Self {
        Folder::from(name.to_string())
    }
}

impl From<Folder> for String {
    fn from(folder: Folder) -> Self {
        match folder {
            Folder::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
