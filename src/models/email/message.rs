//! Scenario message, in the exact shape of the import/export JSON.

use super::folder::Folder;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A named mailbox address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Attachment metadata. Scenarios carry no binary content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    #[serde(rename = "sizeKB")]
    pub size_kb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub subject: String,
    pub from: Contact,
    pub to: Vec<Contact>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<Contact>,
    /// ISO-8601 timestamp, kept as written so unparseable values survive.
    pub date: String,
    pub folder: Folder,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unread: bool,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub starred: bool,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// HTML body, rendered verbatim by the reading pane.
    pub body: String,
    /// Fields this tool does not know about, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Optional fields written as `null` read as their empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Message {
    /// Lowercased haystack for free-text search: subject, sender, body, tags.
    pub fn search_text(&self) -> String {
        let mut parts = vec![
            self.subject.as_str(),
            self.from.name.as_str(),
            self.from.email.as_str(),
            self.body.as_str(),
        ];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" \n ").to_lowercase()
    }

    /// Body with markup stripped and whitespace collapsed, for list snippets.
    pub fn plain_body(&self) -> String {
        let mut out = String::with_capacity(self.body.len());
        let mut in_tag = false;
        for c in self.body.chars() {
            match c {
                '<' => {
                    in_tag = true;
                    out.push(' ');
                }
                '>' => in_tag = false,
                _ if !in_tag => out.push(c),
                _ => {}
            }
        }
        out.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
