//! Item identity and the record types shown in the demo lists.

use serde::Deserialize;
use std::fmt;

/// Stable unique identifier of a list item.
///
/// Rendering surfaces key their retained rows by this id, never by
/// position, so inserts and removals above the window don't remount rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Integer identifier.
    Int(u64),
    /// String identifier.
    Str(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Str(id) => f.write_str(id),
        }
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::Str(id.to_string())
    }
}

/// Anything that can be placed in a virtualized list.
///
/// The windowing engine never looks at item content; only the id is needed
/// so the rendering surface can reuse rows.
pub trait Item {
    /// Stable identifier of this item.
    fn id(&self) -> ItemId;
}

/// Account status shown as a coloured tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Active account.
    Active,
    /// Disabled account.
    Inactive,
    /// Awaiting approval.
    Pending,
}

impl Status {
    /// All statuses in generation order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Pending];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }
}

/// Row of the basic demo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoItem {
    /// 1-based identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Role name.
    pub role: &'static str,
    /// Account status.
    pub status: Status,
}

impl Item for DemoItem {
    fn id(&self) -> ItemId {
        ItemId::Int(self.id)
    }
}

/// Row of the user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserItem {
    /// 1-based identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Role name.
    pub role: &'static str,
    /// Account status.
    pub status: Status,
}

impl UserItem {
    /// First character of the name, used in place of an avatar image.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

impl Item for UserItem {
    fn id(&self) -> ItemId {
        ItemId::Int(self.id)
    }
}

/// Row of the product list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductItem {
    /// 1-based identifier.
    pub id: u64,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Category name.
    pub category: &'static str,
    /// Units in stock.
    pub stock: u32,
    /// One-line description.
    pub description: String,
}

impl ProductItem {
    /// Whether the product can be ordered.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl Item for ProductItem {
    fn id(&self) -> ItemId {
        ItemId::Int(self.id)
    }
}

/// Arbitrary record loaded from a JSONL file.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordItem {
    /// Identifier taken from the record's `id` field.
    pub id: ItemId,
    /// Human readable label.
    pub label: String,
    /// Remaining fields of the record.
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Item for RecordItem {
    fn id(&self) -> ItemId {
        self.id.clone()
    }
}
