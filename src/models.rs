//! Frontend Models
//!
//! Data structures matching backend entities, plus the write payloads sent
//! on create/update.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ========================
// Entities
// ========================

/// Stock level of an inventory item on the 86 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "ok")]
    Ok,
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "86")]
    EightySix,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [StockStatus::Ok, StockStatus::Low, StockStatus::EightySix];

    /// Wire value ("ok", "low", "86")
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Ok => "ok",
            StockStatus::Low => "low",
            StockStatus::EightySix => "86",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Ok => "OK",
            StockStatus::Low => "Low Stock",
            StockStatus::EightySix => "86'd",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Menu item as embedded in an inventory row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuRef {
    pub item_id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    pub allergy_flags: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Inventory row (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub item_id: String,
    pub status: StockStatus,
    pub notes: Option<String>,
    pub expected_back: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub menu_item: Option<MenuRef>,
}

impl InventoryItem {
    /// Name shown in lists; falls back to the item code when the backend
    /// did not join a menu item.
    pub fn display_name(&self) -> &str {
        self.menu_item
            .as_ref()
            .map(|m| m.name.as_str())
            .unwrap_or(&self.item_id)
    }
}

/// Customer review (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(alias = "id", deserialize_with = "string_or_number")]
    pub review_id: String,
    pub source: String,
    pub rating: u8,
    /// Nullable column; only the brief endpoint substitutes a placeholder
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Shift change / announcement (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub change_id: String,
    pub title: String,
    pub detail: Option<String>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Menu item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub item_id: String,
    pub name: String,
    pub price: f64,
    pub allergy_flags: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Pre-shift brief, composed server-side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefData {
    pub date: String,
    #[serde(default)]
    pub eighty_six_items: Vec<InventoryItem>,
    #[serde(default)]
    pub low_stock_items: Vec<InventoryItem>,
    #[serde(default)]
    pub recent_reviews: Vec<Review>,
    #[serde(default)]
    pub changes: Vec<Change>,
    pub generated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub menu_count: u32,
    pub inventory_count: u32,
    pub reviews_count: u32,
    pub changes_count: u32,
}

/// Response of the fixture injection endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjectSummary {
    #[serde(default)]
    pub message: String,
    pub menu_count: u32,
    pub inventory_count: u32,
    pub reviews_count: u32,
    pub changes_count: u32,
}

/// Response of the clear endpoint. `total_deleted` is a count on some
/// backend versions and a phrase ("all records") on others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearSummary {
    #[serde(default)]
    pub message: String,
    pub total_deleted: serde_json::Value,
}

impl ClearSummary {
    pub fn total_deleted_text(&self) -> String {
        match &self.total_deleted {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Response of the CSV upload endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadSummary {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "count", alias = "imported")]
    pub rows: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ping {
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

// ========================
// Write Payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryDraft {
    pub item_id: String,
    pub status: StockStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_back: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StockStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_back: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeDraft {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChangeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuDraft {
    pub item_id: String,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergy_flags: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergy_flags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

fn default_true() -> bool {
    true
}

/// Review ids arrive as strings from the review adapters and as integer
/// primary keys from the database-backed endpoints.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
    })
}
