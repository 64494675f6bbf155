//! Form State and Validation
//!
//! Raw field values as typed by the user. `validate` turns them into the
//! payload sent to the backend, or a [`FormError`] when a required field is
//! missing, in which case nothing is sent.

use crate::error::FormError;
use crate::models::{
    Change, ChangeDraft, ChangeUpdate, InventoryDraft, InventoryItem, InventoryUpdate, MenuDraft, StockStatus,
};

/// Trimmed value, `None` when blank
fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    optional(value).ok_or(FormError::Required(field))
}

/// New inventory row
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryForm {
    pub item_id: String,
    pub status: StockStatus,
    pub notes: String,
    pub expected_back: String,
}

impl Default for InventoryForm {
    fn default() -> Self {
        Self {
            item_id: String::new(),
            status: StockStatus::Ok,
            notes: String::new(),
            expected_back: String::new(),
        }
    }
}

impl InventoryForm {
    pub fn validate(&self) -> Result<InventoryDraft, FormError> {
        Ok(InventoryDraft {
            item_id: required(&self.item_id, "Menu item")?,
            status: self.status,
            notes: optional(&self.notes),
            expected_back: optional(&self.expected_back),
        })
    }
}

/// Edit of an existing inventory row
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryEditForm {
    pub status: StockStatus,
    pub notes: String,
    pub expected_back: String,
}

impl InventoryEditForm {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            status: item.status,
            notes: item.notes.clone().unwrap_or_default(),
            expected_back: item.expected_back.clone().unwrap_or_default(),
        }
    }

    /// Always sends all three fields so a cleared note is cleared server-side
    pub fn to_update(&self) -> InventoryUpdate {
        InventoryUpdate {
            status: Some(self.status),
            notes: Some(self.notes.trim().to_string()),
            expected_back: optional(&self.expected_back),
        }
    }
}

/// New or edited announcement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeForm {
    pub title: String,
    pub detail: String,
}

impl ChangeForm {
    pub fn from_change(change: &Change) -> Self {
        Self {
            title: change.title.clone(),
            detail: change.detail.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ChangeDraft, FormError> {
        Ok(ChangeDraft {
            title: required(&self.title, "Title")?,
            detail: required(&self.detail, "Details")?,
        })
    }

    pub fn validate_update(&self) -> Result<ChangeUpdate, FormError> {
        let draft = self.validate()?;
        Ok(ChangeUpdate {
            title: Some(draft.title),
            detail: Some(draft.detail),
            is_active: None,
        })
    }
}

/// New menu item
#[derive(Debug, Clone, PartialEq)]
pub struct MenuForm {
    pub item_id: String,
    pub name: String,
    pub price: String,
    pub allergy_flags: String,
    pub active: bool,
}

impl Default for MenuForm {
    fn default() -> Self {
        Self {
            item_id: String::new(),
            name: String::new(),
            price: String::new(),
            allergy_flags: String::new(),
            active: true,
        }
    }
}

impl MenuForm {
    pub fn validate(&self) -> Result<MenuDraft, FormError> {
        let item_id = required(&self.item_id, "Item ID")?;
        let name = required(&self.name, "Name")?;
        let price_text = required(&self.price, "Price")?;
        let price = price_text
            .trim_start_matches('$')
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or(FormError::Invalid { field: "Price", expected: "a non-negative number" })?;

        Ok(MenuDraft {
            item_id,
            name,
            price,
            allergy_flags: optional(&self.allergy_flags),
            active: self.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_form_requires_item() {
        let form = InventoryForm { notes: "Out".to_string(), ..Default::default() };
        assert_eq!(form.validate(), Err(FormError::Required("Menu item")));
    }

    #[test]
    fn test_inventory_form_trims_optional_fields() {
        let form = InventoryForm {
            item_id: " CHK-001 ".to_string(),
            status: StockStatus::EightySix,
            notes: "  ".to_string(),
            expected_back: "2024-01-16".to_string(),
        };
        let draft = form.validate().unwrap();
        assert_eq!(draft.item_id, "CHK-001");
        assert_eq!(draft.notes, None);
        assert_eq!(draft.expected_back.as_deref(), Some("2024-01-16"));
    }

    #[test]
    fn test_change_form_requires_title_and_detail() {
        let missing_title = ChangeForm { title: String::new(), detail: "x".to_string() };
        let missing_detail = ChangeForm { title: "Hours".to_string(), detail: " ".to_string() };
        assert_eq!(missing_title.validate(), Err(FormError::Required("Title")));
        assert_eq!(missing_detail.validate(), Err(FormError::Required("Details")));
    }

    #[test]
    fn test_change_form_update_leaves_active_flag() {
        let form = ChangeForm { title: "Kitchen Hours".to_string(), detail: "Closes at 10".to_string() };
        let update = form.validate_update().unwrap();
        assert_eq!(update.title.as_deref(), Some("Kitchen Hours"));
        assert_eq!(update.is_active, None);
    }

    #[test]
    fn test_menu_form_price_validation() {
        let mut form = MenuForm {
            item_id: "VEG-002".to_string(),
            name: "Vegan Burger".to_string(),
            price: "$14.50".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap().price, 14.5);

        form.price = "-1".to_string();
        assert!(matches!(form.validate(), Err(FormError::Invalid { field: "Price", .. })));

        form.price = "cheap".to_string();
        assert!(form.validate().is_err());

        form.price = String::new();
        assert_eq!(form.validate(), Err(FormError::Required("Price")));
    }
}
