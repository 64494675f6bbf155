//! In-memory backend for tests
//!
//! Implements every API trait over a small fixture store and records each
//! call in order, so tests can assert exactly which requests a flow issued.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::api::{AdminApi, BriefApi, ChangeApi, InventoryApi, MenuApi, ReviewApi};
use crate::error::ApiError;
use crate::models::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListInventory,
    CreateInventory(String),
    UpdateInventory(u32),
    DeleteInventory(u32),
    UploadInventory(String),
    ListReviews(u32),
    ListChanges,
    CreateChange(String),
    UpdateChange(String),
    DeleteChange(String),
    ListMenu,
    CreateMenuItem(String),
    UpdateMenuItem(String),
    DeleteMenuItem(String),
    GetBrief,
    DownloadBriefPdf,
    AdminStats,
    InjectData,
    ClearData,
    ExportData,
}

#[derive(Default)]
struct Store {
    inventory: Vec<InventoryItem>,
    menu: Vec<MenuItem>,
    reviews: Vec<Review>,
    changes: Vec<Change>,
}

#[derive(Default)]
pub struct FakeBackend {
    store: RefCell<Store>,
    calls: RefCell<Vec<Call>>,
    fail_next: RefCell<Option<(usize, String)>>,
}

pub fn menu_item(item_id: &str, name: &str, price: f64) -> MenuItem {
    MenuItem {
        item_id: item_id.to_string(),
        name: name.to_string(),
        price,
        allergy_flags: None,
        active: true,
        created_at: None,
        updated_at: None,
    }
}

pub fn inventory_item(id: u32, item_id: &str, status: StockStatus) -> InventoryItem {
    InventoryItem {
        id,
        item_id: item_id.to_string(),
        status,
        notes: None,
        expected_back: None,
        updated_at: Some("2024-01-15T10:00:00".to_string()),
        menu_item: None,
    }
}

pub fn review(id: &str, source: &str, rating: u8) -> Review {
    Review {
        review_id: id.to_string(),
        source: source.to_string(),
        rating,
        text: Some(format!("Review {}", id)),
        created_at: Some("2024-01-15T10:00:00".to_string()),
        theme: None,
        url: None,
    }
}

pub fn change(id: &str, title: &str, active: bool) -> Change {
    Change {
        change_id: id.to_string(),
        title: title.to_string(),
        detail: Some(format!("{} details", title)),
        created_by: "Manager".to_string(),
        created_at: Some("2024-01-15T09:00:00".to_string()),
        is_active: active,
    }
}

impl FakeBackend {
    pub fn with_sample_data() -> Self {
        let backend = Self::default();
        {
            let mut store = backend.store.borrow_mut();
            store.menu = vec![
                menu_item("CHK-001", "Grilled Chicken", 18.0),
                menu_item("BEEF-001", "Ribeye Steak", 32.0),
                menu_item("FISH-002", "Salmon Fillet", 26.0),
                menu_item("VEG-001", "Asparagus", 8.0),
            ];
            store.inventory = vec![
                inventory_item(1, "CHK-001", StockStatus::EightySix),
                inventory_item(2, "BEEF-001", StockStatus::Low),
                inventory_item(3, "FISH-002", StockStatus::Ok),
            ];
            store.reviews = vec![review("1", "Google", 5), review("2", "Google", 3), review("3", "Yelp", 4)];
            store.changes = vec![
                change("chg-1", "New Menu Item", true),
                change("chg-2", "Kitchen Hours", true),
            ];
        }
        backend
    }

    /// Calls recorded so far, in issue order
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Make the next call fail with a 500 carrying `detail`
    pub fn fail_next(&self, detail: &str) {
        self.fail_after(0, detail);
    }

    /// Let `skip` calls through, then fail the one after
    pub fn fail_after(&self, skip: usize, detail: &str) {
        *self.fail_next.borrow_mut() = Some((skip, detail.to_string()));
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        let mut pending = self.fail_next.borrow_mut();
        match pending.as_mut() {
            Some((0, _)) => match pending.take() {
                Some((_, detail)) => Err(ApiError::Status { status: 500, detail }),
                None => Ok(()),
            },
            Some((skip, _)) => {
                *skip -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn stats(&self) -> AdminStats {
        let store = self.store.borrow();
        AdminStats {
            menu_count: store.menu.len() as u32,
            inventory_count: store.inventory.len() as u32,
            reviews_count: store.reviews.len() as u32,
            changes_count: store.changes.len() as u32,
        }
    }

    fn not_found(what: &str) -> ApiError {
        ApiError::Status { status: 404, detail: format!("{} not found", what) }
    }
}

#[async_trait(?Send)]
impl InventoryApi for FakeBackend {
    async fn list_inventory(&self) -> Result<Vec<InventoryItem>, ApiError> {
        self.record(Call::ListInventory)?;
        Ok(self.store.borrow().inventory.clone())
    }

    async fn create_inventory(&self, draft: &InventoryDraft) -> Result<InventoryItem, ApiError> {
        self.record(Call::CreateInventory(draft.item_id.clone()))?;
        let mut store = self.store.borrow_mut();
        let id = store.inventory.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let item = InventoryItem {
            notes: draft.notes.clone(),
            expected_back: draft.expected_back.clone(),
            ..inventory_item(id, &draft.item_id, draft.status)
        };
        store.inventory.push(item.clone());
        Ok(item)
    }

    async fn update_inventory(&self, id: u32, update: &InventoryUpdate) -> Result<InventoryItem, ApiError> {
        self.record(Call::UpdateInventory(id))?;
        let mut store = self.store.borrow_mut();
        let item = store
            .inventory
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Self::not_found("Inventory item"))?;
        if let Some(status) = update.status {
            item.status = status;
        }
        if let Some(notes) = &update.notes {
            item.notes = Some(notes.clone());
        }
        item.expected_back = update.expected_back.clone();
        Ok(item.clone())
    }

    async fn delete_inventory(&self, id: u32) -> Result<(), ApiError> {
        self.record(Call::DeleteInventory(id))?;
        self.store.borrow_mut().inventory.retain(|i| i.id != id);
        Ok(())
    }

    async fn upload_inventory_csv(&self, file_name: &str, contents: Vec<u8>) -> Result<UploadSummary, ApiError> {
        self.record(Call::UploadInventory(file_name.to_string()))?;
        let rows = String::from_utf8_lossy(&contents).lines().skip(1).count() as u32;
        Ok(UploadSummary { message: Some("Upload processed".to_string()), rows: Some(rows) })
    }
}

#[async_trait(?Send)]
impl ReviewApi for FakeBackend {
    async fn list_reviews(&self, days: u32) -> Result<Vec<Review>, ApiError> {
        self.record(Call::ListReviews(days))?;
        Ok(self.store.borrow().reviews.clone())
    }
}

#[async_trait(?Send)]
impl ChangeApi for FakeBackend {
    async fn list_changes(&self) -> Result<Vec<Change>, ApiError> {
        self.record(Call::ListChanges)?;
        Ok(self.store.borrow().changes.clone())
    }

    async fn create_change(&self, draft: &ChangeDraft) -> Result<Change, ApiError> {
        self.record(Call::CreateChange(draft.title.clone()))?;
        let mut store = self.store.borrow_mut();
        let id = format!("chg-{}", store.changes.len() + 1);
        let created = Change {
            detail: Some(draft.detail.clone()),
            ..change(&id, &draft.title, true)
        };
        store.changes.push(created.clone());
        Ok(created)
    }

    async fn update_change(&self, change_id: &str, update: &ChangeUpdate) -> Result<Change, ApiError> {
        self.record(Call::UpdateChange(change_id.to_string()))?;
        let mut store = self.store.borrow_mut();
        let change = store
            .changes
            .iter_mut()
            .find(|c| c.change_id == change_id)
            .ok_or_else(|| Self::not_found("Change"))?;
        if let Some(title) = &update.title {
            change.title = title.clone();
        }
        if let Some(detail) = &update.detail {
            change.detail = Some(detail.clone());
        }
        if let Some(active) = update.is_active {
            change.is_active = active;
        }
        Ok(change.clone())
    }

    async fn delete_change(&self, change_id: &str) -> Result<(), ApiError> {
        self.record(Call::DeleteChange(change_id.to_string()))?;
        self.store.borrow_mut().changes.retain(|c| c.change_id != change_id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl MenuApi for FakeBackend {
    async fn list_menu(&self) -> Result<Vec<MenuItem>, ApiError> {
        self.record(Call::ListMenu)?;
        Ok(self.store.borrow().menu.clone())
    }

    async fn create_menu_item(&self, draft: &MenuDraft) -> Result<MenuItem, ApiError> {
        self.record(Call::CreateMenuItem(draft.item_id.clone()))?;
        let created = MenuItem {
            allergy_flags: draft.allergy_flags.clone(),
            active: draft.active,
            ..menu_item(&draft.item_id, &draft.name, draft.price)
        };
        self.store.borrow_mut().menu.push(created.clone());
        Ok(created)
    }

    async fn update_menu_item(&self, item_id: &str, update: &MenuUpdate) -> Result<MenuItem, ApiError> {
        self.record(Call::UpdateMenuItem(item_id.to_string()))?;
        let mut store = self.store.borrow_mut();
        let item = store
            .menu
            .iter_mut()
            .find(|m| m.item_id == item_id)
            .ok_or_else(|| Self::not_found("Menu item"))?;
        if let Some(active) = update.active {
            item.active = active;
        }
        if let Some(name) = &update.name {
            item.name = name.clone();
        }
        if let Some(price) = update.price {
            item.price = price;
        }
        Ok(item.clone())
    }

    async fn delete_menu_item(&self, item_id: &str) -> Result<(), ApiError> {
        self.record(Call::DeleteMenuItem(item_id.to_string()))?;
        self.store.borrow_mut().menu.retain(|m| m.item_id != item_id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl BriefApi for FakeBackend {
    async fn get_brief(&self) -> Result<BriefData, ApiError> {
        self.record(Call::GetBrief)?;
        let store = self.store.borrow();
        let with_status = |status: StockStatus| {
            store.inventory.iter().filter(|i| i.status == status).cloned().collect::<Vec<_>>()
        };
        Ok(BriefData {
            date: "2024-01-15".to_string(),
            eighty_six_items: with_status(StockStatus::EightySix),
            low_stock_items: with_status(StockStatus::Low),
            recent_reviews: store.reviews.clone(),
            changes: store.changes.iter().filter(|c| c.is_active).cloned().collect(),
            generated_at: "2024-01-15T07:30:00".to_string(),
        })
    }

    async fn download_brief_pdf(&self) -> Result<Vec<u8>, ApiError> {
        self.record(Call::DownloadBriefPdf)?;
        Ok(b"%PDF-1.4".to_vec())
    }
}

#[async_trait(?Send)]
impl AdminApi for FakeBackend {
    async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.record(Call::AdminStats)?;
        Ok(self.stats())
    }

    async fn inject_data(&self) -> Result<InjectSummary, ApiError> {
        self.record(Call::InjectData)?;
        let stats = self.stats();
        Ok(InjectSummary {
            message: "Test data injected successfully".to_string(),
            menu_count: stats.menu_count,
            inventory_count: stats.inventory_count,
            reviews_count: stats.reviews_count,
            changes_count: stats.changes_count,
        })
    }

    async fn clear_data(&self) -> Result<ClearSummary, ApiError> {
        self.record(Call::ClearData)?;
        *self.store.borrow_mut() = Store::default();
        Ok(ClearSummary {
            message: "All data cleared successfully".to_string(),
            total_deleted: serde_json::Value::String("all records".to_string()),
        })
    }

    async fn export_data(&self) -> Result<Vec<u8>, ApiError> {
        self.record(Call::ExportData)?;
        let stats = self.stats();
        serde_json::to_vec(&stats).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
