//! Mutation Flows
//!
//! What a view does when the user acts: validate, issue the one mutating
//! call, then re-fetch the owning collection in full. Nothing is patched
//! locally; the refetched list is the new view state.
//!
//! Only the mutating call decides success. A failed refetch is logged and
//! comes back as `None`, leaving the view on its current state.

use futures::join;

use crate::api::{AdminApi, ChangeApi, InventoryApi, MenuApi};
use crate::error::{ActionError, ApiError};
use crate::forms::{ChangeForm, InventoryEditForm, InventoryForm, MenuForm};
use crate::models::{
    AdminStats, Change, ChangeUpdate, ClearSummary, InjectSummary, InventoryItem, MenuItem, MenuUpdate, UploadSummary,
};

/// Outcome of the follow-up fetch after a committed mutation
async fn refetch<T, F>(tag: &str, fetch: F) -> Option<T>
where
    F: std::future::Future<Output = Result<T, ApiError>>,
{
    match fetch.await {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("[{}] Refetch after mutation failed: {}", tag, e);
            None
        }
    }
}

// ========================
// Inventory
// ========================

/// Inventory and menu lookup, fetched in parallel. Both must succeed.
pub async fn load_inventory_board<A>(api: &A) -> Result<(Vec<InventoryItem>, Vec<MenuItem>), ApiError>
where
    A: InventoryApi + MenuApi,
{
    let (items, menu) = join!(api.list_inventory(), api.list_menu());
    Ok((items?, menu?))
}

pub async fn create_inventory<A>(api: &A, form: &InventoryForm) -> Result<Option<Vec<InventoryItem>>, ActionError>
where
    A: InventoryApi,
{
    let draft = form.validate()?;
    let created = api.create_inventory(&draft).await?;
    log::info!("[Inventory] Created #{} ({})", created.id, created.item_id);
    Ok(refetch("Inventory", api.list_inventory()).await)
}

pub async fn update_inventory<A>(
    api: &A,
    id: u32,
    form: &InventoryEditForm,
) -> Result<Option<Vec<InventoryItem>>, ActionError>
where
    A: InventoryApi,
{
    api.update_inventory(id, &form.to_update()).await?;
    log::info!("[Inventory] Updated #{}", id);
    Ok(refetch("Inventory", api.list_inventory()).await)
}

pub async fn delete_inventory<A>(api: &A, id: u32) -> Result<Option<Vec<InventoryItem>>, ActionError>
where
    A: InventoryApi,
{
    api.delete_inventory(id).await?;
    log::info!("[Inventory] Deleted #{}", id);
    Ok(refetch("Inventory", api.list_inventory()).await)
}

pub async fn upload_inventory<A>(
    api: &A,
    file_name: &str,
    contents: Vec<u8>,
) -> Result<(UploadSummary, Option<Vec<InventoryItem>>), ActionError>
where
    A: InventoryApi,
{
    let summary = api.upload_inventory_csv(file_name, contents).await?;
    log::info!("[Inventory] Uploaded {}", file_name);
    let items = refetch("Inventory", api.list_inventory()).await;
    Ok((summary, items))
}

// ========================
// Changes
// ========================

pub async fn create_change<A>(api: &A, form: &ChangeForm) -> Result<Option<Vec<Change>>, ActionError>
where
    A: ChangeApi,
{
    let draft = form.validate()?;
    let created = api.create_change(&draft).await?;
    log::info!("[Changes] Created {}", created.change_id);
    Ok(refetch("Changes", api.list_changes()).await)
}

pub async fn edit_change<A>(api: &A, change_id: &str, form: &ChangeForm) -> Result<Option<Vec<Change>>, ActionError>
where
    A: ChangeApi,
{
    let update = form.validate_update()?;
    api.update_change(change_id, &update).await?;
    log::info!("[Changes] Edited {}", change_id);
    Ok(refetch("Changes", api.list_changes()).await)
}

/// Flip `is_active` on the backend, then refetch
pub async fn set_change_active<A>(api: &A, change_id: &str, active: bool) -> Result<Option<Vec<Change>>, ActionError>
where
    A: ChangeApi,
{
    let update = ChangeUpdate {
        is_active: Some(active),
        ..Default::default()
    };
    api.update_change(change_id, &update).await?;
    log::info!("[Changes] {} is_active={}", change_id, active);
    Ok(refetch("Changes", api.list_changes()).await)
}

pub async fn delete_change<A>(api: &A, change_id: &str) -> Result<Option<Vec<Change>>, ActionError>
where
    A: ChangeApi,
{
    api.delete_change(change_id).await?;
    log::info!("[Changes] Deleted {}", change_id);
    Ok(refetch("Changes", api.list_changes()).await)
}

// ========================
// Menu
// ========================

pub async fn create_menu_item<A>(api: &A, form: &MenuForm) -> Result<Option<Vec<MenuItem>>, ActionError>
where
    A: MenuApi,
{
    let draft = form.validate()?;
    let created = api.create_menu_item(&draft).await?;
    log::info!("[Menu] Created {}", created.item_id);
    Ok(refetch("Menu", api.list_menu()).await)
}

pub async fn set_menu_item_active<A>(api: &A, item_id: &str, active: bool) -> Result<Option<Vec<MenuItem>>, ActionError>
where
    A: MenuApi,
{
    let update = MenuUpdate {
        active: Some(active),
        ..Default::default()
    };
    api.update_menu_item(item_id, &update).await?;
    Ok(refetch("Menu", api.list_menu()).await)
}

pub async fn delete_menu_item<A>(api: &A, item_id: &str) -> Result<Option<Vec<MenuItem>>, ActionError>
where
    A: MenuApi,
{
    api.delete_menu_item(item_id).await?;
    log::info!("[Menu] Deleted {}", item_id);
    Ok(refetch("Menu", api.list_menu()).await)
}

// ========================
// Admin
// ========================

/// Seed fixtures, then refresh the counts panel
pub async fn inject_data<A>(api: &A) -> Result<(InjectSummary, Option<AdminStats>), ApiError>
where
    A: AdminApi,
{
    let summary = api.inject_data().await?;
    let stats = refetch("Admin", api.admin_stats()).await;
    Ok((summary, stats))
}

/// Wipe the store, then refresh the counts panel
pub async fn clear_data<A>(api: &A) -> Result<(ClearSummary, Option<AdminStats>), ApiError>
where
    A: AdminApi,
{
    let summary = api.clear_data().await?;
    let stats = refetch("Admin", api.admin_stats()).await;
    Ok((summary, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;
    use crate::testing::{Call, FakeBackend};
    use crate::models::StockStatus;

    #[tokio::test]
    async fn test_delete_issues_one_delete_then_one_refetch() {
        let api = FakeBackend::with_sample_data();

        let items = delete_inventory(&api, 2).await.expect("delete failed").expect("refetch failed");

        assert_eq!(api.calls(), vec![Call::DeleteInventory(2), Call::ListInventory]);
        assert!(items.iter().all(|i| i.id != 2));
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_create_with_missing_fields_issues_no_call() {
        let api = FakeBackend::with_sample_data();
        let form = InventoryForm { status: StockStatus::Low, ..Default::default() };

        let result = create_inventory(&api, &form).await;

        assert_eq!(result, Err(ActionError::Form(FormError::Required("Menu item"))));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_change_with_blank_title_issues_no_call() {
        let api = FakeBackend::with_sample_data();
        let form = ChangeForm { title: "  ".to_string(), detail: "Kitchen closes at 10 PM".to_string() };

        assert!(create_change(&api, &form).await.is_err());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_inventory_refetches() {
        let api = FakeBackend::with_sample_data();
        let form = InventoryForm {
            item_id: "VEG-001".to_string(),
            status: StockStatus::Low,
            notes: "Running low".to_string(),
            ..Default::default()
        };

        let items = create_inventory(&api, &form).await.unwrap().unwrap();

        assert_eq!(api.calls(), vec![Call::CreateInventory("VEG-001".to_string()), Call::ListInventory]);
        assert_eq!(items.len(), 4);
        assert_eq!(items.last().map(|i| i.status), Some(StockStatus::Low));
    }

    #[tokio::test]
    async fn test_failed_delete_skips_refetch_and_surfaces_detail() {
        let api = FakeBackend::with_sample_data();
        api.fail_next("Inventory item not found");

        let err = delete_inventory(&api, 99).await.unwrap_err();

        assert_eq!(err.to_string(), "Inventory item not found");
        assert_eq!(api.calls(), vec![Call::DeleteInventory(99)]);
    }

    #[tokio::test]
    async fn test_toggle_change_persists_then_refetches() {
        let api = FakeBackend::with_sample_data();

        let changes = set_change_active(&api, "chg-1", false).await.unwrap().unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::UpdateChange("chg-1".to_string()), Call::ListChanges]
        );
        let toggled = changes.iter().find(|c| c.change_id == "chg-1").unwrap();
        assert!(!toggled.is_active);
    }

    #[tokio::test]
    async fn test_delete_change_removes_it() {
        let api = FakeBackend::with_sample_data();

        let changes = delete_change(&api, "chg-2").await.unwrap().unwrap();

        assert_eq!(api.calls(), vec![Call::DeleteChange("chg-2".to_string()), Call::ListChanges]);
        assert!(changes.iter().all(|c| c.change_id != "chg-2"));
    }

    #[tokio::test]
    async fn test_load_board_waits_for_both_collections() {
        let api = FakeBackend::with_sample_data();

        let (items, menu) = load_inventory_board(&api).await.unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(menu.len(), 4);
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_load_board_fails_if_either_fails() {
        let api = FakeBackend::with_sample_data();
        api.fail_next("database unavailable");

        assert!(load_inventory_board(&api).await.is_err());
    }

    #[tokio::test]
    async fn test_menu_create_validates_price_before_call() {
        let api = FakeBackend::with_sample_data();
        let form = MenuForm {
            item_id: "DES-001".to_string(),
            name: "Cheesecake".to_string(),
            price: "free".to_string(),
            ..Default::default()
        };

        assert!(create_menu_item(&api, &form).await.is_err());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_inject_then_refresh_stats() {
        let api = FakeBackend::with_sample_data();

        let (summary, stats) = inject_data(&api).await.unwrap();

        assert_eq!(api.calls(), vec![Call::InjectData, Call::AdminStats]);
        assert_eq!(Some(summary.inventory_count), stats.map(|s| s.inventory_count));
    }

    #[tokio::test]
    async fn test_clear_then_refresh_stats() {
        let api = FakeBackend::with_sample_data();

        let (_, stats) = clear_data(&api).await.unwrap();

        assert_eq!(api.calls(), vec![Call::ClearData, Call::AdminStats]);
        assert_eq!(stats, Some(AdminStats::default()));
    }

    #[tokio::test]
    async fn test_delete_succeeds_even_if_refetch_fails() {
        let api = FakeBackend::with_sample_data();
        api.fail_after(1, "database unavailable");

        let items = delete_inventory(&api, 2).await.expect("delete itself succeeded");

        assert_eq!(items, None);
        assert_eq!(api.calls(), vec![Call::DeleteInventory(2), Call::ListInventory]);
    }

    #[tokio::test]
    async fn test_upload_summary_survives_refetch_failure() {
        let api = FakeBackend::with_sample_data();
        api.fail_after(1, "database unavailable");

        let (_, items) = upload_inventory(&api, "stock.csv", b"item_id,status\nVEG-001,low\n".to_vec())
            .await
            .expect("upload itself succeeded");

        assert!(items.is_none());
    }

    /// Admin backend whose counts endpoint is down
    struct StatsDown;

    #[async_trait::async_trait(?Send)]
    impl AdminApi for StatsDown {
        async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
            Err(ApiError::Network("stats timed out".to_string()))
        }

        async fn inject_data(&self) -> Result<InjectSummary, ApiError> {
            Ok(InjectSummary {
                message: "Sample data injected".to_string(),
                menu_count: 4,
                inventory_count: 3,
                reviews_count: 3,
                changes_count: 2,
            })
        }

        async fn clear_data(&self) -> Result<ClearSummary, ApiError> {
            Ok(ClearSummary { message: "All data cleared".to_string(), total_deleted: serde_json::json!(12) })
        }

        async fn export_data(&self) -> Result<Vec<u8>, ApiError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_inject_reports_success_when_stats_refresh_fails() {
        let (summary, stats) = inject_data(&StatsDown).await.expect("inject itself succeeded");

        assert_eq!(summary.menu_count, 4);
        assert!(stats.is_none());
    }

    #[tokio::test]
    async fn test_clear_reports_success_when_stats_refresh_fails() {
        let (summary, stats) = clear_data(&StatsDown).await.expect("clear itself succeeded");

        assert_eq!(summary.message, "All data cleared");
        assert!(stats.is_none());
    }
}
