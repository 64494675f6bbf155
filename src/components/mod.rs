//! UI Components
//!
//! One component per page, plus the shared widgets they are built from.

mod view_state;
mod widgets;
mod confirm_button;
mod nav_bar;
mod dashboard_view;
mod brief_view;
mod inventory_view;
mod reviews_view;
mod changes_view;
mod menu_view;
mod admin_view;

pub use widgets::{Notice, NoticeBanner, Spinner, StatCard, StatusBadge};
pub use confirm_button::ConfirmButton;
pub use nav_bar::NavBar;
pub use dashboard_view::DashboardView;
pub use brief_view::BriefView;
pub use inventory_view::InventoryView;
pub use reviews_view::ReviewsView;
pub use changes_view::ChangesView;
pub use menu_view::MenuView;
pub use admin_view::AdminView;
