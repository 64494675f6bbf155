//! List Filters and Aggregates
//!
//! Client-side predicates and summary numbers over fetched collections.
//! Every filter keeps the source order.

use std::collections::HashMap;

use crate::models::{Change, InventoryItem, MenuItem, Review, StockStatus};

// ========================
// Inventory
// ========================

/// Status selector on the 86 board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(StockStatus),
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(StockStatus::Ok),
        StatusFilter::Only(StockStatus::Low),
        StatusFilter::Only(StockStatus::EightySix),
    ];

    pub fn matches(&self, status: StockStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }
}

/// Case-insensitive substring match; an empty needle matches everything
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

/// Items whose status passes `status` and whose name or item code contains `search`
pub fn filter_inventory(items: &[InventoryItem], status: StatusFilter, search: &str) -> Vec<InventoryItem> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|item| status.matches(item.status))
        .filter(|item| contains_ci(item.display_name(), &needle) || contains_ci(&item.item_id, &needle))
        .cloned()
        .collect()
}

/// Per-status counts for the filter buttons
pub fn count_by_status(items: &[InventoryItem]) -> HashMap<StockStatus, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.status).or_insert(0) += 1;
    }
    counts
}

// ========================
// Menu
// ========================

pub fn filter_menu(items: &[MenuItem], search: &str) -> Vec<MenuItem> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|item| contains_ci(&item.name, &needle) || contains_ci(&item.item_id, &needle))
        .cloned()
        .collect()
}

// ========================
// Reviews
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    /// Exact star rating, or any
    pub rating: Option<u8>,
    /// Exact source platform, or any
    pub source: Option<String>,
}

impl ReviewFilter {
    pub fn matches(&self, review: &Review) -> bool {
        self.rating.map_or(true, |r| review.rating == r)
            && self.source.as_deref().map_or(true, |s| review.source == s)
    }
}

pub fn filter_reviews(reviews: &[Review], filter: &ReviewFilter) -> Vec<Review> {
    reviews.iter().filter(|r| filter.matches(r)).cloned().collect()
}

/// Distinct sources in order of first appearance
pub fn review_sources(reviews: &[Review]) -> Vec<String> {
    let mut sources: Vec<String> = Vec::new();
    for review in reviews {
        if !sources.iter().any(|s| *s == review.source) {
            sources.push(review.source.clone());
        }
    }
    sources
}

/// Reviews from one platform
#[derive(Debug, Clone, PartialEq)]
pub struct SourceGroup {
    pub source: String,
    pub reviews: Vec<Review>,
    pub average: f64,
}

/// Partition reviews by `source`. Groups appear in order of first
/// appearance; each keeps its members in source order.
pub fn group_by_source(reviews: &[Review]) -> Vec<SourceGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<(String, Vec<Review>)> = Vec::new();

    for review in reviews {
        let slot = *index.entry(review.source.as_str()).or_insert_with(|| {
            buckets.push((review.source.clone(), Vec::new()));
            buckets.len() - 1
        });
        buckets[slot].1.push(review.clone());
    }

    buckets
        .into_iter()
        .map(|(source, reviews)| {
            // Buckets are never empty
            let average = average_rating(&reviews).unwrap_or_default();
            SourceGroup { source, reviews, average }
        })
        .collect()
}

/// Arithmetic mean of the ratings, `None` for an empty slice
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    Some(f64::from(sum) / reviews.len() as f64)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewStats {
    pub total: usize,
    pub average: Option<f64>,
    /// Rounded share of 4+ star reviews, in percent
    pub positive_percent: Option<u32>,
}

pub fn review_stats(reviews: &[Review]) -> ReviewStats {
    let positive = reviews.iter().filter(|r| r.rating >= 4).count();
    ReviewStats {
        total: reviews.len(),
        average: average_rating(reviews),
        positive_percent: percent(positive, reviews.len()),
    }
}

// ========================
// Changes
// ========================

/// (active, inactive), each in source order
pub fn split_changes(changes: &[Change]) -> (Vec<Change>, Vec<Change>) {
    changes.iter().cloned().partition(|c| c.is_active)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeStats {
    pub total: usize,
    pub active: usize,
    pub active_percent: Option<u32>,
}

pub fn change_stats(changes: &[Change]) -> ChangeStats {
    let active = changes.iter().filter(|c| c.is_active).count();
    ChangeStats {
        total: changes.len(),
        active,
        active_percent: percent(active, changes.len()),
    }
}

/// `part / whole` as a rounded percentage; `None` when `whole` is zero
pub fn percent(part: usize, whole: usize) -> Option<u32> {
    if whole == 0 {
        return None;
    }
    Some((part as f64 * 100.0 / whole as f64).round() as u32)
}
