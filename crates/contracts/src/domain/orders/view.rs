use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::orders::aggregate::Order;
use crate::shared::pagination::PageItem;

/// Render payload for the order list view.
///
/// Carries everything an external renderer needs: the page of rows, the
/// resolved translation strings, pagination state and the normalized sort
/// parameters (so links can be rebuilt without re-validating input).
#[derive(Debug, Clone, Serialize)]
pub struct OrderListPage {
    pub orders: Vec<Order>,
    pub lang: String,
    pub t: BTreeMap<String, String>,
    pub status_labels: BTreeMap<String, String>,
    pub current_page: u64,
    pub total_pages: u64,
    pub visible_pages: Vec<PageItem>,
    pub sort_by: String,
    pub sort_order: String,
    pub success: bool,
}

/// Render payload for the summary dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub lang: String,
    pub title: String,
    pub labels: BTreeMap<String, String>,
    pub total_orders: u64,
    pub pending_orders: u64,
    pub completed_orders: u64,
    pub most_frequent_item: Option<MostFrequentItem>,
}

/// The item name appearing on the most orders, with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MostFrequentItem {
    pub item: String,
    pub count: u64,
}
