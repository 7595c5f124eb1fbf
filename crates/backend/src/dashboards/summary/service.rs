use std::collections::BTreeMap;

use contracts::domain::orders::view::{DashboardSummary, MostFrequentItem};
use contracts::enums::{Lang, OrderStatus};

use crate::dashboards::summary::repository;
use crate::shared::error::AppError;
use crate::shared::i18n;

/// Keys the summary view labels itself with.
const LABEL_KEYS: [&str; 4] = [
    "total_orders",
    "pending_orders",
    "completed_orders",
    "most_frequent_item",
];

pub async fn build(lang: Lang) -> Result<DashboardSummary, AppError> {
    let total_orders = repository::count_all().await?;
    let pending_orders = repository::count_by_status(OrderStatus::Pending.label()).await?;
    let completed_orders = repository::count_by_status(OrderStatus::Completed.label()).await?;
    let most_frequent_item = repository::most_frequent_item()
        .await?
        .map(|(item, count)| MostFrequentItem { item, count });

    let mut labels = BTreeMap::new();
    for key in LABEL_KEYS {
        labels.insert(key.to_string(), i18n::translate(lang, key)?.to_string());
    }

    Ok(DashboardSummary {
        lang: lang.code().to_string(),
        title: i18n::translate(lang, "dashboard")?.to_string(),
        labels,
        total_orders,
        pending_orders,
        completed_orders,
        most_frequent_item,
    })
}
