use chrono::Local;

use contracts::domain::orders::aggregate::Order;
use contracts::enums::{OrderStatus, SortDirection, SortField};

use crate::domain::orders::repository;
use crate::shared::pagination::PER_PAGE;

/// Normalized list-view query. Raw `page`/`sort_by`/`sort_order` input is
/// folded onto the allow-list here, before anything touches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u64,
    pub sort_by: SortField,
    pub sort_order: SortDirection,
}

impl ListQuery {
    pub fn from_params(
        page: Option<&str>,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
    ) -> Self {
        // Lenient page parsing: anything non-numeric falls back to 1
        let page = page
            .and_then(|p| p.parse::<u64>().ok())
            .unwrap_or(1)
            .max(1);
        Self {
            page,
            sort_by: SortField::from_param(sort_by),
            sort_order: SortDirection::from_param(sort_order),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * PER_PAGE
    }
}

/// Insert a new order. The status is always `Pending` and the creation
/// timestamp is stamped here, never taken from the request.
pub async fn create(item: &str, quantity: i64) -> anyhow::Result<i64> {
    let created_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    repository::insert(
        item,
        &quantity.to_string(),
        OrderStatus::Pending.label(),
        &created_at,
    )
    .await
}

/// One page of orders plus the total row count.
pub async fn list_page(query: &ListQuery) -> anyhow::Result<(Vec<Order>, u64)> {
    let total = repository::count().await?;
    let orders =
        repository::list_page(query.sort_by, query.sort_order, PER_PAGE, query.offset()).await?;
    Ok((orders, total))
}

/// Set the status of one order, stored verbatim. Unknown ids affect zero
/// rows and are not an error.
pub async fn update_status(id: i64, status: &str) -> anyhow::Result<u64> {
    repository::update_status(id, status).await
}

pub async fn delete(id: i64) -> anyhow::Result<u64> {
    repository::delete(id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = ListQuery::from_params(None, None, None);
        assert_eq!(query.page, 1);
        assert_eq!(query.sort_by, SortField::CreatedAt);
        assert_eq!(query.sort_order, SortDirection::Desc);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_rejected_sort_behaves_like_the_default() {
        let rejected = ListQuery::from_params(None, Some("item"), Some("sideways"));
        let explicit = ListQuery::from_params(None, Some("created_at"), Some("desc"));
        assert_eq!(rejected, explicit);
    }

    #[test]
    fn test_lenient_page_parsing() {
        assert_eq!(ListQuery::from_params(Some("3"), None, None).page, 3);
        assert_eq!(ListQuery::from_params(Some("3"), None, None).offset(), 30);
        assert_eq!(ListQuery::from_params(Some("abc"), None, None).page, 1);
        assert_eq!(ListQuery::from_params(Some("-2"), None, None).page, 1);
        assert_eq!(ListQuery::from_params(Some("0"), None, None).page, 1);
        assert_eq!(ListQuery::from_params(Some(""), None, None).page, 1);
    }
}
