use serde::{Deserialize, Serialize};

use contracts::domain::orders::aggregate::Order;
use contracts::enums::{SortDirection, SortField};

use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub item: String,
    pub quantity: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Order {
    fn from(m: Model) -> Self {
        Order {
            id: m.id,
            item: m.item,
            quantity: m.quantity,
            status: m.status,
            created_at: m.created_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Insert one row; the id is assigned by the store and returned.
pub async fn insert(
    item: &str,
    quantity: &str,
    status: &str,
    created_at: &str,
) -> anyhow::Result<i64> {
    let active = ActiveModel {
        item: Set(item.to_string()),
        quantity: Set(quantity.to_string()),
        status: Set(status.to_string()),
        created_at: Set(created_at.to_string()),
        ..Default::default()
    };
    let inserted = active.insert(conn()).await?;
    Ok(inserted.id)
}

/// One page of rows in the requested order. The sort column comes from
/// the allow-list enum, limit and offset are bound values; no request
/// text ever reaches the query.
pub async fn list_page(
    sort_by: SortField,
    direction: SortDirection,
    limit: u64,
    offset: u64,
) -> anyhow::Result<Vec<Order>> {
    let column = match sort_by {
        SortField::CreatedAt => Column::CreatedAt,
        SortField::Quantity => Column::Quantity,
        SortField::Status => Column::Status,
    };
    let query = match direction {
        SortDirection::Asc => Entity::find().order_by_asc(column),
        SortDirection::Desc => Entity::find().order_by_desc(column),
    };
    let rows = query.limit(limit).offset(offset).all(conn()).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

/// Set the status of the row matching `id`. Zero affected rows is a
/// valid outcome, not an error.
pub async fn update_status(id: i64, status: &str) -> anyhow::Result<u64> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::Status, Expr::value(status))
        .filter(Column::Id.eq(id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected)
}

/// Remove the row matching `id`. Zero affected rows is a valid outcome.
pub async fn delete(id: i64) -> anyhow::Result<u64> {
    let result = Entity::delete_many()
        .filter(Column::Id.eq(id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected)
}
