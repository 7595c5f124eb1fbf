use axum::extract::{Path, Query};
use axum::response::Redirect;
use axum::{Form, Json};
use serde::Deserialize;

use contracts::domain::orders::view::OrderListPage;

use crate::domain::orders::service::{self, ListQuery};
use crate::shared::error::AppError;
use crate::shared::i18n;
use crate::shared::pagination;
use crate::shared::session::SessionLang;

/// Raw query parameters of the list view. Everything arrives as text and
/// is normalized afterwards, so malformed values degrade to defaults
/// instead of rejecting the request.
#[derive(Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub success: Option<String>,
}

#[derive(Deserialize)]
pub struct AddOrderForm {
    pub item: Option<String>,
    pub quantity: Option<String>,
}

impl AddOrderForm {
    /// Both fields are required; quantity must parse as an integer even
    /// though the column it lands in stays TEXT.
    pub fn validate(self) -> Result<(String, i64), AppError> {
        let item = self.item.ok_or(AppError::MissingField("item"))?;
        let quantity = self
            .quantity
            .ok_or(AppError::MissingField("quantity"))?
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidField("quantity"))?;
        Ok((item, quantity))
    }
}

#[derive(Deserialize)]
pub struct UpdateStatusForm {
    pub status: Option<String>,
}

impl UpdateStatusForm {
    /// The status itself is free text; only its presence is checked.
    pub fn validate(self) -> Result<String, AppError> {
        self.status.ok_or(AppError::MissingField("status"))
    }
}

/// GET /
pub async fn list(
    SessionLang(lang): SessionLang,
    Query(params): Query<ListParams>,
) -> Result<Json<OrderListPage>, AppError> {
    let query = ListQuery::from_params(
        params.page.as_deref(),
        params.sort_by.as_deref(),
        params.sort_order.as_deref(),
    );
    let (orders, total) = service::list_page(&query).await?;
    let total_pages = pagination::total_pages(total);
    let visible_pages = pagination::page_window(query.page, total_pages);

    Ok(Json(OrderListPage {
        orders,
        lang: lang.code().to_string(),
        t: i18n::pack_owned(lang),
        status_labels: i18n::status_labels_owned(lang),
        current_page: query.page,
        total_pages,
        visible_pages,
        sort_by: query.sort_by.code().to_string(),
        sort_order: query.sort_order.code().to_string(),
        success: params.success.as_deref() == Some("true"),
    }))
}

/// POST /add
pub async fn add(Form(form): Form<AddOrderForm>) -> Result<Redirect, AppError> {
    let (item, quantity) = form.validate()?;
    service::create(&item, quantity).await?;
    Ok(Redirect::to("/?success=true"))
}

/// POST /update/:id
pub async fn update_status(
    Path(id): Path<i64>,
    Form(form): Form<UpdateStatusForm>,
) -> Result<Redirect, AppError> {
    let status = form.validate()?;
    // Redirects even when the id matched nothing
    service::update_status(id, &status).await?;
    Ok(Redirect::to("/"))
}

/// POST /delete/:id
pub async fn delete(Path(id): Path<i64>) -> Result<Redirect, AppError> {
    service::delete(id).await?;
    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_form_requires_both_fields() {
        let form = AddOrderForm {
            item: None,
            quantity: Some("5".to_string()),
        };
        assert!(matches!(
            form.validate(),
            Err(AppError::MissingField("item"))
        ));

        let form = AddOrderForm {
            item: Some("Widget".to_string()),
            quantity: None,
        };
        assert!(matches!(
            form.validate(),
            Err(AppError::MissingField("quantity"))
        ));

        let form = AddOrderForm {
            item: Some("Widget".to_string()),
            quantity: Some("5".to_string()),
        };
        assert_eq!(form.validate().unwrap(), ("Widget".to_string(), 5));
    }

    #[test]
    fn test_add_form_validates_quantity_as_integer() {
        // The TEXT column itself would accept anything; the typed
        // boundary rejects non-numeric input before it gets that far.
        let form = AddOrderForm {
            item: Some("Widget".to_string()),
            quantity: Some("a lot".to_string()),
        };
        assert!(matches!(
            form.validate(),
            Err(AppError::InvalidField("quantity"))
        ));

        let form = AddOrderForm {
            item: Some("Widget".to_string()),
            quantity: Some(" 12 ".to_string()),
        };
        assert_eq!(form.validate().unwrap().1, 12);
    }

    #[test]
    fn test_update_form_accepts_any_status_text() {
        let form = UpdateStatusForm { status: None };
        assert!(matches!(
            form.validate(),
            Err(AppError::MissingField("status"))
        ));

        let form = UpdateStatusForm {
            status: Some("On Hold".to_string()),
        };
        assert_eq!(form.validate().unwrap(), "On Hold");
    }
}
