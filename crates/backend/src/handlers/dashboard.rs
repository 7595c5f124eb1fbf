use axum::Json;

use contracts::domain::orders::view::DashboardSummary;

use crate::dashboards::summary::service;
use crate::shared::error::AppError;
use crate::shared::session::SessionLang;

/// GET /dashboard
pub async fn summary(SessionLang(lang): SessionLang) -> Result<Json<DashboardSummary>, AppError> {
    Ok(Json(service::build(lang).await?))
}
