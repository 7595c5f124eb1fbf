use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Redirect};
use axum::Form;
use serde::Deserialize;

use contracts::enums::Lang;

use crate::shared::error::AppError;
use crate::shared::session;

#[derive(Deserialize)]
pub struct SetLanguageForm {
    pub language: Option<String>,
}

impl SetLanguageForm {
    /// Only codes with a translation table are storable; anything else
    /// would fail every lookup later, so it is rejected here.
    pub fn validate(self) -> Result<Lang, AppError> {
        let code = self.language.ok_or(AppError::MissingField("language"))?;
        Lang::from_code(&code).ok_or(AppError::InvalidField("language"))
    }
}

/// POST /set-language
pub async fn set_language(Form(form): Form<SetLanguageForm>) -> Result<impl IntoResponse, AppError> {
    let lang = form.validate()?;
    Ok((
        AppendHeaders([(SET_COOKIE, session::lang_cookie(lang))]),
        Redirect::to("/"),
    ))
}
