use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use contracts::enums::Lang;
use std::convert::Infallible;

/// Cookie holding the session's language preference.
pub const LANG_COOKIE: &str = "lang";

/// Extractor for the per-session language.
/// Usage in handlers: `async fn handler(SessionLang(lang): SessionLang) -> Response`
pub struct SessionLang(pub Lang);

#[async_trait]
impl<S> FromRequestParts<S> for SessionLang
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SessionLang(lang_from_headers(&parts.headers)))
    }
}

/// Resolve the language from the Cookie header, defaulting to English
/// when the cookie is absent or carries an unknown code.
pub fn lang_from_headers(headers: &HeaderMap) -> Lang {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == LANG_COOKIE)
        .and_then(|(_, code)| Lang::from_code(code))
        .unwrap_or_default()
}

/// Session-scoped language cookie (no Max-Age: the preference lives as
/// long as the browser session).
pub fn lang_cookie(lang: Lang) -> String {
    format!("{}={}; Path=/; SameSite=Lax", LANG_COOKIE, lang.code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookie: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        map
    }

    #[test]
    fn test_reads_lang_cookie() {
        assert_eq!(lang_from_headers(&headers("lang=de")), Lang::De);
        assert_eq!(lang_from_headers(&headers("theme=dark; lang=de")), Lang::De);
        assert_eq!(lang_from_headers(&headers("lang=en")), Lang::En);
    }

    #[test]
    fn test_defaults_to_english() {
        assert_eq!(lang_from_headers(&HeaderMap::new()), Lang::En);
        assert_eq!(lang_from_headers(&headers("theme=dark")), Lang::En);
        assert_eq!(lang_from_headers(&headers("lang=fr")), Lang::En);
    }

    #[test]
    fn test_cookie_format() {
        assert_eq!(lang_cookie(Lang::De), "lang=de; Path=/; SameSite=Lax");
    }
}
