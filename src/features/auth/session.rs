//! Session cookie handling. The server is expected to set `admintoken` via
//! `Set-Cookie` on login; when it does not, the client writes a fallback
//! cookie with a fixed expiry. Cookie string parsing and formatting are pure
//! so they are testable off the browser.

pub(crate) const SESSION_COOKIE: &str = "admintoken";
/// Fixed expiry for the client-written fallback cookie.
const SESSION_MAX_AGE_SECS: u32 = 3600;

/// Finds a cookie value by name within a raw `document.cookie` string.
pub(crate) fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_string())
    })
}

pub(crate) fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Max-Age={SESSION_MAX_AGE_SECS}; path=/")
}

pub(crate) fn expired_cookie() -> String {
    format!("{SESSION_COOKIE}=; Max-Age=0; path=/")
}

#[cfg(target_arch = "wasm32")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

/// Reads the session token from the browser cookie jar.
#[cfg(target_arch = "wasm32")]
pub(crate) fn read_token() -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    cookie_value(&cookies, SESSION_COOKIE)
}

/// Writes the fallback session cookie.
#[cfg(target_arch = "wasm32")]
pub(crate) fn store_token(token: &str) {
    if let Some(document) = html_document() {
        let _ = document.set_cookie(&session_cookie(token));
    }
}

/// Drops the session cookie.
#[cfg(target_arch = "wasm32")]
pub(crate) fn clear_token() {
    if let Some(document) = html_document() {
        let _ = document.set_cookie(&expired_cookie());
    }
}

#[cfg(test)]
mod tests {
    use super::{SESSION_COOKIE, cookie_value, expired_cookie, session_cookie};

    #[test]
    fn finds_token_among_other_cookies() {
        let cookies = "theme=dark; admintoken=tok123; lang=en";
        assert_eq!(
            cookie_value(cookies, SESSION_COOKIE),
            Some("tok123".to_string())
        );
    }

    #[test]
    fn ignores_empty_and_missing_values() {
        assert_eq!(cookie_value("admintoken=", SESSION_COOKIE), None);
        assert_eq!(cookie_value("theme=dark", SESSION_COOKIE), None);
        assert_eq!(cookie_value("", SESSION_COOKIE), None);
    }

    #[test]
    fn does_not_match_name_prefixes() {
        assert_eq!(cookie_value("admintoken2=tok", SESSION_COOKIE), None);
    }

    #[test]
    fn fallback_cookie_carries_fixed_expiry() {
        assert_eq!(
            session_cookie("tok123"),
            "admintoken=tok123; Max-Age=3600; path=/"
        );
    }

    #[test]
    fn clearing_cookie_expires_immediately() {
        assert_eq!(expired_cookie(), "admintoken=; Max-Age=0; path=/");
    }
}
