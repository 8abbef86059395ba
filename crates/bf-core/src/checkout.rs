//! Checkout link construction and payment-return detection.

use url::form_urlencoded;
use url::Url;

/// Query parameter name signalling a successful checkout return.
pub const PAYMENT_PARAM: &str = "payment";

/// Query parameter value signalling a successful checkout return.
pub const PAYMENT_SUCCESS: &str = "success";

/// Build the external checkout URL, pre-filling the email when known.
///
/// A base URL that fails to parse is returned untouched; the worst case is
/// a checkout page without the pre-filled email, which the host navigation
/// will surface on its own.
pub fn checkout_url(base: &str, email: Option<&str>) -> String {
    let email = match email {
        Some(e) if !e.trim().is_empty() => e,
        _ => return base.to_string(),
    };
    match Url::parse(base) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("prefilled_email", email);
            url.into()
        }
        Err(_) => base.to_string(),
    }
}

/// True when the page query string carries `payment=success`.
pub fn is_payment_return(query: &str) -> bool {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .any(|(k, v)| k == PAYMENT_PARAM && v == PAYMENT_SUCCESS)
}

/// True when a full page URL carries `payment=success` in its query.
pub fn is_payment_return_url(page_url: &str) -> bool {
    Url::parse(page_url)
        .ok()
        .and_then(|u| u.query().map(is_payment_return))
        .unwrap_or(false)
}

/// Remove the payment parameter from a full page URL so a refresh does not
/// replay the unlock logic. Other query parameters survive.
pub fn strip_payment_param(page_url: &str) -> String {
    let Ok(mut url) = Url::parse(page_url) else {
        return page_url.to_string();
    };
    let remaining: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != PAYMENT_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if remaining.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(remaining);
    }
    url.into()
}
