//! Input validators for host configuration
//!
//! All validators are pure and total over string input. Turning a `false`
//! into a user-facing error is left to the caller.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::host::Api;

static ALIAS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]*$").expect("valid alias regex"));

static ACCESS_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\-._~]{5,20}$").expect("valid access key regex"));

/// Secret key length bounds, counted in characters
const SECRET_KEY_MIN: usize = 8;
const SECRET_KEY_MAX: usize = 40;

/// Check alias syntax: a letter followed by letters, digits, `-` or `_`
pub fn is_valid_alias(alias: &str) -> bool {
    ALIAS_RE.is_match(alias)
}

/// Check that the URL is an absolute http or https URL with a host
pub fn is_valid_host_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Check access key shape. An empty key is accepted for anonymous hosts.
pub fn is_valid_access_key(access_key: &str) -> bool {
    access_key.is_empty() || ACCESS_KEY_RE.is_match(access_key)
}

/// Check secret key shape. An empty key is accepted for anonymous hosts.
pub fn is_valid_secret_key(secret_key: &str) -> bool {
    if secret_key.is_empty() {
        return true;
    }
    let len = secret_key.chars().count();
    (SECRET_KEY_MIN..=SECRET_KEY_MAX).contains(&len)
}

/// Check API signature membership. The empty string is not a member;
/// callers default it to S3v4 before asking.
pub fn is_valid_api(api: &str) -> bool {
    api.parse::<Api>().is_ok()
}
