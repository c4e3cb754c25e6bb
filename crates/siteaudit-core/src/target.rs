//! Scan target URL handling

/// Scheme prepended to input that has none
pub const DEFAULT_SCHEME: &str = "https://";

/// Prefixes treated as already scheme-qualified. Matching is case-sensitive.
pub const KNOWN_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Whether `input` already starts with a recognized scheme
pub fn has_known_scheme(input: &str) -> bool {
    KNOWN_SCHEMES.iter().any(|scheme| input.starts_with(scheme))
}

/// Normalize raw form input into a scan target.
///
/// Input with a known scheme is returned unchanged; anything else gets
/// [`DEFAULT_SCHEME`] prepended. No other validation happens here.
pub fn normalize_url(input: &str) -> String {
    if has_known_scheme(input) {
        input.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{input}")
    }
}

/// Short label for a target, used in headers: the host when the URL parses,
/// otherwise the URL itself.
pub fn display_host(target: &str) -> String {
    match url::Url::parse(target) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_string(),
            None => target.to_string(),
        },
        Err(_) => target.to_string(),
    }
}
