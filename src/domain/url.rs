//! URL helpers for file links.

const FORKLIFT_SCHEME: &str = "openforklift://";

/// Percent-encode a path for use inside a URL.
///
/// `/` separators are kept. Everything outside ASCII alphanumerics and `-_.`
/// is encoded, including `~` (as `%7E`), which some link consumers mangle.
pub fn escape_url(url: &str) -> String {
    url.split('/')
        .map(|segment| urlencoding::encode(segment).replace('~', "%7E"))
        .collect::<Vec<_>>()
        .join("/")
}

/// Build an `openforklift://` link that opens `file_path` in ForkLift.
pub fn forklift_uri(file_path: &str) -> String {
    format!("{}{}", FORKLIFT_SCHEME, escape_url(file_path))
}
