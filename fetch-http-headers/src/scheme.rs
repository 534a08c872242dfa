//! URL scheme classification.

/// Returns `true` for the local schemes `about`, `blob` and `data`.
pub fn is_local_scheme(scheme: &str) -> bool {
    matches!(scheme, "about" | "blob" | "data")
}

/// Returns `true` for the HTTP(S) schemes `http` and `https`.
pub fn is_http_scheme(scheme: &str) -> bool {
    matches!(scheme, "http" | "https")
}

/// Returns `true` for schemes that can be fetched:
/// local schemes, `file` and the HTTP(S) schemes.
pub fn is_fetch_scheme(scheme: &str) -> bool {
    is_local_scheme(scheme) || scheme == "file" || is_http_scheme(scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemes() {
        for (scheme, local, http, fetch) in [
            ("about", true, false, true),
            ("blob", true, false, true),
            ("data", true, false, true),
            ("file", false, false, true),
            ("http", false, true, true),
            ("https", false, true, true),
            ("HTTP", false, false, false),
            ("ftp", false, false, false),
            ("ws", false, false, false),
        ] {
            assert_eq!(is_local_scheme(scheme), local, "{scheme}");
            assert_eq!(is_http_scheme(scheme), http, "{scheme}");
            assert_eq!(is_fetch_scheme(scheme), fetch, "{scheme}");
        }
    }
}
