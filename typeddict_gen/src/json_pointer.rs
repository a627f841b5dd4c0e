//! JSON Pointer paths (RFC 6901) for schema diagnostics.
//!
//! Reference tokens are `/`-separated, with `~` escaped as `~0` and `/`
//! escaped as `~1`.

/// Returns `path` extended with one reference token.
#[must_use]
pub fn join(path: &str, token: &str) -> String {
    let mut joined: String = String::with_capacity(path.len() + token.len() + 1);
    joined.push_str(path);
    joined.push('/');
    for c in token.chars() {
        match c {
            '~' => joined.push_str("~0"),
            '/' => joined.push_str("~1"),
            other => joined.push(other),
        }
    }
    joined
}
