//! Helpers for textual, fully-qualified domain names.
//!
//! Names are compared case-insensitively; every lookup key inside the zone
//! data uses the lowercased, dot-terminated form produced by [`normalize_name`].

/// Appends the root label when missing. Case is preserved.
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Lowercased, fully-qualified form of `name`.
pub fn normalize_name(name: &str) -> String {
    fqdn(name).to_ascii_lowercase()
}

/// Name with its leftmost label removed, `None` once the root is reached.
///
/// `"www.example.com."` → `"example.com."` → `"com."` → `"."` → `None`.
pub fn parent_name(name: &str) -> Option<&str> {
    if name.is_empty() || name == "." {
        return None;
    }
    match name.find('.') {
        Some(idx) if idx + 1 < name.len() => Some(&name[idx + 1..]),
        _ => Some("."),
    }
}

/// Resolves a possibly relative name against `origin`. `@` denotes the origin.
pub fn absolute_name(name: &str, origin: &str) -> String {
    let origin = normalize_name(origin);
    if name == "@" {
        return origin;
    }
    if name.ends_with('.') {
        return name.to_ascii_lowercase();
    }
    if origin == "." {
        format!("{}.", name.to_ascii_lowercase())
    } else {
        format!("{}.{}", name.to_ascii_lowercase(), origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("WWW.Example.COM"), "www.example.com.");
        assert_eq!(normalize_name("example.com."), "example.com.");
    }

    #[test]
    fn test_parent_walk_reaches_root() {
        let mut current = "a.example.com.";
        let mut seen = vec![current];
        while let Some(parent) = parent_name(current) {
            seen.push(parent);
            current = parent;
        }
        assert_eq!(seen, vec!["a.example.com.", "example.com.", "com.", "."]);
    }

    #[test]
    fn test_absolute_name() {
        assert_eq!(absolute_name("@", "Example.com."), "example.com.");
        assert_eq!(absolute_name("www", "example.com."), "www.example.com.");
        assert_eq!(absolute_name("Mail.Other.org.", "example.com."), "mail.other.org.");
        assert_eq!(absolute_name("host", "."), "host.");
    }
}
