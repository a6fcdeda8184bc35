//! Virtual path helpers.
//!
//! Paths are slash-separated and relative to the space root; the empty
//! string is the root itself.

use crate::config::HOME_LABEL;
use crate::models::Breadcrumb;

/// Iterate over the non-empty segments of `path`.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Canonical form of `path`: non-empty segments joined by a single `/`.
pub fn normalize(path: &str) -> String {
    segments(path).collect::<Vec<_>>().join("/")
}

/// Decompose `path` into its breadcrumb trail.
///
/// The first crumb is always the synthetic root `{Home, ""}`; each further
/// crumb points at the join of all segments seen so far.
pub fn breadcrumbs_of(path: &str) -> Vec<Breadcrumb> {
    let mut crumbs = vec![Breadcrumb::new(HOME_LABEL, "")];
    let mut acc = String::new();

    for segment in segments(path) {
        if !acc.is_empty() {
            acc.push('/');
        }
        acc.push_str(segment);
        crumbs.push(Breadcrumb::new(segment, acc.clone()));
    }

    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadcrumbs_nested() {
        assert_eq!(
            breadcrumbs_of("a/b/c"),
            vec![
                Breadcrumb::new("Home", ""),
                Breadcrumb::new("a", "a"),
                Breadcrumb::new("b", "a/b"),
                Breadcrumb::new("c", "a/b/c"),
            ]
        );
    }

    #[test]
    fn test_breadcrumbs_root_only() {
        let root = vec![Breadcrumb::new("Home", "")];
        assert_eq!(breadcrumbs_of(""), root);
        assert_eq!(breadcrumbs_of("/"), root);
        assert_eq!(breadcrumbs_of("///"), root);
    }

    #[test]
    fn test_breadcrumbs_tolerate_stray_slashes() {
        assert_eq!(breadcrumbs_of("/a//b/"), breadcrumbs_of("a/b"));
    }

    #[test]
    fn test_breadcrumbs_length_and_head() {
        for path in ["", "x", "x/y", "/x/y/z/", "photos//2024/raw", "a b/c d"] {
            let crumbs = breadcrumbs_of(path);
            assert_eq!(crumbs[0], Breadcrumb::new("Home", ""));
            assert_eq!(crumbs.len(), 1 + segments(path).count(), "path {path:?}");
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("/"), "");
        assert_eq!(normalize("/a//b/"), "a/b");
        assert_eq!(normalize("a/b"), "a/b");
    }
}
