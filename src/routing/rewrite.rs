//! Path translation for forwarded requests.
//!
//! The board is mounted under `/board` on the dev server but sits at the
//! root of the Asset Server. Mount rules are tried in order and the first
//! match wins; the default-document rule runs on the result.

use std::borrow::Cow;

/// Document served for directory-style requests.
pub const DEFAULT_DOCUMENT: &str = "/index.html";

/// A single mount rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteRule {
    /// `<dir>/rest` → `/rest`. The pattern includes the trailing slash.
    StripDirectory(&'static str),
    /// Exact path replaced by a fixed one.
    Exact { from: &'static str, to: &'static str },
}

impl RewriteRule {
    /// Returns the rewritten path if this rule applies.
    pub fn apply<'a>(&self, path: &'a str) -> Option<Cow<'a, str>> {
        match *self {
            Self::StripDirectory(dir) => path.strip_prefix(dir).map(|rest| {
                // Keep the slash that separated the directory from the rest.
                Cow::Owned(format!("/{rest}"))
            }),
            Self::Exact { from, to } => (path == from).then_some(Cow::Borrowed(to)),
        }
    }
}

/// Mount rules for the board bundle, in priority order.
pub const BOARD_MOUNT: &[RewriteRule] = &[
    RewriteRule::StripDirectory("/board/"),
    RewriteRule::Exact {
        from: "/board",
        to: "/",
    },
];

/// Translate a dev-server path to the Asset Server path using `rules`.
pub fn translate_with<'a>(rules: &[RewriteRule], path: &'a str) -> Cow<'a, str> {
    let mounted = rules
        .iter()
        .find_map(|rule| rule.apply(path))
        .unwrap_or(Cow::Borrowed(path));

    if mounted.is_empty() || mounted == "/" {
        Cow::Borrowed(DEFAULT_DOCUMENT)
    } else {
        mounted
    }
}

/// Translate a dev-server path to the Asset Server path.
pub fn translate(path: &str) -> Cow<'_, str> {
    translate_with(BOARD_MOUNT, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_table() {
        let cases = [
            ("/board/", "/index.html"),
            ("/board", "/index.html"),
            ("/board/app.js", "/app.js"),
            ("/board/assets/logo.svg", "/assets/logo.svg"),
            ("/board/index.html", "/index.html"),
            ("/other/thing", "/other/thing"),
            ("/", "/index.html"),
            ("", "/index.html"),
            ("/bundle.css", "/bundle.css"),
        ];
        for (input, expected) in cases {
            assert_eq!(translate(input), expected, "translating {input:?}");
        }
    }

    #[test]
    fn test_normalized_paths_are_fixed_points() {
        for path in ["/index.html", "/app.js", "/other/thing"] {
            let once = translate(path);
            assert_eq!(once, path);
            assert_eq!(translate(&once), once);
        }
    }

    #[test]
    fn test_prefix_lookalikes_pass_through() {
        assert_eq!(translate("/boards"), "/boards");
        assert_eq!(translate("/boardroom/x"), "/boardroom/x");
        assert_eq!(translate("/x/board/app.js"), "/x/board/app.js");
    }

    #[test]
    fn test_only_first_matching_rule_applies() {
        // Stripping once leaves `/board/x`, which must not be stripped again.
        assert_eq!(translate("/board/board/x"), "/board/x");
    }

    #[test]
    fn test_custom_rule_table() {
        let rules = [RewriteRule::StripDirectory("/app/")];
        assert_eq!(translate_with(&rules, "/app/main.js"), "/main.js");
        assert_eq!(translate_with(&rules, "/app/"), "/index.html");
        assert_eq!(translate_with(&rules, "/board/main.js"), "/board/main.js");
    }

    #[test]
    fn test_borrowed_when_unchanged() {
        assert!(matches!(translate("/other/thing"), Cow::Borrowed(_)));
    }
}
