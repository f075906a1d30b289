//! Mock API route table.

/// Prefix of the feed route; any suffix (cursor segments, etc.) matches.
const UPDATES_PREFIX: &str = "/wuffle/board/updates";

/// The canned endpoints the mock backend answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockRoute {
    Board,
    Cards,
    LoginCheck,
    Updates,
    MoveIssue,
    NotFound,
}

impl MockRoute {
    /// Resolve a query-less path under the reserved prefix.
    pub fn resolve(path: &str) -> Self {
        match path {
            "/wuffle/board" => Self::Board,
            "/wuffle/board/cards" => Self::Cards,
            "/wuffle/login_check" => Self::LoginCheck,
            "/wuffle/board/issues/move" => Self::MoveIssue,
            p if p.starts_with(UPDATES_PREFIX) => Self::Updates,
            _ => Self::NotFound,
        }
    }

    /// Label used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::Cards => "cards",
            Self::LoginCheck => "login_check",
            Self::Updates => "updates",
            Self::MoveIssue => "move_issue",
            Self::NotFound => "not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_routes() {
        assert_eq!(MockRoute::resolve("/wuffle/board"), MockRoute::Board);
        assert_eq!(MockRoute::resolve("/wuffle/board/cards"), MockRoute::Cards);
        assert_eq!(MockRoute::resolve("/wuffle/login_check"), MockRoute::LoginCheck);
        assert_eq!(MockRoute::resolve("/wuffle/board/issues/move"), MockRoute::MoveIssue);
    }

    #[test]
    fn test_updates_is_prefix_match() {
        assert_eq!(MockRoute::resolve("/wuffle/board/updates"), MockRoute::Updates);
        assert_eq!(MockRoute::resolve("/wuffle/board/updates/abc"), MockRoute::Updates);
        assert_eq!(MockRoute::resolve("/wuffle/board/updatesXYZ"), MockRoute::Updates);
    }

    #[test]
    fn test_exact_routes_do_not_match_suffixes() {
        assert_eq!(MockRoute::resolve("/wuffle/board/"), MockRoute::NotFound);
        assert_eq!(MockRoute::resolve("/wuffle/board/cards/1"), MockRoute::NotFound);
        assert_eq!(MockRoute::resolve("/wuffle/login_check/"), MockRoute::NotFound);
        assert_eq!(MockRoute::resolve("/wuffle/"), MockRoute::NotFound);
        assert_eq!(MockRoute::resolve("/wuffle/unknown"), MockRoute::NotFound);
    }
}
