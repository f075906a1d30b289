//! In-memory fake backend state.
//!
//! Built once at startup and shared read-only. Every timestamp is taken at
//! construction, so two reads within one process always serialize to the
//! same bytes.

use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

const AVATAR_URL: &str = "https://avatars.githubusercontent.com/u/6481734?s=200&v=4";

/// Board columns, in display order.
const COLUMNS: [&str; 6] = ["Inbox", "Backlog", "Ready", "In Progress", "Needs Review", "Done"];

/// Invariant violations detected by [`MockDataset::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("card {id} references unknown column `{column}`")]
    UnknownColumn { id: u64, column: String },

    #[error("card {id} is filed under `{filed_under}` but belongs to `{column}`")]
    MisfiledCard {
        id: u64,
        column: String,
        filed_under: String,
    },

    #[error("duplicate card id {0}")]
    DuplicateId(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub login: String,
    pub avatar_url: String,
}

impl User {
    fn demo(login: &str) -> Self {
        Self {
            login: login.to_string(),
            avatar_url: AVATAR_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub collapsed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pub columns: Vec<Column>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Owner {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub name: String,
    pub owner: Owner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

/// A single issue or pull request on the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub repository: Repository,
    pub labels: Vec<Label>,
    pub milestone: Option<Milestone>,
    pub assignees: Vec<User>,
    pub pull_request: bool,
    pub column: String,
    pub user: User,
    pub requested_reviewers: Vec<User>,
    /// Opaque to the mock; always empty.
    pub links: Vec<serde_json::Value>,
    pub state: IssueState,
    #[serde(serialize_with = "iso8601")]
    pub updated_at: DateTime<Utc>,
}

impl Card {
    fn new(id: u64, number: u64, title: &str, column: &str, user: User, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            number,
            title: title.to_string(),
            repository: Repository {
                name: "example-repo".to_string(),
                owner: Owner {
                    login: "example".to_string(),
                },
            },
            labels: Vec::new(),
            milestone: None,
            assignees: Vec::new(),
            pull_request: false,
            column: column.to_string(),
            user,
            requested_reviewers: Vec::new(),
            links: Vec::new(),
            state: IssueState::Open,
            updated_at,
        }
    }

    fn label(mut self, name: &str, color: &str) -> Self {
        self.labels.push(Label {
            name: name.to_string(),
            color: color.to_string(),
        });
        self
    }

    fn milestone(mut self, title: &str) -> Self {
        self.milestone = Some(Milestone {
            title: title.to_string(),
        });
        self
    }

    fn assignee(mut self, user: User) -> Self {
        self.assignees.push(user);
        self
    }

    fn reviewer(mut self, user: User) -> Self {
        self.requested_reviewers.push(user);
        self
    }

    fn pull_request(mut self) -> Self {
        self.pull_request = true;
        self
    }

    fn closed(mut self) -> Self {
        self.state = IssueState::Closed;
        self
    }
}

/// Cards grouped by column, in board column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSet {
    pub items: IndexMap<String, Vec<Card>>,
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateFeed {
    pub items: Vec<serde_json::Value>,
    pub cursor: Option<String>,
}

/// The complete fake backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockDataset {
    pub board: Board,
    pub cards: CardSet,
    pub user: User,
    pub updates: UpdateFeed,
}

impl MockDataset {
    /// Build the dataset stamped with the current time.
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Build the dataset with every `updated_at` set to `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        let demo = User::demo("demo-user");

        let board = Board {
            columns: COLUMNS
                .iter()
                .map(|name| Column {
                    name: (*name).to_string(),
                    collapsed: false,
                })
                .collect(),
            name: "Wuffle Board (Mock)".to_string(),
        };

        let cards = vec![
            Card::new(1, 123, "Example Bug Issue", "Inbox", demo.clone(), now)
                .label("bug", "d73a4a"),
            Card::new(2, 124, "Feature Request Example", "Inbox", User::demo("other-user"), now)
                .label("enhancement", "84b6eb")
                .milestone("v1.0")
                .assignee(demo.clone()),
            Card::new(3, 125, "Ready to work on this", "Ready", demo.clone(), now),
            Card::new(4, 126, "Fix the critical bug", "In Progress", demo.clone(), now)
                .label("bug", "d73a4a")
                .milestone("v1.0")
                .assignee(demo.clone())
                .pull_request()
                .reviewer(User::demo("reviewer-user")),
            Card::new(5, 122, "Completed task example", "Done", demo.clone(), now).closed(),
        ];

        let mut items: IndexMap<String, Vec<Card>> = COLUMNS
            .iter()
            .map(|name| ((*name).to_string(), Vec::new()))
            .collect();
        for card in cards {
            items.entry(card.column.clone()).or_default().push(card);
        }

        Self {
            board,
            cards: CardSet {
                items,
                cursor: Some("mock-cursor-123".to_string()),
            },
            user: demo,
            updates: UpdateFeed {
                items: Vec::new(),
                cursor: None,
            },
        }
    }

    /// Check card placement and id uniqueness.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut seen = HashSet::new();

        for (filed_under, cards) in &self.cards.items {
            for card in cards {
                if !self.cards.items.contains_key(&card.column) {
                    return Err(DatasetError::UnknownColumn {
                        id: card.id,
                        column: card.column.clone(),
                    });
                }
                if &card.column != filed_under {
                    return Err(DatasetError::MisfiledCard {
                        id: card.id,
                        column: card.column.clone(),
                        filed_under: filed_under.clone(),
                    });
                }
                if !seen.insert(card.id) {
                    return Err(DatasetError::DuplicateId(card.id));
                }
            }
        }
        Ok(())
    }

    /// Total number of cards across all columns.
    pub fn card_count(&self) -> usize {
        self.cards.items.values().map(Vec::len).sum()
    }
}

impl Default for MockDataset {
    fn default() -> Self {
        Self::new()
    }
}

// Millisecond precision with a `Z` suffix, the format browsers produce.
fn iso8601<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
