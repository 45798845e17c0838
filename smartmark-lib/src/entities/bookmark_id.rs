use std::{convert::Infallible, str::FromStr};

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a [`Bookmark`](super::Bookmark) by the collection service.
///
/// The client never interprets it. Services in the wild hand out either integers or strings,
/// so both are accepted and echoed back unchanged in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookmarkId {
    Number(i64),
    Text(String),
}

impl FromStr for BookmarkId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only text that prints back unchanged is numeric, so ids like "007" survive
        Ok(match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => Self::Number(n),
            _ => Self::Text(s.to_string()),
        })
    }
}

impl From<&str> for BookmarkId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
