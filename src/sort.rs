//! Sort keys for entry listings
//!
//! A sort key is a field name, prefixed with `-` when the listing is descending.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Prefix marking a descending sort key
pub const DESCENDING_PREFIX: char = '-';

/// Entry field a listing can be ordered by
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SortField {
    PageRatingVotes,
    ViewCount,
    DatePublished,
    FollowersCount,
    Stars,
}

impl SortField {
    pub fn all() -> &'static [Self] {
        &[
            Self::PageRatingVotes,
            Self::ViewCount,
            Self::DatePublished,
            Self::FollowersCount,
            Self::Stars,
        ]
    }

    /// Column name understood by the entries API
    pub fn id(&self) -> &'static str {
        match self {
            Self::PageRatingVotes => "page_rating_votes",
            Self::ViewCount => "view_count",
            Self::DatePublished => "date_published",
            Self::FollowersCount => "followers_count",
            Self::Stars => "stars",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PageRatingVotes => "Votes",
            Self::ViewCount => "Views",
            Self::DatePublished => "Date published",
            Self::FollowersCount => "Followers",
            Self::Stars => "Stars",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Field and direction used to order entry listings
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub const fn ascending(field: SortField) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub const fn descending(field: SortField) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Every sort key in menu order, ascending before descending for each field
    pub fn all() -> Vec<Self> {
        SortField::all()
            .iter()
            .flat_map(|field| [Self::ascending(*field), Self::descending(*field)])
            .collect()
    }

    pub fn id(&self) -> &'static str {
        use SortDirection::*;
        use SortField::*;
        match (self.field, self.direction) {
            (PageRatingVotes, Ascending) => "page_rating_votes",
            (PageRatingVotes, Descending) => "-page_rating_votes",
            (ViewCount, Ascending) => "view_count",
            (ViewCount, Descending) => "-view_count",
            (DatePublished, Ascending) => "date_published",
            (DatePublished, Descending) => "-date_published",
            (FollowersCount, Ascending) => "followers_count",
            (FollowersCount, Descending) => "-followers_count",
            (Stars, Ascending) => "stars",
            (Stars, Descending) => "-stars",
        }
    }

    /// Menu label, e.g. "Votes DESC"
    pub fn label(&self) -> String {
        format!("{} {}", self.field.label(), self.direction.label())
    }

    pub fn is_descending(&self) -> bool {
        self.direction == SortDirection::Descending
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.field, self.direction.reversed())
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::descending(SortField::PageRatingVotes)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, direction) = match s.strip_prefix(DESCENDING_PREFIX) {
            Some(name) => (name, SortDirection::Descending),
            None => (s, SortDirection::Ascending),
        };
        let field = SortField::all()
            .iter()
            .copied()
            .find(|field| field.id() == name)
            .ok_or_else(|| ConfigError::InvalidSortKey(s.to_string()))?;
        Ok(Self::new(field, direction))
    }
}

impl TryFrom<String> for SortKey {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.id().to_string()
    }
}
