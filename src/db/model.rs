use serde::{Deserialize, Serialize};
use std::fmt;

/// A movie record as stored and served. The `id` is minted by the storage
/// backend on create and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub name: String,
    pub director: String,
    pub genre: String,
}

/// The client-writable subset of a movie, applied on create and update.
#[derive(Debug, Clone)]
pub struct MovieFields {
    pub name: String,
    pub director: String,
    pub genre: String,
}

/// Opaque storage key for a movie: the hex encoding of the backend's
/// 12-byte object id. Handlers validate keys with [`MovieKey::parse`]
/// before anything reaches the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovieKey(String);

impl MovieKey {
    /// Accepts exactly 24 ASCII hex digits, either case.
    pub fn parse(s: &str) -> Result<Self, InvalidMovieKey> {
        if s.len() == 24 && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidMovieKey)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid movie key, expected 24 hex digits")]
pub struct InvalidMovieKey;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Backend error: {0}")]
    Backend(String),
}

pub type DbResult<T> = Result<T, DbError>;
