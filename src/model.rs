//! Value types returned by a dictionary connection.
//!
//! All three are plain immutable records: constructed once while a
//! response is decoded, then handed to the caller and never mutated.

/// A dictionary database hosted by the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Database {
    name: String,
    description: String,
}

impl Database {
    /// Create a database entry.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The `*` sentinel: search every database the server hosts.
    ///
    /// Valid as a command argument, never returned by `SHOW DB`.
    pub fn any() -> Self {
        Self::new("*", "Any database")
    }

    /// The `!` sentinel: stop at the first database with a match.
    ///
    /// Valid as a command argument, never returned by `SHOW DB`.
    pub fn first_match() -> Self {
        Self::new("!", "First database with a match")
    }

    /// The database identifier, unique per server.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The server-provided human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A word-matching strategy advertised by the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchingStrategy {
    name: String,
    description: String,
}

impl MatchingStrategy {
    /// Create a strategy entry.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The `.` sentinel: use the server-dependent default strategy.
    pub fn server_default() -> Self {
        Self::new(".", "Server default strategy")
    }

    /// The strategy identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The server-provided human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// One definition of a word, as retrieved from one database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Definition {
    word: String,
    database: String,
    body: String,
}

impl Definition {
    /// Create a definition with its finalized body.
    pub fn new(
        word: impl Into<String>,
        database: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            database: database.into(),
            body: body.into(),
        }
    }

    /// The headword this definition is for.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The name of the database the definition came from.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// The definition text, lines joined with `\n`.
    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert_eq!(Database::any().name(), "*");
        assert_eq!(Database::first_match().name(), "!");
        assert_eq!(MatchingStrategy::server_default().name(), ".");
    }

    #[test]
    fn test_accessors() {
        let db = Database::new("wn", "WordNet");
        assert_eq!(db.name(), "wn");
        assert_eq!(db.description(), "WordNet");

        let def = Definition::new("test", "wn", "A test definition.");
        assert_eq!(def.word(), "test");
        assert_eq!(def.database(), "wn");
        assert_eq!(def.body(), "A test definition.");
    }
}
