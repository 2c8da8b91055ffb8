//! Database schema definitions

/// SQL to create the entries table
pub const CREATE_ENTRIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    mail TEXT UNIQUE NOT NULL,
    text TEXT NOT NULL,
    friend INTEGER NOT NULL DEFAULT 0,
    best TEXT REFERENCES entries(mail)
)
"#;

/// SQL to create the friends table
/// Pairs are unordered; nothing in the schema prevents duplicates or self-edges
pub const CREATE_FRIENDS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS friends (
    mail1 TEXT NOT NULL,
    mail2 TEXT NOT NULL
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_friends_mail1 ON friends(mail1)",
    "CREATE INDEX IF NOT EXISTS idx_friends_mail2 ON friends(mail2)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_ENTRIES_TABLE, CREATE_FRIENDS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
