//! Builder database schema.
//!
//! Plain DDL strings executed by the seeder. Auto-increment integer
//! primary keys throughout; child tables reference parents by id.
//! Foreign-key enforcement is switched on per connection by the
//! seeder, not here.

/// Registered accounts. Password hashes are opaque placeholder strings.
pub const CREATE_USERS: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    username      TEXT NOT NULL UNIQUE,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    is_admin      INTEGER NOT NULL DEFAULT 0,
    created_at    TEXT NOT NULL
)";

/// Catalog categories in display order.
pub const CREATE_SECTION_CATEGORIES: &str = "\
CREATE TABLE IF NOT EXISTS section_categories (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT NOT NULL UNIQUE,
    position INTEGER NOT NULL
)";

/// Stock sections. `default_data` holds a JSON content record matching
/// the section's kind schema.
pub const CREATE_SECTIONS: &str = "\
CREATE TABLE IF NOT EXISTS sections (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    category_id  INTEGER NOT NULL REFERENCES section_categories(id),
    name         TEXT NOT NULL UNIQUE,
    kind         TEXT NOT NULL,
    default_data TEXT NOT NULL
)";

/// Alternate content records for a section, selectable by label.
pub const CREATE_SECTION_VARIANTS: &str = "\
CREATE TABLE IF NOT EXISTS section_variants (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    section_id INTEGER NOT NULL REFERENCES sections(id),
    name       TEXT NOT NULL,
    data       TEXT NOT NULL,
    UNIQUE (section_id, name)
)";

/// Author-owned websites. `pages` holds a JSON array of section configs.
pub const CREATE_WEBSITES: &str = "\
CREATE TABLE IF NOT EXISTS websites (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    owner_id   INTEGER NOT NULL REFERENCES users(id),
    name       TEXT NOT NULL,
    slug       TEXT NOT NULL UNIQUE,
    pages      TEXT NOT NULL,
    created_at TEXT NOT NULL
)";

/// Every table with its DDL, in dependency order.
pub const ALL_TABLES: &[(&str, &str)] = &[
    ("users", CREATE_USERS),
    ("section_categories", CREATE_SECTION_CATEGORIES),
    ("sections", CREATE_SECTIONS),
    ("section_variants", CREATE_SECTION_VARIANTS),
    ("websites", CREATE_WEBSITES),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_listed_in_dependency_order() {
        let names: Vec<&str> = ALL_TABLES.iter().map(|(name, _)| *name).collect();
        let position = |name: &str| names.iter().position(|n| *n == name).unwrap();

        assert!(position("section_categories") < position("sections"));
        assert!(position("sections") < position("section_variants"));
        assert!(position("users") < position("websites"));
    }

    #[test]
    fn ddl_names_match_table_names() {
        for (name, ddl) in ALL_TABLES {
            assert!(
                ddl.contains(&format!("CREATE TABLE IF NOT EXISTS {name}")),
                "DDL for '{name}' creates a different table"
            );
        }
    }
}
