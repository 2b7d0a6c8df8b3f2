//! Straight-line database seeder.
//!
//! Bootstraps a fresh builder database: two accounts, the section
//! catalog, the header variant, and one sample website. Inserts run
//! sequentially with no transaction; the first error aborts the run
//! and leaves the database partially seeded. Rerunning against a
//! seeded database fails on uniqueness constraints.

use std::path::Path;
use std::str::FromStr;

use chrono::Utc;
use serde::Serialize;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::error::SeedError;
use crate::seed::{defaults, schema};
use crate::section::SectionKind;

/// Row counts written by a completed seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    /// Rows inserted into `users`.
    pub users: u64,
    /// Rows inserted into `section_categories`.
    pub section_categories: u64,
    /// Rows inserted into `sections`.
    pub sections: u64,
    /// Rows inserted into `section_variants`.
    pub section_variants: u64,
    /// Rows inserted into `websites`.
    pub websites: u64,
}

impl SeedSummary {
    /// Total rows across all tables.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.users + self.section_categories + self.sections + self.section_variants
            + self.websites
    }
}

/// One-shot catalog seeder over a SQLite pool.
pub struct Seeder {
    pool: SqlitePool,
}

impl Seeder {
    /// Opens (or creates) a database file with foreign keys enforced.
    ///
    /// The pool is capped at one connection; the seeder writes strictly
    /// sequentially.
    pub async fn open(path: &Path) -> Result<Self, SeedError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|source| SeedError::Connect {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self { pool })
    }

    /// Opens a private in-memory database.
    ///
    /// Capped at one connection: each SQLite in-memory connection is its
    /// own database, so a larger pool would scatter rows.
    pub async fn in_memory() -> Result<Self, SeedError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|source| SeedError::Connect {
                path: ":memory:".to_string(),
                source,
            })?
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|source| SeedError::Connect {
                path: ":memory:".to_string(),
                source,
            })?;
        Ok(Self { pool })
    }

    /// The underlying pool, for verification queries.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates all tables. Safe to call on an existing database.
    pub async fn create_schema(&self) -> Result<(), SeedError> {
        for (name, ddl) in schema::ALL_TABLES {
            sqlx::query(ddl)
                .execute(&self.pool)
                .await
                .map_err(SeedError::Schema)?;
            info!(table = name, "table created");
        }
        Ok(())
    }

    /// Seeds the full dataset and returns the inserted row counts.
    ///
    /// Insert order: admin user, regular user, six categories, six
    /// sections (one per category), the header variant, the sample
    /// website. Auto-increment ids from each insert link the child rows.
    pub async fn run(&self) -> Result<SeedSummary, SeedError> {
        let now = Utc::now().to_rfc3339();
        let mut summary = SeedSummary::default();

        self.insert_user(defaults::ADMIN_USER, true, &now).await?;
        let owner_id = self.insert_user(defaults::DEMO_USER, false, &now).await?;
        summary.users = 2;
        info!(table = "users", rows = summary.users, "table seeded");

        let mut category_ids = Vec::with_capacity(defaults::categories().len());
        for (position, name) in (1_i64..).zip(defaults::categories()) {
            category_ids.push(self.insert_category(name, position).await?);
            summary.section_categories += 1;
        }
        info!(
            table = "section_categories",
            rows = summary.section_categories,
            "table seeded"
        );

        let mut header_section_id = None;
        for (entry, category_id) in defaults::catalog().iter().zip(&category_ids) {
            let section_id = self.insert_section(*category_id, entry).await?;
            if entry.content.kind() == SectionKind::Header {
                header_section_id = Some(section_id);
            }
            summary.sections += 1;
        }
        info!(table = "sections", rows = summary.sections, "table seeded");

        if let Some(section_id) = header_section_id {
            self.insert_variant(
                section_id,
                defaults::HEADER_VARIANT_NAME,
                &defaults::transparent_header(),
            )
            .await?;
            summary.section_variants = 1;
            info!(
                table = "section_variants",
                rows = summary.section_variants,
                "table seeded"
            );
        }

        self.insert_website(owner_id, &now).await?;
        summary.websites = 1;
        info!(table = "websites", rows = summary.websites, "table seeded");

        info!(total = summary.total(), "seed complete");
        Ok(summary)
    }

    /// Reads back per-table row counts.
    pub async fn verify(&self) -> Result<SeedSummary, SeedError> {
        Ok(SeedSummary {
            users: self.count("users").await?,
            section_categories: self.count("section_categories").await?,
            sections: self.count("sections").await?,
            section_variants: self.count("section_variants").await?,
            websites: self.count("websites").await?,
        })
    }

    async fn insert_user(
        &self,
        (username, email): (&str, &str),
        is_admin: bool,
        created_at: &str,
    ) -> Result<i64, SeedError> {
        let result = sqlx::query(
            "INSERT INTO users (username, email, password_hash, is_admin, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(username)
        .bind(email)
        .bind(defaults::PLACEHOLDER_HASH)
        .bind(is_admin)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|source| SeedError::Insert {
            table: "users",
            source,
        })?;
        Ok(result.last_insert_rowid())
    }

    async fn insert_category(&self, name: &str, position: i64) -> Result<i64, SeedError> {
        let result =
            sqlx::query("INSERT INTO section_categories (name, position) VALUES (?, ?)")
                .bind(name)
                .bind(position)
                .execute(&self.pool)
                .await
                .map_err(|source| SeedError::Insert {
                    table: "section_categories",
                    source,
                })?;
        Ok(result.last_insert_rowid())
    }

    async fn insert_section(
        &self,
        category_id: i64,
        entry: &defaults::CatalogEntry,
    ) -> Result<i64, SeedError> {
        let data = serde_json::to_string(&entry.content).map_err(|source| SeedError::Encode {
            table: "sections",
            source,
        })?;
        let result = sqlx::query(
            "INSERT INTO sections (category_id, name, kind, default_data) VALUES (?, ?, ?, ?)",
        )
        .bind(category_id)
        .bind(entry.name)
        .bind(entry.content.kind().as_str())
        .bind(&data)
        .execute(&self.pool)
        .await
        .map_err(|source| SeedError::Insert {
            table: "sections",
            source,
        })?;
        Ok(result.last_insert_rowid())
    }

    async fn insert_variant(
        &self,
        section_id: i64,
        name: &str,
        content: &crate::section::schema::SectionContent,
    ) -> Result<i64, SeedError> {
        let data = serde_json::to_string(content).map_err(|source| SeedError::Encode {
            table: "section_variants",
            source,
        })?;
        let result =
            sqlx::query("INSERT INTO section_variants (section_id, name, data) VALUES (?, ?, ?)")
                .bind(section_id)
                .bind(name)
                .bind(&data)
                .execute(&self.pool)
                .await
                .map_err(|source| SeedError::Insert {
                    table: "section_variants",
                    source,
                })?;
        Ok(result.last_insert_rowid())
    }

    async fn insert_website(&self, owner_id: i64, created_at: &str) -> Result<i64, SeedError> {
        let pages =
            serde_json::to_string(&defaults::sample_pages()).map_err(|source| SeedError::Encode {
                table: "websites",
                source,
            })?;
        let (name, slug) = defaults::SAMPLE_WEBSITE;
        let result = sqlx::query(
            "INSERT INTO websites (owner_id, name, slug, pages, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(owner_id)
        .bind(name)
        .bind(slug)
        .bind(&pages)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|source| SeedError::Insert {
            table: "websites",
            source,
        })?;
        Ok(result.last_insert_rowid())
    }

    async fn count(&self, table: &'static str) -> Result<u64, SeedError> {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .map_err(SeedError::Verify)?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}
