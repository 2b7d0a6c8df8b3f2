//! Seed command handler.
//!
//! Creates the builder database file, applies the schema, and inserts
//! the starter rows.

use tracing::info;

use crate::cli::args::SeedArgs;
use crate::error::SitewrightError;
use crate::seed::{SeedSummary, Seeder};

/// Create and populate a builder database.
///
/// The run is not idempotent: seeding into a database that already
/// holds the starter rows fails on the unique constraints.
///
/// # Errors
///
/// Returns a seed error if the database cannot be opened, the schema
/// cannot be created, or any insert fails.
pub async fn run(args: &SeedArgs) -> Result<(), SitewrightError> {
    info!(database = %args.database.display(), "opening database");
    let seeder = Seeder::open(&args.database).await?;

    seeder.create_schema().await?;
    let summary = seeder.run().await?;

    print_summary(&summary);
    info!(database = %args.database.display(), "seed complete");
    Ok(())
}

fn print_summary(summary: &SeedSummary) {
    println!("{:<20} {}", "users", summary.users);
    println!("{:<20} {}", "section_categories", summary.section_categories);
    println!("{:<20} {}", "sections", summary.sections);
    println!("{:<20} {}", "section_variants", summary.section_variants);
    println!("{:<20} {}", "websites", summary.websites);
    println!("{:<20} {}", "total", summary.total());
}
