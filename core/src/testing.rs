use jobboard_migrations::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// fresh in-memory sqlite with all migrations applied. a single pooled connection keeps the
/// in-memory database alive for the whole test
pub async fn database() -> DatabaseConnection {
	let mut opts = ConnectOptions::new("sqlite::memory:");
	opts
		.max_connections(1)
		.min_connections(1)
		.sqlx_logging(false);

	let db = Database::connect(opts)
		.await
		.expect("failed opening in-memory database");

	jobboard_migrations::Migrator::up(&db, None)
		.await
		.expect("failed applying migrations");

	db
}
