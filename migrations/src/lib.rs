use sea_orm_migration::prelude::*;

mod m20250601_000001_create_jobs_and_applications;
mod m20250601_000002_create_api_keys;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
	fn migrations() -> Vec<Box<dyn MigrationTrait>> {
		vec![
			Box::new(m20250601_000001_create_jobs_and_applications::Migration),
			Box::new(m20250601_000002_create_api_keys::Migration),
		]
	}
}

pub use sea_orm_migration::MigratorTrait;
