mod job;
pub use job::*;

mod faker;
pub use faker::*;

#[derive(Debug, Clone, clap::Subcommand)]
pub enum CliCommand {
	/// manage posted jobs, which can't be created through the api
	Job {
		#[clap(subcommand)]
		/// action to take on jobs
		action: JobCommand,
	},

	/// insert sample jobs, a third of them closed
	Faker {
		/// how many fake jobs to insert
		count: u64,
	},
}

pub async fn run(ctx: jobboard::Context, command: CliCommand) -> Result<(), Box<dyn std::error::Error>> {
	tracing::info!("running cli task: {command:?}");
	match command {
		CliCommand::Job { action } =>
			Ok(job(ctx, action).await?),
		CliCommand::Faker { count } =>
			Ok(faker(ctx, count).await?),
	}
}

#[cfg(test)]
pub(crate) async fn test_context() -> jobboard::Context {
	use jobboard_migrations::MigratorTrait;

	let mut opts = sea_orm::ConnectOptions::new("sqlite::memory:");
	opts
		.max_connections(1)
		.min_connections(1)
		.sqlx_logging(false);
	let db = sea_orm::Database::connect(opts).await.unwrap();
	jobboard_migrations::Migrator::up(&db, None).await.unwrap();
	jobboard::Context::new(db, jobboard::Config::default())
}
