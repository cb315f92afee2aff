use std::path::PathBuf;
use std::time::Duration;
use clap::{Parser, Subcommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use signal_hook::consts::signal::*;
use signal_hook_tokio::Signals;
use futures::stream::StreamExt;
use tracing::log::LevelFilter;

use jobboard::ext::DiscardFailure;
#[cfg(feature = "cli")]
use jobboard_cli as cli;

#[cfg(feature = "migrate")]
use jobboard_migrations as migrations;

#[cfg(feature = "serve")]
use jobboard_routes as routes;


#[derive(Parser)]
/// jobboard: open positions and the applications sent to them
struct Args {
	#[clap(subcommand)]
	command: Mode,

	/// toml file with settings, built-in defaults are used when absent
	#[arg(short, long)]
	config: Option<PathBuf>,

	#[arg(long = "db")]
	/// connection uri (sqlite:// or postgres://), replaces datasource.connection_string
	database: Option<String>,

	#[arg(long, default_value_t=false)]
	/// log at debug level, including every sql statement
	debug: bool,

	#[arg(long)]
	/// size of the async worker pool, one per core when unset
	threads: Option<usize>,
}

#[derive(Clone, Subcommand)]
enum Mode {
	/// dump effective settings as toml and exit
	Config,

	#[cfg(feature = "migrate")]
	/// create or upgrade jobs, applications and api_keys tables
	Migrate,

	#[cfg(feature = "cli")]
	/// manage job postings without going through http
	Cli {
		#[clap(subcommand)]
		command: cli::CliCommand,
	},

	#[cfg(feature = "serve")]
	/// answer http requests under /api until SIGINT or SIGTERM
	Serve {
		#[arg(short, long, default_value="127.0.0.1:3000")]
		/// listen address
		bind: String,
	},
}

fn main() {
	let args = Args::parse();

	let level = if args.debug { tracing::Level::DEBUG } else { tracing::Level::INFO };
	tracing_subscriber::fmt()
		.compact()
		.with_max_level(level)
		.init();

	let config = jobboard::Config::load(args.config.as_ref());

	if matches!(args.command, Mode::Config) {
		match toml::to_string_pretty(&config) {
			Ok(dump) => println!("{dump}"),
			Err(e) => tracing::error!(error = %e, "settings cannot be rendered as toml"),
		}
		return;
	}

	let mut builder = tokio::runtime::Builder::new_multi_thread();
	if let Some(threads) = args.threads {
		builder.worker_threads(threads);
	}

	let runtime = builder
		.enable_io()
		.enable_time()
		.thread_name("jobboard-worker")
		.build()
		.expect("no tokio runtime, cannot start");

	runtime.block_on(run(args, config));
}

async fn connect(uri: &str, cfg: &jobboard::config::DatasourceConfig) -> Result<DatabaseConnection, DbErr> {
	let slow_level = if cfg.slow_query_warn_enable { LevelFilter::Warn } else { LevelFilter::Debug };
	let mut opts = ConnectOptions::new(uri);
	opts
		.max_connections(cfg.max_connections)
		.min_connections(cfg.min_connections)
		.acquire_timeout(Duration::from_secs(cfg.acquire_timeout_seconds))
		.connect_timeout(Duration::from_secs(cfg.connect_timeout_seconds))
		.sqlx_logging(true)
		.sqlx_logging_level(LevelFilter::Debug)
		.sqlx_slow_statements_logging_settings(slow_level, Duration::from_secs(cfg.slow_query_warn_seconds));
	Database::connect(opts).await
}

async fn run(args: Args, config: jobboard::Config) {
	let uri = args.database.clone().unwrap_or_else(|| config.datasource.connection_string.clone());

	let db = match connect(&uri, &config.datasource).await {
		Ok(db) => db,
		Err(e) => return tracing::error!(error = %e, "could not open datasource"),
	};
	tracing::debug!("datasource ready, {} to {} pooled connections", config.datasource.min_connections, config.datasource.max_connections);

	#[cfg(feature = "migrate")]
	if matches!(args.command, Mode::Migrate) {
		use migrations::MigratorTrait;

		match migrations::Migrator::up(&db, None).await {
			Ok(()) => tracing::info!("schema is up to date"),
			Err(e) => tracing::error!(error = %e, "migration aborted"),
		}
		return;
	}

	let signals = match Signals::new([SIGTERM, SIGINT]) {
		Ok(s) => s,
		Err(e) => return tracing::error!(error = %e, "cannot listen for stop signals"),
	};
	let signals_handle = signals.handle();
	#[cfg_attr(not(feature = "serve"), allow(unused))]
	let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);
	let watcher = tokio::spawn(watch_signals(signals, stop_tx));

	#[cfg_attr(not(any(feature = "serve", feature = "cli")), allow(unused))]
	let ctx = jobboard::Context::new(db, config);

	match args.command {
		#[cfg(feature = "cli")]
		Mode::Cli { command } => {
			if let Err(e) = cli::run(ctx, command).await {
				tracing::error!(error = %e, "maintenance task failed");
			}
		},

		#[cfg(feature = "serve")]
		Mode::Serve { bind } => {
			tracing::info!("starting jobboard v{}", jobboard::VERSION);
			if let Err(e) = routes::serve(ctx, bind, StopSignal(stop_rx)).await {
				tracing::error!(error = %e, "http server stopped with an error");
			}
		},

		// both handled above, before anything is spawned
		Mode::Config => {},
		#[cfg(feature = "migrate")]
		Mode::Migrate => {},
	}

	signals_handle.close();
	watcher.await.discard_warn("signal watcher did not finish cleanly");
}

/// resolves once SIGINT or SIGTERM arrived, or the watcher task went away
#[cfg_attr(not(feature = "serve"), allow(unused))]
struct StopSignal(tokio::sync::watch::Receiver<bool>);

#[cfg(feature = "serve")]
impl routes::ShutdownToken for StopSignal {
	async fn event(mut self) {
		self.0.wait_for(|stop| *stop).await
			.map(|_| ())
			.discard_warn("signal watcher gone, shutting down anyway");
	}
}

async fn watch_signals(mut signals: Signals, stop: tokio::sync::watch::Sender<bool>) {
	while let Some(signal) = signals.next().await {
		if matches!(signal, SIGTERM | SIGINT) {
			tracing::info!(signal, "stop requested, draining open requests");
			stop.send(true).discard_info("nothing was waiting for the stop request");
		}
	}
}
