use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::Config;

/// shared handle given to every request: owns the connection pool and the loaded config
#[derive(Clone)]
pub struct Context(Arc<ContextInner>);
struct ContextInner {
	db: DatabaseConnection,
	config: Config,
}

impl Context {
	pub fn new(db: DatabaseConnection, config: Config) -> Self {
		Context(Arc::new(ContextInner { db, config }))
	}

	pub fn db(&self) -> &DatabaseConnection {
		&self.0.db
	}

	pub fn cfg(&self) -> &Config {
		&self.0.config
	}
}
