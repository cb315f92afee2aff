pub mod jobs;
pub mod applications;

use axum::{routing::{get, post}, Router};

impl crate::ApiRouter for Router<jobboard::Context> {
	fn api_routes(self) -> Self {
		// every route answers both with and without trailing slash
		self.nest("/api", Router::new()
			.route("/health", get(health))
			.route("/jobs", get(jobs::list))
			.route("/jobs/", get(jobs::list))
			.route("/jobs/{id}", get(jobs::view))
			.route("/jobs/{id}/", get(jobs::view))
			.route("/applications", post(applications::create))
			.route("/applications/", post(applications::create))
			.route("/applications/{id}", get(applications::view))
			.route("/applications/{id}/", get(applications::view))
		)
	}
}

async fn health() -> axum::Json<serde_json::Value> {
	axum::Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct Pagination {
	/// 1-based page number
	pub page: Option<u64>,
	pub per_page: Option<u64>,
	pub offset: Option<u64>,
	pub limit: Option<u64>,
}

impl Pagination {
	/// resolves to (limit, offset). raw offset/limit win over page/per_page when given, sizes are
	/// capped to configured maximum. both stay within what the store binds as a signed integer
	pub fn window(&self, cfg: &jobboard::config::ListingConfig) -> (u64, u64) {
		const STORE_MAX: u64 = i64::MAX as u64;
		let limit = self.limit
			.or(self.per_page)
			.unwrap_or(cfg.default_page_size)
			.min(cfg.max_page_size)
			.min(STORE_MAX);
		let offset = match self.offset {
			Some(offset) => offset,
			None => (self.page.unwrap_or(1).max(1) - 1).saturating_mul(limit),
		};
		(limit, offset.min(STORE_MAX))
	}
}
