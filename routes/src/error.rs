use axum::{extract::rejection::JsonRejection, http::StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	#[error("database error: {0:?}")]
	Database(#[from] sea_orm::DbErr),

	#[error("{0}")]
	Board(#[from] jobboard::BoardError),

	#[error("invalid request body: {0}")]
	Body(#[from] JsonRejection),

	#[error("invalid fields: {0}")]
	Validation(#[from] validator::ValidationErrors),

	// wrapper error to return arbitrary status codes
	#[error("{0}")]
	Status(StatusCode),
}

impl ApiError {
	pub fn not_found() -> Self {
		Self::Status(axum::http::StatusCode::NOT_FOUND)
	}
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<axum::http::StatusCode> for ApiError {
	fn from(value: axum::http::StatusCode) -> Self {
		ApiError::Status(value)
	}
}

impl axum::response::IntoResponse for ApiError {
	fn into_response(self) -> axum::response::Response {
		tracing::debug!("emitting error response: {self:?}");
		let descr = self.to_string();
		match self {
			ApiError::Status(status) => status.into_response(),
			ApiError::Board(jobboard::BoardError::JobNotFound(_)) => (
				StatusCode::NOT_FOUND,
				axum::Json(serde_json::json!({
					"error": "not found",
					"description": descr,
				}))
			).into_response(),
			ApiError::Database(e) | ApiError::Board(jobboard::BoardError::Database(e)) => {
				tracing::error!("database failure while serving request: {e}");
				(
					StatusCode::SERVICE_UNAVAILABLE,
					axum::Json(serde_json::json!({
						"error": "database",
						"inner": format!("{e:#?}"),
					}))
				).into_response()
			},
			// undecodable bodies count as invalid input, same as failed field constraints
			ApiError::Body(rejection) => (
				StatusCode::UNPROCESSABLE_ENTITY,
				axum::Json(serde_json::json!({
					"error": "body",
					"description": rejection.body_text(),
				}))
			).into_response(),
			ApiError::Validation(errors) => {
				let fields : serde_json::Map<String, serde_json::Value> = errors
					.field_errors()
					.into_iter()
					.map(|(field, errs)| (
						field.to_string(),
						errs.iter()
							.map(|e| serde_json::json!({ "code": e.code, "message": e.message }))
							.collect::<serde_json::Value>()
					))
					.collect();
				(
					StatusCode::UNPROCESSABLE_ENTITY,
					axum::Json(serde_json::json!({
						"error": "validation",
						"description": descr,
						"fields": fields,
					}))
				).into_response()
			},
		}
	}
}
