use axum::{http::StatusCode, response::{IntoResponse, Response}};

/// 201 with a Location header pointing at the new resource, and its body
pub struct Created<T> {
	pub location: String,
	pub body: T,
}

impl<T: serde::Serialize> IntoResponse for Created<T> {
	fn into_response(self) -> Response {
		(
			StatusCode::CREATED,
			[("Location", self.location.as_str())],
			axum::Json(self.body),
		)
			.into_response()
	}
}
