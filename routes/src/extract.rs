use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::ApiError;

/// json body that deserialized and passed its own field constraints. handlers taking this never
/// see malformed input
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
	T: DeserializeOwned + Validate,
	S: Send + Sync,
	axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
	type Rejection = ApiError;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
		value.validate()?;
		Ok(ValidJson(value))
	}
}
