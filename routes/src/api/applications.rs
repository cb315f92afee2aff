use axum::{extract::{Path, State}, Json};

use jobboard::{transfer::{ApplicationCreate, ApplicationOut}, Context};

use crate::{builders::Created, extract::ValidJson};

pub async fn create(
	State(ctx): State<Context>,
	ValidJson(input): ValidJson<ApplicationCreate>,
) -> crate::ApiResult<Created<ApplicationOut>> {
	let application = jobboard::board::create_application(ctx.db(), input).await?;

	Ok(Created {
		location: format!("/api/applications/{}/", application.id),
		body: application.into(),
	})
}

pub async fn view(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
) -> crate::ApiResult<Json<ApplicationOut>> {
	jobboard::board::get_application(ctx.db(), id)
		.await?
		.map(|x| Json(x.into()))
		.ok_or_else(crate::ApiError::not_found)
}
