use axum::{extract::{Path, Query, State}, Json};

use jobboard::{transfer::JobOut, Context};

use crate::api::Pagination;

pub async fn list(
	State(ctx): State<Context>,
	Query(page): Query<Pagination>,
) -> crate::ApiResult<Json<Vec<JobOut>>> {
	let (limit, offset) = page.window(&ctx.cfg().listing);

	let jobs = jobboard::board::list_active_jobs(ctx.db(), offset, limit)
		.await?
		.into_iter()
		.map(JobOut::from)
		.collect();

	Ok(Json(jobs))
}

pub async fn view(
	State(ctx): State<Context>,
	Path(id): Path<i64>,
) -> crate::ApiResult<Json<JobOut>> {
	match jobboard::board::get_job(ctx.db(), id).await? {
		Some(job) => Ok(Json(job.into())),
		None => Err(crate::ApiError::not_found()),
	}
}
