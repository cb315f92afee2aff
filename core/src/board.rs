use sea_orm::{ActiveModelTrait, ActiveValue::{NotSet, Set}, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, TransactionTrait};

use crate::{model::{application, job}, transfer::ApplicationCreate};

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
	#[error("job #{0} not found")]
	JobNotFound(i64),

	#[error("database error: {0}")]
	Database(#[from] DbErr),
}

pub type BoardResult<T> = Result<T, BoardError>;

/// active jobs only, in primary key order
pub async fn list_active_jobs(db: &impl ConnectionTrait, offset: u64, limit: u64) -> Result<Vec<job::Model>, DbErr> {
	job::Entity::find()
		.filter(job::Column::IsActive.eq(true))
		.order_by_asc(job::Column::Id)
		.offset(offset)
		.limit(limit)
		.all(db)
		.await
}

pub async fn get_job(db: &impl ConnectionTrait, job_id: i64) -> Result<Option<job::Model>, DbErr> {
	job::Entity::find_by_id(job_id)
		.one(db)
		.await
}

/// checks the job exists and inserts the application in one transaction. the returned row comes
/// back from the store, so it carries the assigned id and submission date
pub async fn create_application(db: &impl TransactionTrait, input: ApplicationCreate) -> BoardResult<application::Model> {
	let tx = db.begin().await?;

	if get_job(&tx, input.job_id).await?.is_none() {
		tracing::debug!("refusing application for unknown job #{}", input.job_id);
		tx.rollback().await?;
		return Err(BoardError::JobNotFound(input.job_id));
	}

	let application = application::ActiveModel {
		id: NotSet,
		job_id: Set(input.job_id),
		candidate_name: Set(input.candidate_name),
		email: Set(input.email),
		resume_file_path: Set(input.resume_file_path),
		cover_letter: Set(input.cover_letter),
		submitted_date: NotSet,
	}
		.insert(&tx)
		.await?;

	tx.commit().await?;

	tracing::info!("received application #{} for job #{}", application.id, application.job_id);
	Ok(application)
}

pub async fn get_application(db: &impl ConnectionTrait, application_id: i64) -> Result<Option<application::Model>, DbErr> {
	application::Entity::find_by_id(application_id)
		.one(db)
		.await
}

pub async fn create_job(
	db: &impl ConnectionTrait,
	title: String,
	department: String,
	description: Option<String>,
	is_active: bool,
) -> Result<job::Model, DbErr> {
	job::ActiveModel {
		id: NotSet,
		title: Set(title),
		department: Set(department),
		description: Set(description),
		is_active: Set(is_active),
	}
		.insert(db)
		.await
}

/// returns None if there is no such job
pub async fn set_job_active(db: &impl ConnectionTrait, job_id: i64, active: bool) -> Result<Option<job::Model>, DbErr> {
	let Some(model) = get_job(db, job_id).await? else { return Ok(None) };
	let mut active_model = model.into_active_model();
	active_model.is_active = Set(active);
	Ok(Some(active_model.update(db).await?))
}

/// applications of this job go with it, through the foreign key cascade
pub async fn delete_job(db: &impl ConnectionTrait, job_id: i64) -> Result<bool, DbErr> {
	let res = job::Entity::delete_by_id(job_id)
		.exec(db)
		.await?;
	Ok(res.rows_affected > 0)
}
