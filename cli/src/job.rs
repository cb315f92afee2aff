use sea_orm::DbErr;

#[derive(Debug, Clone, clap::Subcommand)]
pub enum JobCommand {
	/// post a new job
	Add {
		/// job title, up to 200 characters
		title: String,

		#[arg(long)]
		/// owning department, up to 200 characters
		department: String,

		#[arg(long)]
		/// free-form job description
		description: Option<String>,

		#[arg(long, default_value_t = false)]
		/// create it closed, hidden from listings
		inactive: bool,
	},

	/// make a job visible in listings
	Open {
		/// job id
		id: i64,
	},

	/// hide a job from listings, it can still be fetched and applied to directly
	Close {
		/// job id
		id: i64,
	},

	/// delete a job and every application received for it
	Delete {
		/// job id
		id: i64,
	},
}

pub async fn job(ctx: jobboard::Context, action: JobCommand) -> Result<(), DbErr> {
	match action {
		JobCommand::Add { title, department, description, inactive } => {
			let job = jobboard::board::create_job(ctx.db(), title, department, description, !inactive).await?;
			tracing::info!("created job #{} '{}' (active: {})", job.id, job.title, job.is_active);
		},
		JobCommand::Open { id } => set_active(&ctx, id, true).await?,
		JobCommand::Close { id } => set_active(&ctx, id, false).await?,
		JobCommand::Delete { id } => {
			if !jobboard::board::delete_job(ctx.db(), id).await? {
				return Err(DbErr::RecordNotFound(format!("job #{id}")));
			}
			tracing::info!("deleted job #{id} and its applications");
		},
	}

	Ok(())
}

async fn set_active(ctx: &jobboard::Context, id: i64, active: bool) -> Result<(), DbErr> {
	let job = jobboard::board::set_job_active(ctx.db(), id, active)
		.await?
		.ok_or_else(|| DbErr::RecordNotFound(format!("job #{id}")))?;
	tracing::info!("job #{} '{}' is now {}", job.id, job.title, if job.is_active { "open" } else { "closed" });
	Ok(())
}

#[cfg(test)]
mod test {
	use super::{job, JobCommand};

	#[tokio::test]
	async fn add_close_and_delete() {
		let ctx = crate::test_context().await;

		job(ctx.clone(), JobCommand::Add {
			title: "Backend Engineer".into(),
			department: "Engineering".into(),
			description: None,
			inactive: false,
		}).await.unwrap();

		let listed = jobboard::board::list_active_jobs(ctx.db(), 0, 10).await.unwrap();
		assert_eq!(listed.len(), 1);
		let id = listed[0].id;

		job(ctx.clone(), JobCommand::Close { id }).await.unwrap();
		assert!(jobboard::board::list_active_jobs(ctx.db(), 0, 10).await.unwrap().is_empty());

		job(ctx.clone(), JobCommand::Delete { id }).await.unwrap();
		assert!(jobboard::board::get_job(ctx.db(), id).await.unwrap().is_none());
	}

	#[tokio::test]
	async fn acting_on_missing_job_fails() {
		let ctx = crate::test_context().await;
		assert!(job(ctx.clone(), JobCommand::Open { id: 7 }).await.is_err());
		assert!(job(ctx, JobCommand::Delete { id: 7 }).await.is_err());
	}
}
