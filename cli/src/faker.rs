const TITLES: [&str; 6] = [
	"Backend Engineer",
	"Product Designer",
	"Data Analyst",
	"Support Specialist",
	"Site Reliability Engineer",
	"Technical Writer",
];

const DEPARTMENTS: [&str; 4] = ["Engineering", "Design", "Operations", "Customer Success"];

pub async fn faker(ctx: jobboard::Context, count: u64) -> Result<(), sea_orm::DbErr> {
	for i in 0..count {
		let title = TITLES[(i as usize) % TITLES.len()];
		let department = DEPARTMENTS[(i as usize) % DEPARTMENTS.len()];
		let job = jobboard::board::create_job(
			ctx.db(),
			format!("{title} #{}", i + 1),
			department.to_string(),
			Some(format!("generated sample position in {department}")),
			i % 3 != 2,
		).await?;
		tracing::debug!("inserted fake job #{}", job.id);
	}

	tracing::info!("inserted {count} fake jobs");
	Ok(())
}
