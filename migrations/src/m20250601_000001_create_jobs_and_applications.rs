use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Jobs {
	Table,
	Id,
	Title,
	Department,
	Description,
	IsActive,
}

#[derive(DeriveIden)]
pub enum Applications {
	Table,
	Id,
	JobId,
	CandidateName,
	Email,
	ResumeFilePath,
	CoverLetter,
	SubmittedDate,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {

		manager
			.create_table(
				Table::create()
					.table(Jobs::Table)
					.comment("open and closed positions, listed only while active")
					.col(
						ColumnDef::new(Jobs::Id)
							.big_integer()
							.not_null()
							.auto_increment()
							.primary_key()
					)
					.col(ColumnDef::new(Jobs::Title).string_len(200).not_null())
					.col(ColumnDef::new(Jobs::Department).string_len(200).not_null())
					.col(ColumnDef::new(Jobs::Description).text().null())
					.col(ColumnDef::new(Jobs::IsActive).boolean().not_null().default(true))
					.to_owned()
			)
			.await?;

		manager
			.create_index(Index::create().name("index-jobs-is-active").table(Jobs::Table).col(Jobs::IsActive).to_owned())
			.await?;

		manager
			.create_table(
				Table::create()
					.table(Applications::Table)
					.comment("candidate submissions, each bound to exactly one job")
					.col(
						ColumnDef::new(Applications::Id)
							.big_integer()
							.not_null()
							.auto_increment()
							.primary_key()
					)
					.col(ColumnDef::new(Applications::JobId).big_integer().not_null())
					.foreign_key(
						ForeignKey::create()
							.name("fkey-applications-job")
							.from(Applications::Table, Applications::JobId)
							.to(Jobs::Table, Jobs::Id)
							.on_update(ForeignKeyAction::Cascade)
							.on_delete(ForeignKeyAction::Cascade)
					)
					.col(ColumnDef::new(Applications::CandidateName).string_len(200).not_null())
					.col(ColumnDef::new(Applications::Email).string_len(254).not_null())
					.col(ColumnDef::new(Applications::ResumeFilePath).string_len(500).null())
					.col(ColumnDef::new(Applications::CoverLetter).text().null())
					.col(ColumnDef::new(Applications::SubmittedDate).date_time().not_null().default(Expr::current_timestamp()))
					.to_owned()
			)
			.await?;

		manager
			.create_index(Index::create().name("index-applications-job-id").table(Applications::Table).col(Applications::JobId).to_owned())
			.await?;

		manager
			.create_index(Index::create().name("index-applications-email").table(Applications::Table).col(Applications::Email).to_owned())
			.await?;

		Ok(())
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.drop_table(Table::drop().table(Applications::Table).to_owned())
			.await?;

		manager
			.drop_table(Table::drop().table(Jobs::Table).to_owned())
			.await?;

		Ok(())
	}
}
