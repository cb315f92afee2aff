use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum ApiKeys {
	Table,
	Id,
	Key,
	IsActive,
	CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {

		manager
			.create_table(
				Table::create()
					.table(ApiKeys::Table)
					.comment("issued api keys, not consulted by any route yet")
					.col(
						ColumnDef::new(ApiKeys::Id)
							.big_integer()
							.not_null()
							.auto_increment()
							.primary_key()
					)
					.col(ColumnDef::new(ApiKeys::Key).string_len(128).not_null().unique_key())
					.col(ColumnDef::new(ApiKeys::IsActive).boolean().not_null().default(true))
					.col(ColumnDef::new(ApiKeys::CreatedAt).date_time().not_null().default(Expr::current_timestamp()))
					.to_owned()
			)
			.await?;

		manager
			.create_index(Index::create().unique().name("index-api-keys-key").table(ApiKeys::Table).col(ApiKeys::Key).to_owned())
			.await?;

		Ok(())
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.drop_table(Table::drop().table(ApiKeys::Table).to_owned())
			.await?;

		Ok(())
	}
}
