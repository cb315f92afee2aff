use sea_orm::entity::prelude::*;

// schema only, nothing reads these yet

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "api_keys")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i64,
	#[sea_orm(unique)]
	pub key: String,
	pub is_active: bool,
	pub created_at: ChronoDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
	fn new() -> Self {
		Self {
			is_active: sea_orm::ActiveValue::Set(true),
			..ActiveModelTrait::default()
		}
	}

	async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
	where
		C: ConnectionTrait,
	{
		if insert && self.created_at.is_not_set() {
			self.created_at = sea_orm::ActiveValue::Set(chrono::Utc::now().naive_utc());
		}
		Ok(self)
	}
}
