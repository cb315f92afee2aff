use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "applications")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i64,
	pub job_id: i64,
	pub candidate_name: String,
	pub email: String,
	pub resume_file_path: Option<String>,
	#[sea_orm(column_type = "Text", nullable)]
	pub cover_letter: Option<String>,
	/// naive, always UTC
	pub submitted_date: ChronoDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::job::Entity",
		from = "Column::JobId",
		to = "super::job::Column::Id",
		on_update = "Cascade",
		on_delete = "Cascade"
	)]
	Jobs,
}

impl Related<super::job::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Jobs.def()
	}
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
	async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
	where
		C: ConnectionTrait,
	{
		if insert && self.submitted_date.is_not_set() {
			self.submitted_date = sea_orm::ActiveValue::Set(chrono::Utc::now().naive_utc());
		}
		Ok(self)
	}
}
