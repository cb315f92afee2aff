use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i64,
	pub title: String,
	pub department: String,
	#[sea_orm(column_type = "Text", nullable)]
	pub description: Option<String>,
	pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(has_many = "super::application::Entity")]
	Applications,
}

impl Related<super::application::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Applications.def()
	}
}

impl ActiveModelBehavior for ActiveModel {
	fn new() -> Self {
		Self {
			is_active: sea_orm::ActiveValue::Set(true),
			..ActiveModelTrait::default()
		}
	}
}
