use sea_orm::entity::prelude::*;

/// Append-only price-change event for a career. Rows are never updated or
/// deleted; the amount in effect at an instant is the entry with the
/// greatest `effective_from` not after it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "career_prices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub career_id: i32,
    pub amount: i32,
    pub effective_from: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::career::Entity",
        from = "Column::CareerId",
        to = "super::career::Column::Id"
    )]
    Career,
}

impl Related<super::career::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Career.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
