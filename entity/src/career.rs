use sea_orm::entity::prelude::*;

/// Academic program with a monthly tuition price. `monthly_price` always
/// mirrors the latest `career_prices` entry; historical values stay in
/// that table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "careers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub monthly_price: i32,
    pub duration_months: i32,
    pub cohort_start: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::career_price::Entity")]
    CareerPrice,
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
}

impl Related<super::career_price::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CareerPrice.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
