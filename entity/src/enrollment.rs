use sea_orm::entity::prelude::*;

/// Pivot between a student profile and a career. The
/// (user_detail_id, career_id) pair is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_detail_id: i32,
    pub career_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_detail::Entity",
        from = "Column::UserDetailId",
        to = "super::user_detail::Column::Id"
    )]
    UserDetail,
    #[sea_orm(
        belongs_to = "super::career::Entity",
        from = "Column::CareerId",
        to = "super::career::Column::Id"
    )]
    Career,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
}

impl Related<super::user_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserDetail.def()
    }
}

impl Related<super::career::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Career.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
