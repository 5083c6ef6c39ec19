use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub username_clean: String,
    /// 0 for active accounts, 1 for inactive ones.
    pub user_type: i16,
    /// Non-zero when the account is restricted.
    pub user_warnings: i16,
    pub playmode: String,
    pub country_acronym: String,
    pub kudosu_total: i32,
    pub kudosu_available: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_group::Entity")]
    UserGroup,
    #[sea_orm(has_many = "super::username_change_history::Entity")]
    UsernameChangeHistory,
}

impl Related<super::user_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserGroup.def()
    }
}

impl Related<super::username_change_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsernameChangeHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
