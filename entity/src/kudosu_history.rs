use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "kudosu_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub exchange_id: i32,
    pub receiver_id: i32,
    pub giver_id: Option<i32>,
    pub amount: i32,
    /// e.g. `vote.give`, `vote.reset`, `vote.revoke`, `deny.give`, `recalculate.reset`.
    pub action: String,
    pub kudosuable_type: String,
    pub kudosuable_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
