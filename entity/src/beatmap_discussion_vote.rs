use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "beatmap_discussion_vote")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub beatmap_discussion_id: i32,
    pub user_id: i32,
    /// +1 or -1.
    pub score: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::beatmap_discussion::Entity",
        from = "Column::BeatmapDiscussionId",
        to = "super::beatmap_discussion::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BeatmapDiscussion,
}

impl Related<super::beatmap_discussion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeatmapDiscussion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
