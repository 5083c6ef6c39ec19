use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "beatmap_discussion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub beatmapset_id: i32,
    pub beatmap_id: Option<i32>,
    pub user_id: Option<i32>,
    /// One of `suggestion`, `problem`, `mapper_note`, `praise`, `hype` or `review`.
    pub message_type: String,
    pub resolved: bool,
    pub kudosu_denied: bool,
    pub deleted_at: Option<DateTimeUtc>,
    pub deleted_by_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub last_post_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::beatmapset::Entity",
        from = "Column::BeatmapsetId",
        to = "super::beatmapset::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Beatmapset,
    #[sea_orm(
        belongs_to = "super::beatmap::Entity",
        from = "Column::BeatmapId",
        to = "super::beatmap::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Beatmap,
    #[sea_orm(has_many = "super::beatmap_discussion_post::Entity")]
    BeatmapDiscussionPost,
    #[sea_orm(has_many = "super::beatmap_discussion_vote::Entity")]
    BeatmapDiscussionVote,
}

impl Related<super::beatmapset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Beatmapset.def()
    }
}

impl Related<super::beatmap::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Beatmap.def()
    }
}

impl Related<super::beatmap_discussion_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeatmapDiscussionPost.def()
    }
}

impl Related<super::beatmap_discussion_vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeatmapDiscussionVote.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
