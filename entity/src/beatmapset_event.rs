use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "beatmapset_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub beatmapset_id: i32,
    pub beatmap_discussion_id: Option<i32>,
    pub user_id: Option<i32>,
    #[sea_orm(column_name = "type")]
    pub event_type: String,
    /// JSON encoded event details, shape depends on the event type.
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub created_at: DateTimeUtc,
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
        belongs_to = "super::beatmap_discussion::Entity",
        from = "Column::BeatmapDiscussionId",
        to = "super::beatmap_discussion::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    BeatmapDiscussion,
}

impl Related<super::beatmapset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Beatmapset.def()
    }
}

impl Related<super::beatmap_discussion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeatmapDiscussion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
