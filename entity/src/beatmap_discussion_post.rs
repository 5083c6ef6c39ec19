use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "beatmap_discussion_post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub beatmap_discussion_id: i32,
    pub user_id: Option<i32>,
    pub last_editor_id: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    /// System posts record state changes such as resolving a discussion.
    pub system: bool,
    pub deleted_at: Option<DateTimeUtc>,
    pub deleted_by_id: Option<i32>,
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
