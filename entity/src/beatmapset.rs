use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "beatmapset")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub artist: String,
    pub title: String,
    pub creator: String,
    /// -2 graveyard, -1 wip, 0 pending, 1 ranked, 2 approved, 3 qualified, 4 loved.
    pub approved: i16,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::beatmap::Entity")]
    Beatmap,
    #[sea_orm(has_many = "super::beatmap_discussion::Entity")]
    BeatmapDiscussion,
    #[sea_orm(has_many = "super::beatmapset_event::Entity")]
    BeatmapsetEvent,
}

impl Related<super::beatmap::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Beatmap.def()
    }
}

impl Related<super::beatmap_discussion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeatmapDiscussion.def()
    }
}

impl Related<super::beatmapset_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeatmapsetEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
