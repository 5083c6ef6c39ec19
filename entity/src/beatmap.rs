use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "beatmap")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub beatmapset_id: i32,
    pub version: String,
    pub deleted_at: Option<DateTimeUtc>,
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
}

impl Related<super::beatmapset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Beatmapset.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
