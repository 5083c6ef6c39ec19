use crate::{
    model::beatmapset::{BeatmapCompactDto, BeatmapsetCompactDto},
    server::model::user::User,
};

/// Display name of a beatmapset `approved` state.
pub fn status_name(approved: i16) -> &'static str {
    match approved {
        -2 => "graveyard",
        -1 => "wip",
        0 => "pending",
        1 => "ranked",
        2 => "approved",
        3 => "qualified",
        4 => "loved",
        _ => "unknown",
    }
}

/// Beatmapset with its owner, when requested.
#[derive(Debug, Clone, PartialEq)]
pub struct BeatmapsetWithUser {
    pub beatmapset: entity::beatmapset::Model,
    pub user: Option<User>,
}

impl BeatmapsetWithUser {
    pub fn into_dto(self) -> BeatmapsetCompactDto {
        BeatmapsetCompactDto {
            id: self.beatmapset.id,
            user_id: self.beatmapset.user_id,
            status: status_name(self.beatmapset.approved).to_string(),
            artist: self.beatmapset.artist,
            title: self.beatmapset.title,
            creator: self.beatmapset.creator,
            deleted_at: self.beatmapset.deleted_at,
            user: self.user.map(|user| user.to_compact_dto(false)),
        }
    }

    /// Title shown in kudosu history entries.
    pub fn display_title(&self) -> String {
        format!("{} - {}", self.beatmapset.artist, self.beatmapset.title)
    }
}

pub fn beatmap_into_dto(beatmap: entity::beatmap::Model) -> BeatmapCompactDto {
    BeatmapCompactDto {
        id: beatmap.id,
        beatmapset_id: beatmap.beatmapset_id,
        version: beatmap.version,
        deleted_at: beatmap.deleted_at,
    }
}
