//! User domain models.
//!
//! Users are loaded together with their group memberships since both the
//! privilege checks and the compact view-model need them.

use chrono::{DateTime, Utc};

use crate::model::user::{KudosuDto, UserCompactDto, UserDto, UserGroupDto};

const BOT_GROUP: &str = "bot";

/// A site user with the group identifiers they belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub country_code: String,
    pub is_active: bool,
    pub is_restricted: bool,
    pub playmode: String,
    pub kudosu_total: i32,
    pub kudosu_available: i32,
    pub created_at: DateTime<Utc>,
    /// Group identifiers such as `admin`, `nat` or `bot`, sorted.
    pub groups: Vec<String>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model, mut groups: Vec<String>) -> Self {
        groups.sort();

        Self {
            id: entity.id,
            username: entity.username,
            country_code: entity.country_acronym,
            is_active: entity.user_type == 0,
            is_restricted: entity.user_warnings > 0,
            playmode: entity.playmode,
            kudosu_total: entity.kudosu_total,
            kudosu_available: entity.kudosu_available,
            created_at: entity.created_at,
            groups,
        }
    }

    pub fn is_bot(&self) -> bool {
        self.in_any_group(&[BOT_GROUP])
    }

    pub fn in_any_group(&self, identifiers: &[&str]) -> bool {
        self.groups
            .iter()
            .any(|group| identifiers.contains(&group.as_str()))
    }

    /// Active and unrestricted users have a public profile.
    pub fn has_profile_visible(&self) -> bool {
        self.is_active && !self.is_restricted
    }

    /// Converts the user to the compact view-model, optionally listing groups.
    pub fn to_compact_dto(&self, with_groups: bool) -> UserCompactDto {
        UserCompactDto {
            id: self.id,
            username: self.username.clone(),
            country_code: self.country_code.clone(),
            is_active: self.is_active,
            is_bot: self.is_bot(),
            is_restricted: self.is_restricted,
            groups: with_groups.then(|| {
                self.groups
                    .iter()
                    .map(|identifier| UserGroupDto {
                        identifier: identifier.clone(),
                    })
                    .collect()
            }),
        }
    }
}

/// Number of beatmapsets a user owns per status bucket, deleted sets excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeatmapsetCounts {
    pub ranked_and_approved: u64,
    pub loved: u64,
    pub unranked: u64,
    pub graveyard: u64,
}

impl BeatmapsetCounts {
    /// Buckets beatmapset `approved` states.
    ///
    /// Qualified sets (3) are not counted in any bucket.
    pub fn from_states(states: &[i16]) -> Self {
        let mut counts = Self::default();

        for state in states {
            match state {
                1 | 2 => counts.ranked_and_approved += 1,
                4 => counts.loved += 1,
                -1 | 0 => counts.unranked += 1,
                -2 => counts.graveyard += 1,
                _ => {}
            }
        }

        counts
    }
}

/// The user whose modding history is displayed, with profile extras.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: User,
    pub previous_usernames: Vec<String>,
    pub beatmapset_counts: BeatmapsetCounts,
}

impl UserProfile {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            compact: self.user.to_compact_dto(true),
            playmode: self.user.playmode,
            join_date: self.user.created_at,
            kudosu: KudosuDto {
                total: self.user.kudosu_total,
                available: self.user.kudosu_available,
            },
            previous_usernames: self.previous_usernames,
            ranked_and_approved_beatmapset_count: self.beatmapset_counts.ranked_and_approved,
            loved_beatmapset_count: self.beatmapset_counts.loved,
            unranked_beatmapset_count: self.beatmapset_counts.unranked,
            graveyard_beatmapset_count: self.beatmapset_counts.graveyard,
        }
    }
}

/// Collects the public previous usernames from visible username changes.
///
/// `changes` must be ordered oldest first. Duplicates and the current username are
/// dropped.
pub fn previous_usernames(
    changes: Vec<entity::username_change_history::Model>,
    current: &str,
) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for change in changes {
        if change.username_last != current && !names.contains(&change.username_last) {
            names.push(change.username_last);
        }
    }

    names
}
