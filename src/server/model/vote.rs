use crate::{
    model::vote::{BeatmapDiscussionVoteDto, VoteSummaryDto},
    server::model::{discussion::DiscussionWithRelations, user::User},
};

/// How many months of votes the profile summaries cover.
pub const SUMMARY_MONTHS: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct VoteWithRelations {
    pub vote: entity::beatmap_discussion_vote::Model,
    pub user: Option<User>,
    pub discussion: Option<DiscussionWithRelations>,
}

impl VoteWithRelations {
    pub fn into_dto(self) -> BeatmapDiscussionVoteDto {
        BeatmapDiscussionVoteDto {
            id: self.vote.id,
            beatmap_discussion_id: self.vote.beatmap_discussion_id,
            user_id: self.vote.user_id,
            score: self.vote.score,
            created_at: self.vote.created_at,
            updated_at: self.vote.updated_at,
            user: self.user.map(|user| user.to_compact_dto(false)),
            beatmap_discussion: self.discussion.map(DiscussionWithRelations::into_dto),
        }
    }
}

/// Votes exchanged with one other user.
///
/// `user_id` is the discussion author for votes given and the voter for votes
/// received. It is `None` for discussions without an author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteSummary {
    pub user_id: Option<i32>,
    pub score: i64,
    pub count: i64,
}

impl VoteSummary {
    pub fn into_dto(self) -> VoteSummaryDto {
        VoteSummaryDto {
            user_id: self.user_id,
            score: self.score,
            count: self.count,
        }
    }
}
