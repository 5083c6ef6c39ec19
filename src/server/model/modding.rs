use crate::{
    model::modding::{ExtrasDto, ModdingHistoryDto, PerPageDto, VotesDto},
    server::{
        model::{
            discussion::DiscussionWithRelations,
            event::EventWithRelations,
            kudosu::{KudosuWithRelations, RECENT_KUDOSU_PER_PAGE},
            post::PostWithRelations,
            privilege::Privileges,
            search::SearchParams,
            user::{User, UserProfile},
            vote::VoteSummary,
        },
        util::url::UrlBuilder,
    },
};

/// The modding history pages, each served under `/api/users/{user}/modding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModdingAction {
    Index,
    Discussions,
    Events,
    Posts,
    VotesGiven,
    VotesReceived,
    Kudosu,
}

impl ModdingAction {
    /// Path of the action relative to the user's modding root.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Index => "",
            Self::Discussions => "/discussions",
            Self::Events => "/events",
            Self::Posts => "/posts",
            Self::VotesGiven => "/votes-given",
            Self::VotesReceived => "/votes-received",
            Self::Kudosu => "/kudosu",
        }
    }

    /// Whether the listing offers filtering by another user.
    pub fn shows_user_search(&self) -> bool {
        !matches!(self, Self::Discussions | Self::Events)
    }
}

/// Resolved target user and viewer state for one request.
#[derive(Debug, Clone)]
pub struct ModdingContext {
    pub action: ModdingAction,
    pub user: User,
    pub privileges: Privileges,
    pub params: SearchParams,
}

/// Everything shown on the modding history overview of one user.
pub struct ModdingHistory {
    pub profile: UserProfile,
    pub discussions: Vec<DiscussionWithRelations>,
    pub events: Vec<EventWithRelations>,
    pub posts: Vec<PostWithRelations>,
    pub votes_given: Vec<VoteSummary>,
    pub votes_received: Vec<VoteSummary>,
    /// Active, unrestricted users referenced by the records above.
    pub users: Vec<User>,
    /// One row more than shown so the client knows whether to offer more.
    pub recently_received_kudosu: Vec<KudosuWithRelations>,
}

impl ModdingHistory {
    pub fn into_dto(self, urls: &UrlBuilder) -> ModdingHistoryDto {
        ModdingHistoryDto {
            extras: ExtrasDto {
                recently_received_kudosu: self
                    .recently_received_kudosu
                    .into_iter()
                    .map(|history| history.into_dto(urls))
                    .collect(),
            },
            per_page: PerPageDto {
                recently_received_kudosu: RECENT_KUDOSU_PER_PAGE,
            },
            user: self.profile.into_dto(),
            discussions: self
                .discussions
                .into_iter()
                .map(DiscussionWithRelations::into_dto)
                .collect(),
            events: self
                .events
                .into_iter()
                .map(EventWithRelations::into_dto)
                .collect(),
            posts: self
                .posts
                .into_iter()
                .map(PostWithRelations::into_dto)
                .collect(),
            votes: VotesDto {
                given: self.votes_given.into_iter().map(VoteSummary::into_dto).collect(),
                received: self
                    .votes_received
                    .into_iter()
                    .map(VoteSummary::into_dto)
                    .collect(),
            },
            users: self
                .users
                .iter()
                .map(|user| user.to_compact_dto(true))
                .collect(),
        }
    }
}
