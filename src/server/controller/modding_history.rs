//! HTTP handlers for a user's modding history.
//!
//! Every handler resolves the `{user}` route segment through
//! `ModdingHistoryGuard` first. Unknown, bot and hidden users get a 404 and
//! name-based URLs are redirected to the id-based route with the query kept.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::modding::KudosuPageDto,
    server::{
        error::AppError,
        middleware::modding::{ModdingHistoryGuard, Resolution},
        model::{
            discussion::DiscussionWithRelations,
            event::EventWithRelations,
            kudosu::KudosuPageParams,
            modding::{ModdingAction, ModdingContext},
            post::PostWithRelations,
            vote::VoteWithRelations,
        },
        service::modding_history::ModdingHistoryService,
        state::AppState,
        util::url::UrlBuilder,
    },
};

type RawQuery = Query<Vec<(String, String)>>;

/// Resolves the target user or produces the redirect response.
async fn resolve(
    state: &AppState,
    session: &Session,
    action: ModdingAction,
    user: &str,
    query: &[(String, String)],
) -> Result<Result<ModdingContext, Response>, AppError> {
    let resolution = ModdingHistoryGuard::new(&state.db, session, &state.app_url)
        .resolve(action, user, query)
        .await?;

    Ok(match resolution {
        Resolution::Target(context) => Ok(context),
        Resolution::Redirect(url) => Err(Redirect::temporary(&url).into_response()),
    })
}

/// Overview of a user's modding history.
///
/// # Returns
/// - `200 OK` - Latest discussions, posts and events, vote summaries, referenced
///   users, recent kudosu and the user's profile
/// - `307 Temporary Redirect` - User named by username, redirected to the id route
/// - `404 Not Found` - Unknown, bot or hidden user
/// - `500 Internal Server Error` - Database or session error
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Path(user): Path<String>,
    Query(query): RawQuery,
) -> Result<Response, AppError> {
    let context = match resolve(&state, &session, ModdingAction::Index, &user, &query).await? {
        Ok(context) => context,
        Err(redirect) => return Ok(redirect),
    };

    let history = ModdingHistoryService::new(&state.db).index(context).await?;

    Ok(Json(history.into_dto(&UrlBuilder::new(&state.app_url))).into_response())
}

/// Paginated discussions started by the user.
///
/// # Returns
/// - `200 OK` - Page of discussions with author, beatmapset and starting post
/// - `307 Temporary Redirect` - User named by username
/// - `404 Not Found` - Unknown, bot or hidden user
pub async fn discussions(
    State(state): State<AppState>,
    session: Session,
    Path(user): Path<String>,
    Query(query): RawQuery,
) -> Result<Response, AppError> {
    let context = match resolve(&state, &session, ModdingAction::Discussions, &user, &query).await? {
        Ok(context) => context,
        Err(redirect) => return Ok(redirect),
    };

    let page = ModdingHistoryService::new(&state.db)
        .discussions(context)
        .await?;
    let urls = UrlBuilder::new(&state.app_url);

    Ok(Json(page.into_dto(&urls, DiscussionWithRelations::into_dto)).into_response())
}

/// Paginated beatmapset events performed by the user.
///
/// # Returns
/// - `200 OK` - Page of events with actor and beatmapset
/// - `307 Temporary Redirect` - User named by username
/// - `404 Not Found` - Unknown, bot or hidden user
pub async fn events(
    State(state): State<AppState>,
    session: Session,
    Path(user): Path<String>,
    Query(query): RawQuery,
) -> Result<Response, AppError> {
    let context = match resolve(&state, &session, ModdingAction::Events, &user, &query).await? {
        Ok(context) => context,
        Err(redirect) => return Ok(redirect),
    };

    let page = ModdingHistoryService::new(&state.db).events(context).await?;
    let urls = UrlBuilder::new(&state.app_url);

    Ok(Json(page.into_dto(&urls, EventWithRelations::into_dto)).into_response())
}

/// Paginated discussion posts written by the user.
///
/// # Returns
/// - `200 OK` - Page of posts with author and discussion
/// - `307 Temporary Redirect` - User named by username
/// - `404 Not Found` - Unknown, bot or hidden user
pub async fn posts(
    State(state): State<AppState>,
    session: Session,
    Path(user): Path<String>,
    Query(query): RawQuery,
) -> Result<Response, AppError> {
    let context = match resolve(&state, &session, ModdingAction::Posts, &user, &query).await? {
        Ok(context) => context,
        Err(redirect) => return Ok(redirect),
    };

    let page = ModdingHistoryService::new(&state.db).posts(context).await?;
    let urls = UrlBuilder::new(&state.app_url);

    Ok(Json(page.into_dto(&urls, PostWithRelations::into_dto)).into_response())
}

/// Paginated votes cast by the user.
pub async fn votes_given(
    State(state): State<AppState>,
    session: Session,
    Path(user): Path<String>,
    Query(query): RawQuery,
) -> Result<Response, AppError> {
    let context = match resolve(&state, &session, ModdingAction::VotesGiven, &user, &query).await? {
        Ok(context) => context,
        Err(redirect) => return Ok(redirect),
    };

    let page = ModdingHistoryService::new(&state.db)
        .votes_given(context)
        .await?;
    let urls = UrlBuilder::new(&state.app_url);

    Ok(Json(page.into_dto(&urls, VoteWithRelations::into_dto)).into_response())
}

/// Paginated votes other users cast on the user's discussions.
pub async fn votes_received(
    State(state): State<AppState>,
    session: Session,
    Path(user): Path<String>,
    Query(query): RawQuery,
) -> Result<Response, AppError> {
    let context =
        match resolve(&state, &session, ModdingAction::VotesReceived, &user, &query).await? {
            Ok(context) => context,
            Err(redirect) => return Ok(redirect),
        };

    let page = ModdingHistoryService::new(&state.db)
        .votes_received(context)
        .await?;
    let urls = UrlBuilder::new(&state.app_url);

    Ok(Json(page.into_dto(&urls, VoteWithRelations::into_dto)).into_response())
}

/// Received kudosu history beyond the overview, paged by `limit` and `offset`.
pub async fn kudosu(
    State(state): State<AppState>,
    session: Session,
    Path(user): Path<String>,
    Query(query): RawQuery,
) -> Result<Response, AppError> {
    let context = match resolve(&state, &session, ModdingAction::Kudosu, &user, &query).await? {
        Ok(context) => context,
        Err(redirect) => return Ok(redirect),
    };

    let paging = KudosuPageParams::from_query(&query);
    let history = ModdingHistoryService::new(&state.db)
        .kudosu(&context, paging)
        .await?;
    let urls = UrlBuilder::new(&state.app_url);

    Ok(Json(KudosuPageDto {
        items: history
            .into_iter()
            .map(|entry| entry.into_dto(&urls))
            .collect(),
        limit: paging.limit,
        offset: paging.offset,
    })
    .into_response())
}
