use crate::server::model::{privilege::Privileges, search::SearchParams};

mod beatmapset_event;
mod discussion_post;
mod discussion_vote;
mod kudosu_history;
mod user;
mod username_change;

/// Search parameters for `user_id` built from a literal query.
fn search_params(user_id: i32, query: &[(&str, &str)], privileges: Privileges) -> SearchParams {
    let pairs: Vec<(String, String)> = query
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    SearchParams::from_query(&pairs, user_id, &privileges)
}

fn moderator() -> Privileges {
    Privileges {
        viewer_id: Some(1),
        is_moderator: true,
        is_kudosu_moderator: true,
    }
}
