use super::*;
use crate::server::{
    middleware::modding::{ModdingHistoryGuard, Resolution},
    model::modding::ModdingAction,
};
use chrono::Utc;
use url::Url;

mod resolve;

fn app_url() -> Url {
    Url::parse("https://osu.example.com").unwrap()
}

fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
