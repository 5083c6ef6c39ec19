use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KudosuGiverDto {
    pub url: String,
    pub username: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KudosuPostDto {
    pub url: Option<String>,
    pub title: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KudosuHistoryDto {
    pub id: i32,
    pub action: String,
    pub amount: i32,
    pub model: String,
    pub created_at: DateTime<Utc>,
    pub giver: Option<KudosuGiverDto>,
    pub post: KudosuPostDto,
}
