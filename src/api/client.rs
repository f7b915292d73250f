//! HTTP API Client
//!
//! Functions for communicating with the analytics REST API.

use gloo_net::http::Request;
use std::collections::HashMap;

use crate::state::{
    Hero, HeroRef, HeroStats, MatchSummary, Prediction, PredictionRequest, TeamComposition,
};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("rivals_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Error payload the backend returns on non-2xx responses
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

async fn decode_error(response: gloo_net::http::Response) -> String {
    let error: ApiError = response.json().await.unwrap_or(ApiError {
        error: "Unknown error".to_string(),
        code: None,
    });
    error.error
}

/// Fetch the recent-matches list
pub async fn fetch_recent_matches() -> Result<Vec<MatchSummary>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/matches/recent", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(decode_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch hero statistics, flattened into a list ordered by id
pub async fn fetch_hero_stats() -> Result<Vec<Hero>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/analytics/hero-stats", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(decode_error(response).await);
    }

    let raw: HashMap<String, HeroStats> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(flatten_hero_stats(raw))
}

/// Transform the hero-id -> statistics mapping into an ordered hero list.
/// Keys that do not parse as ids are dropped.
pub(crate) fn flatten_hero_stats(raw: HashMap<String, HeroStats>) -> Vec<Hero> {
    let mut heroes: Vec<Hero> = raw
        .into_iter()
        .filter_map(|(id, stats)| id.parse().ok().map(|id| Hero { id, stats }))
        .collect();
    heroes.sort_by_key(|h| h.id);
    heroes
}

/// Fetch the selectable hero pool
pub async fn fetch_heroes() -> Result<Vec<HeroRef>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/heroes", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(decode_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the highest-win-rate team compositions
pub async fn fetch_team_compositions() -> Result<Vec<TeamComposition>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/analytics/team-compositions", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(decode_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Request a match-outcome prediction for two full rosters
pub async fn predict_match_outcome(
    team1: Vec<u32>,
    team2: Vec<u32>,
) -> Result<Prediction, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/predictions/match-outcome", api_base))
        .json(&PredictionRequest { team1, team2 })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(decode_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(win_rate: f64) -> HeroStats {
        HeroStats {
            win_rate,
            kda: 2.0,
            games_played: 50,
            avg_damage: 12000.0,
        }
    }

    #[test]
    fn hero_stats_map_flattens_ordered_by_id() {
        let mut raw = HashMap::new();
        raw.insert("3".to_string(), stats(0.4));
        raw.insert("1".to_string(), stats(0.6));
        raw.insert("2".to_string(), stats(0.5));

        let heroes = flatten_hero_stats(raw);
        let ids: Vec<u32> = heroes.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn unparseable_map_keys_are_dropped() {
        let mut raw = HashMap::new();
        raw.insert("7".to_string(), stats(0.5));
        raw.insert("not-an-id".to_string(), stats(0.5));

        let heroes = flatten_hero_stats(raw);
        assert_eq!(heroes.len(), 1);
        assert_eq!(heroes[0].id, 7);
    }
}
