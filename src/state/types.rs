//! Data Types
//!
//! Wire shapes from the analytics API and the hero sort order.

use std::cmp::Ordering;

/// A hero's aggregate statistics record.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct HeroStats {
    /// Fraction of matches won, in [0, 1].
    pub win_rate: f64,
    /// Kills-deaths-assists composite.
    pub kda: f64,
    pub games_played: u32,
    pub avg_damage: f64,
}

/// A hero with its statistics, flattened from the hero-stats mapping.
#[derive(Clone, Debug, PartialEq)]
pub struct Hero {
    pub id: u32,
    pub stats: HeroStats,
}

impl Hero {
    pub fn name(&self) -> String {
        format!("Hero {}", self.id)
    }
}

/// The shape returned by `GET /heroes`, held in rosters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct HeroRef {
    pub id: u32,
}

impl HeroRef {
    pub fn name(&self) -> String {
        format!("Hero {}", self.id)
    }
}

/// One element of `GET /matches/recent`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct MatchSummary {
    pub id: u32,
    pub match_id: String,
    pub timestamp: chrono::NaiveDateTime,
    /// Match length in seconds.
    pub duration: u32,
    pub winner_team: u8,
    pub map: String,
}

impl MatchSummary {
    /// Duration as `m:ss`.
    pub fn duration_label(&self) -> String {
        format!("{}:{:02}", self.duration / 60, self.duration % 60)
    }
}

/// One element of `GET /analytics/team-compositions`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct TeamComposition {
    pub id: u32,
    pub heroes: Vec<u32>,
    pub win_rate: f64,
    pub total_games: u32,
}

impl TeamComposition {
    pub fn label(&self) -> String {
        self.heroes
            .iter()
            .map(|id| format!("Hero {}", id))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Body of `POST /predictions/match-outcome`.
#[derive(Debug, serde::Serialize)]
pub struct PredictionRequest {
    pub team1: Vec<u32>,
    pub team2: Vec<u32>,
}

/// Response of `POST /predictions/match-outcome`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Prediction {
    /// Team index, 1 or 2.
    pub predicted_winner: u8,
    /// Fraction in [0, 1].
    pub win_probability: f64,
}

/// The four metrics the hero list can be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortMetric {
    WinRate,
    Kda,
    GamesPlayed,
    AvgDamage,
}

impl SortMetric {
    pub const ALL: [SortMetric; 4] = [
        SortMetric::WinRate,
        SortMetric::Kda,
        SortMetric::GamesPlayed,
        SortMetric::AvgDamage,
    ];

    /// Stable key used as the sort control's option value.
    pub fn key(self) -> &'static str {
        match self {
            SortMetric::WinRate => "win_rate",
            SortMetric::Kda => "kda",
            SortMetric::GamesPlayed => "games_played",
            SortMetric::AvgDamage => "avg_damage",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMetric::WinRate => "Win Rate",
            SortMetric::Kda => "KDA",
            SortMetric::GamesPlayed => "Games Played",
            SortMetric::AvgDamage => "Average Damage",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }

    pub fn value_of(self, hero: &Hero) -> f64 {
        match self {
            SortMetric::WinRate => hero.stats.win_rate,
            SortMetric::Kda => hero.stats.kda,
            SortMetric::GamesPlayed => hero.stats.games_played as f64,
            SortMetric::AvgDamage => hero.stats.avg_damage,
        }
    }
}

/// Sort descending by the selected metric; ties order by ascending id.
pub fn sort_heroes(heroes: &mut [Hero], metric: SortMetric) {
    heroes.sort_by(|a, b| {
        metric
            .value_of(b)
            .partial_cmp(&metric.value_of(a))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(id: u32, win_rate: f64, kda: f64, games_played: u32, avg_damage: f64) -> Hero {
        Hero {
            id,
            stats: HeroStats {
                win_rate,
                kda,
                games_played,
                avg_damage,
            },
        }
    }

    fn sample() -> Vec<Hero> {
        vec![
            hero(1, 0.48, 2.1, 340, 14200.0),
            hero(2, 0.61, 3.4, 120, 18750.5),
            hero(3, 0.55, 1.9, 980, 9300.0),
            hero(4, 0.61, 4.0, 55, 21000.0),
        ]
    }

    #[test]
    fn sorting_is_non_increasing_for_every_metric() {
        for metric in SortMetric::ALL {
            let mut list = sample();
            sort_heroes(&mut list, metric);
            for pair in list.windows(2) {
                assert!(
                    metric.value_of(&pair[0]) >= metric.value_of(&pair[1]),
                    "{:?} out of order",
                    metric
                );
            }
        }
    }

    #[test]
    fn equal_values_order_by_ascending_id() {
        let mut list = vec![hero(7, 0.5, 1.0, 10, 100.0), hero(2, 0.5, 2.0, 20, 200.0)];
        sort_heroes(&mut list, SortMetric::WinRate);
        assert_eq!(list[0].id, 2);
        assert_eq!(list[1].id, 7);
    }

    #[test]
    fn sort_metric_keys_round_trip() {
        for metric in SortMetric::ALL {
            assert_eq!(SortMetric::from_key(metric.key()), Some(metric));
        }
        assert_eq!(SortMetric::from_key("pick_rate"), None);
    }

    #[test]
    fn prediction_request_wire_format() {
        let req = PredictionRequest {
            team1: vec![1, 2, 3],
            team2: vec![4, 5, 6],
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"team1":[1,2,3],"team2":[4,5,6]}"#
        );
    }

    #[test]
    fn hero_stats_record_decodes() {
        let stats: HeroStats = serde_json::from_str(
            r#"{"win_rate":0.55,"kda":3.2,"games_played":120,"avg_damage":18432.5}"#,
        )
        .unwrap();
        assert_eq!(stats.games_played, 120);
        assert!((stats.win_rate - 0.55).abs() < f64::EPSILON);
    }

    #[test]
    fn prediction_decodes_and_ignores_extra_fields() {
        let p: Prediction = serde_json::from_str(
            r#"{"predicted_winner":2,"win_probability":0.64,"confidence":0.8}"#,
        )
        .unwrap();
        assert_eq!(p.predicted_winner, 2);
        assert!((p.win_probability - 0.64).abs() < f64::EPSILON);
    }

    #[test]
    fn match_summary_decodes_backend_timestamps() {
        let m: MatchSummary = serde_json::from_str(
            r#"{"id":1,"match_id":"m-001","timestamp":"2024-03-01T12:00:00.123456","duration":754,"winner_team":2,"map":"Tokyo 2099"}"#,
        )
        .unwrap();
        assert_eq!(m.winner_team, 2);
        assert_eq!(m.duration_label(), "12:34");
    }

    #[test]
    fn hero_display_names() {
        assert_eq!(hero(9, 0.5, 1.0, 1, 1.0).name(), "Hero 9");
        assert_eq!(HeroRef { id: 12 }.name(), "Hero 12");
    }
}
