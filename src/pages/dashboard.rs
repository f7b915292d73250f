//! Dashboard Page
//!
//! Overview: recent-match summary, hero win-rate chart, and recommended
//! compositions, with navigation into the detail pages.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{CardSkeleton, ChartSkeleton, WinRateChart, WinRateDatum};
use crate::state::{sort_heroes, MatchSummary, SortMetric, TeamComposition};

/// How many heroes the win-rate chart shows, most-played first.
const CHART_HEROES: usize = 8;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let (matches, set_matches) = create_signal(Vec::<MatchSummary>::new());
    let (chart_data, set_chart_data) = create_signal(Vec::<WinRateDatum>::new());
    let (compositions, set_compositions) = create_signal(Vec::<TeamComposition>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    // Fetch initial data on mount. The recent-matches fetch drives the
    // loading/error/ready states; the secondary fetches degrade to empty
    // sections and a console message. All completions use try_set so a late
    // response after navigating away is a no-op.
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_recent_matches().await {
                Ok(list) => {
                    set_matches.try_set(list);
                }
                Err(e) => {
                    set_error.try_set(Some(e));
                }
            }

            match api::fetch_hero_stats().await {
                Ok(mut heroes) => {
                    sort_heroes(&mut heroes, SortMetric::GamesPlayed);
                    let data = heroes
                        .into_iter()
                        .take(CHART_HEROES)
                        .map(|h| WinRateDatum {
                            name: h.name(),
                            win_rate: h.stats.win_rate,
                        })
                        .collect();
                    set_chart_data.try_set(data);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching hero stats: {}", e).into());
                }
            }

            match api::fetch_team_compositions().await {
                Ok(list) => {
                    set_compositions.try_set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error fetching team compositions: {}", e).into(),
                    );
                }
            }

            set_loading.try_set(false);
        });
    });

    // Aggregates derived client-side from the fetched data.
    let avg_win_rate = create_memo(move |_| {
        let data = chart_data.get();
        if data.is_empty() {
            return None;
        }
        Some(data.iter().map(|d| d.win_rate).sum::<f64>() / data.len() as f64)
    });

    let avg_duration = create_memo(move |_| {
        let list = matches.get();
        if list.is_empty() {
            return None;
        }
        Some(list.iter().map(|m| m.duration).sum::<u32>() / list.len() as u32)
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Rivals Analytics Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Hero performance and match outcomes at a glance"</p>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="space-y-8">
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                <CardSkeleton />
                                <CardSkeleton />
                                <CardSkeleton />
                            </div>
                            <ChartSkeleton />
                        </div>
                    }
                    .into_view()
                } else if let Some(err) = error.get() {
                    view! {
                        <div class="bg-gray-800 rounded-xl p-6 text-red-400">
                            "Error: " {err}
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="space-y-8">
                            // Summary tiles
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                <SummaryTile
                                    label="Matches Analyzed"
                                    value=Signal::derive(move || matches.get().len().to_string())
                                />
                                <SummaryTile
                                    label="Average Win Rate"
                                    value=Signal::derive(move || {
                                        avg_win_rate
                                            .get()
                                            .map(|r| format!("{:.1}%", r * 100.0))
                                            .unwrap_or_else(|| "—".to_string())
                                    })
                                />
                                <SummaryTile
                                    label="Average Match Length"
                                    value=Signal::derive(move || {
                                        avg_duration
                                            .get()
                                            .map(|secs| format!("{}:{:02}", secs / 60, secs % 60))
                                            .unwrap_or_else(|| "—".to_string())
                                    })
                                />
                            </div>

                            // Win-rate chart for the most-played heroes
                            <section class="bg-gray-800 rounded-xl p-6">
                                <h2 class="text-xl font-semibold mb-4">"Hero Win Rates"</h2>
                                <WinRateChart data=chart_data />
                            </section>

                            // Recommended compositions
                            <section class="bg-gray-800 rounded-xl p-6">
                                <h2 class="text-xl font-semibold mb-4">"Recommended Compositions"</h2>
                                {move || {
                                    let comps = compositions.get();
                                    if comps.is_empty() {
                                        view! {
                                            <p class="text-gray-500 text-sm">"No composition data"</p>
                                        }
                                        .into_view()
                                    } else {
                                        view! {
                                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                                {comps
                                                    .into_iter()
                                                    .map(|comp| view! { <CompositionCard comp=comp /> })
                                                    .collect_view()}
                                            </div>
                                        }
                                        .into_view()
                                    }
                                }}
                            </section>

                            // Recent matches
                            <RecentMatches matches=matches />

                            // Navigation cards
                            <div class="grid md:grid-cols-2 gap-4">
                                <A
                                    href="/heroes"
                                    class="block bg-gray-800 rounded-xl p-6 border border-gray-700
                                           hover:border-gray-600 transition-colors"
                                >
                                    <h2 class="text-xl font-semibold">"Hero Analytics"</h2>
                                    <p class="text-gray-400 mt-1">
                                        "View statistics and performance metrics for all heroes"
                                    </p>
                                </A>
                                <A
                                    href="/team-builder"
                                    class="block bg-gray-800 rounded-xl p-6 border border-gray-700
                                           hover:border-gray-600 transition-colors"
                                >
                                    <h2 class="text-xl font-semibold">"Team Builder"</h2>
                                    <p class="text-gray-400 mt-1">
                                        "Create team compositions and get win predictions"
                                    </p>
                                </A>
                            </div>
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

/// Single summary tile
#[component]
fn SummaryTile(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">{move || value.get()}</div>
        </div>
    }
}

/// Recommended composition card
#[component]
fn CompositionCard(comp: TeamComposition) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-4">
            <div class="font-medium">{comp.label()}</div>
            <div class="flex items-center space-x-4 mt-2 text-sm text-gray-400">
                <span>{format!("Win Rate: {:.1}%", comp.win_rate * 100.0)}</span>
                <span>{format!("Games: {}", comp.total_games)}</span>
            </div>
        </div>
    }
}

/// Recent matches list
#[component]
fn RecentMatches(matches: ReadSignal<Vec<MatchSummary>>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Recent Matches"</h2>

            <div class="space-y-2">
                {move || {
                    let list = matches.get();
                    if list.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"No recent matches"</p>
                        }
                        .into_view()
                    } else {
                        list.into_iter()
                            .map(|m| {
                                let time = m.timestamp.format("%b %d, %H:%M").to_string();
                                view! {
                                    <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                        <div>
                                            <span class="font-medium">{m.map.clone()}</span>
                                            <span class="text-gray-400 text-sm ml-2">{time}</span>
                                        </div>
                                        <div class="flex items-center space-x-4 text-sm">
                                            <span class="text-gray-400">{m.duration_label()}</span>
                                            <span class="px-2 py-0.5 bg-gray-700 rounded-full">
                                                {format!("Team {} won", m.winner_team)}
                                            </span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_view()
                    }
                }}
            </div>
        </section>
    }
}
