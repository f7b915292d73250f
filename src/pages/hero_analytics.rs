//! Hero Analytics Page
//!
//! Sortable per-hero statistics fetched from the analytics backend.

use leptos::*;

use crate::api;
use crate::components::Loading;
use crate::state::{sort_heroes, Hero, SortMetric};

/// Hero analytics page component
#[component]
pub fn HeroAnalytics() -> impl IntoView {
    let (heroes, set_heroes) = create_signal(Vec::<Hero>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (sort_by, set_sort_by) = create_signal(SortMetric::WinRate);

    // Fetch hero statistics on mount. Completions write through try_set so a
    // late response after navigating away is a no-op.
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_hero_stats().await {
                Ok(list) => {
                    set_heroes.try_set(list);
                }
                Err(e) => {
                    set_error.try_set(Some(e));
                }
            }
            set_loading.try_set(false);
        });
    });

    // Re-sorted synchronously whenever the list or the selected metric changes.
    let sorted = create_memo(move |_| {
        let mut list = heroes.get();
        sort_heroes(&mut list, sort_by.get());
        list
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Hero Analytics"</h1>
                <p class="text-gray-400 mt-1">"Statistics and performance metrics for all heroes"</p>
            </div>

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else if let Some(err) = error.get() {
                    view! {
                        <div class="bg-gray-800 rounded-xl p-6 text-red-400">
                            "Error: " {err}
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="space-y-6">
                            // Sort control
                            <div class="flex items-center space-x-3">
                                <label class="text-sm text-gray-400">"Sort by:"</label>
                                <select
                                    on:change=move |ev| {
                                        if let Some(metric) = SortMetric::from_key(&event_target_value(&ev)) {
                                            set_sort_by.set(metric);
                                        }
                                    }
                                    prop:value=move || sort_by.get().key().to_string()
                                    class="bg-gray-700 rounded px-3 py-2 text-sm
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                >
                                    {SortMetric::ALL
                                        .into_iter()
                                        .map(|metric| {
                                            view! {
                                                <option value=metric.key()>{metric.label()}</option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>

                            // Hero card grid
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4">
                                {move || {
                                    sorted
                                        .get()
                                        .into_iter()
                                        .map(|hero| view! { <HeroCard hero=hero /> })
                                        .collect_view()
                                }}
                            </div>
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

/// Single hero statistics card
#[component]
fn HeroCard(hero: Hero) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <h3 class="font-semibold mb-3">{hero.name()}</h3>

            <div class="space-y-2 text-sm">
                <div class="flex items-center justify-between">
                    <span class="text-gray-400">"Win Rate:"</span>
                    <span>{format!("{:.1}%", hero.stats.win_rate * 100.0)}</span>
                </div>
                <div class="flex items-center justify-between">
                    <span class="text-gray-400">"KDA:"</span>
                    <span>{format!("{:.2}", hero.stats.kda)}</span>
                </div>
                <div class="flex items-center justify-between">
                    <span class="text-gray-400">"Games:"</span>
                    <span>{hero.stats.games_played}</span>
                </div>
                <div class="flex items-center justify-between">
                    <span class="text-gray-400">"Avg Damage:"</span>
                    <span>{format!("{:.0}", hero.stats.avg_damage)}</span>
                </div>
            </div>
        </div>
    }
}
