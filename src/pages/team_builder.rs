//! Team Builder Page
//!
//! Draft two rosters of three heroes and request a match-outcome prediction.

use leptos::*;

use crate::api;
use crate::state::{HeroRef, Prediction, Team, TeamDraft};

/// Team builder page component
#[component]
pub fn TeamBuilder() -> impl IntoView {
    let (heroes, set_heroes) = create_signal(Vec::<HeroRef>::new());
    let (draft, set_draft) = create_signal(TeamDraft::default());
    let (prediction, set_prediction) = create_signal(None::<Prediction>);

    // Fetch the hero pool once on mount. A failure is only logged; the
    // selection grid stays empty.
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_heroes().await {
                Ok(list) => {
                    set_heroes.try_set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching heroes: {}", e).into());
                }
            }
        });
    });

    // Single POST with both rosters; the response replaces the prediction
    // state. A failure is only logged, leaving the prior prediction intact.
    let on_predict = move |_| {
        let Some((team1, team2)) = draft.get().full_rosters() else {
            return;
        };
        spawn_local(async move {
            match api::predict_match_outcome(team1, team2).await {
                Ok(p) => {
                    set_prediction.try_set(Some(p));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error getting prediction: {}", e).into());
                }
            }
        });
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Team Builder"</h1>
                <p class="text-gray-400 mt-1">"Create team compositions and get win predictions"</p>
            </div>

            // Roster panels
            <div class="flex flex-col md:flex-row gap-4">
                <TeamPanel side=Team::One draft=draft set_draft=set_draft />
                <TeamPanel side=Team::Two draft=draft set_draft=set_draft />
            </div>

            // Hero selection grid
            <section class="bg-gray-800 rounded-xl p-6">
                <h3 class="text-lg font-semibold mb-4">"Available Heroes"</h3>
                <div class="grid grid-cols-3 md:grid-cols-6 gap-2">
                    {move || {
                        let current = draft.get();
                        let pool = heroes.get();
                        if pool.is_empty() {
                            return view! {
                                <p class="col-span-full text-gray-500 text-sm">"No heroes available"</p>
                            }
                            .into_view();
                        }
                        pool.into_iter()
                            .map(|hero| {
                                let taken = current.contains(hero.id);
                                view! {
                                    <button
                                        on:click=move |_| {
                                            set_draft.update(|d| {
                                                d.add(hero);
                                            });
                                        }
                                        disabled=taken
                                        class={if taken {
                                            "px-3 py-2 bg-gray-700 text-gray-500 rounded-lg text-sm cursor-not-allowed"
                                        } else {
                                            "px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                                        }}
                                    >
                                        {hero.name()}
                                    </button>
                                }
                            })
                            .collect_view()
                            .into_view()
                    }}
                </div>
            </section>

            // Predict action, rendered only when both rosters are full
            {move || {
                if draft.get().is_ready() {
                    view! {
                        <button
                            on:click=on_predict
                            class="w-full md:w-auto px-6 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Predict Winner"
                        </button>
                    }
                    .into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Prediction result
            {move || {
                prediction.get().map(|p| {
                    view! {
                        <section class="bg-gray-800 rounded-xl p-6">
                            <h3 class="text-xl font-semibold mb-2">"Prediction"</h3>
                            <p class="text-lg">
                                {format!("Team {} is likely to win!", p.predicted_winner)}
                            </p>
                            <p class="text-gray-400 mt-1">
                                {format!("Win Probability: {:.1}%", p.win_probability * 100.0)}
                            </p>
                        </section>
                    }
                })
            }}
        </div>
    }
}

/// One roster panel; click a drafted hero to remove it
#[component]
fn TeamPanel(
    side: Team,
    draft: ReadSignal<TeamDraft>,
    set_draft: WriteSignal<TeamDraft>,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6 flex-1">
            <h3 class="text-lg font-semibold mb-3">{format!("Team {}", side.index())}</h3>
            <div class="flex flex-wrap gap-2 min-h-[3rem]">
                {move || {
                    let members = draft.get().team(side).to_vec();
                    if members.is_empty() {
                        view! {
                            <p class="text-gray-500 text-sm">"Click a hero below to add"</p>
                        }
                        .into_view()
                    } else {
                        members
                            .into_iter()
                            .map(|hero| {
                                view! {
                                    <button
                                        on:click=move |_| {
                                            set_draft.update(|d| d.remove(hero.id, side));
                                        }
                                        class="px-3 py-2 bg-primary-600 hover:bg-red-600
                                               rounded-lg text-sm font-medium transition-colors"
                                    >
                                        {hero.name()}
                                    </button>
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
