//! Curated workout-video page.
//!
//! The lists are static; the default category follows the user's training
//! goal and can be overridden with the category buttons.

#[cfg(test)]
#[path = "videos_test.rs"]
mod videos_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::card::Card;
use crate::net::types::Goal;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// A curated video entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Video {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Video category shown on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Category {
    Hypertrophy,
    Cardio,
}

impl Category {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Category::Hypertrophy => "Muscle Building (Hypertrophy)",
            Category::Cardio => "Weight Loss (Cardio)",
        }
    }
}

/// Category a user lands on before picking one manually.
pub(crate) fn default_category(goal: Goal) -> Category {
    match goal {
        Goal::Hypertrophy => Category::Hypertrophy,
        Goal::LoseWeight => Category::Cardio,
    }
}

pub(crate) const HYPERTROPHY_VIDEOS: &[Video] = &[
    Video { id: "TLnVgSs1YXY", title: "Full Body Hypertrophy Workout", description: "Complete muscle building routine for all muscle groups" },
    Video { id: "g_tea8ZNk5A", title: "Push Pull Legs Split", description: "PPL workout program for maximum muscle growth" },
    Video { id: "UItWltVZZmE", title: "Back & Biceps Hypertrophy", description: "Upper body muscle building focused on back and biceps" },
    Video { id: "eaLjN8x90kY", title: "Chest & Triceps Workout", description: "Push day hypertrophy training for chest and triceps" },
    Video { id: "mlR6PBj8dB0", title: "Legs & Glutes Hypertrophy", description: "Lower body muscle building for legs and glutes" },
    Video { id: "jH1b3vE3XqE", title: "Shoulders & Arms Hypertrophy", description: "Upper body specialization for shoulders and arms" },
];

pub(crate) const CARDIO_VIDEOS: &[Video] = &[
    Video { id: "mlR6PBj8dB0", title: "30 Min Full Body Cardio", description: "High intensity fat burning workout for weight loss" },
    Video { id: "jH1b3vE3XqE", title: "HIIT Cardio Workout", description: "High intensity interval training for maximum calorie burn" },
    Video { id: "UItWltVZZmE", title: "Fat Burning Cardio", description: "Effective weight loss routine to burn calories" },
    Video { id: "TLnVgSs1YXY", title: "Low Impact Cardio", description: "Beginner friendly cardio workout without jumping" },
    Video { id: "g_tea8ZNk5A", title: "Dance Cardio Workout", description: "Fun and effective cardio session for weight loss" },
    Video { id: "eaLjN8x90kY", title: "Treadmill Cardio Routine", description: "Cardio workout perfect for weight loss goals" },
];

pub(crate) fn videos_for(category: Category) -> &'static [Video] {
    match category {
        Category::Hypertrophy => HYPERTROPHY_VIDEOS,
        Category::Cardio => CARDIO_VIDEOS,
    }
}

/// Embed URL for a curated video id.
pub(crate) fn embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}")
}

/// Videos page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn VideosPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let selected = RwSignal::new(None::<Category>);

    let goal = move || auth.get().user.map(|user| user.goal).unwrap_or_default();
    let current = move || selected.get().unwrap_or_else(|| default_category(goal()));

    view! {
        <div class="videos-page">
            <h1>"Workout Videos"</h1>
            <p>
                "Based on your goal: " <strong>{move || default_category(goal()).label()}</strong>
            </p>

            <div class="videos-page__categories">
                <button
                    class="btn"
                    class:btn--primary=move || current() == Category::Hypertrophy
                    on:click=move |_| selected.set(Some(Category::Hypertrophy))
                >
                    "Hypertrophy"
                </button>
                <button
                    class="btn"
                    class:btn--primary=move || current() == Category::Cardio
                    on:click=move |_| selected.set(Some(Category::Cardio))
                >
                    "Cardio"
                </button>
            </div>

            <div class="videos-page__grid">
                {move || {
                    videos_for(current())
                        .iter()
                        .map(|video| {
                            view! {
                                <Card>
                                    <iframe
                                        class="videos-page__frame"
                                        src=embed_url(video.id)
                                        title=video.title
                                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                        allowfullscreen="true"
                                    ></iframe>
                                    <h3>{video.title}</h3>
                                    <p>{video.description}</p>
                                </Card>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
