//! Dashboard page: welcome header, barcode food lookup, and the generated
//! meal plan.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Food search and meal-plan
//! generation share one page-local error signal, like the screen they
//! replace; the two requests are otherwise independent.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::card::Card;
use crate::components::error_banner::ErrorBanner;
use crate::net::types::{Food, MealPlan};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Validate the barcode input before issuing a search.
pub(crate) fn validate_barcode(barcode: &str) -> Result<String, &'static str> {
    let barcode = barcode.trim();
    if barcode.is_empty() {
        return Err("Please enter a barcode");
    }
    Ok(barcode.to_owned())
}

/// Fixed two-decimal rendering for nutrition amounts.
pub(crate) fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Dashboard page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let barcode = RwSignal::new(String::new());
    let food = RwSignal::new(None::<Food>);
    let meal_plan = RwSignal::new(None::<MealPlan>);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_search = move |_| {
        if busy.get() {
            return;
        }
        let code = match validate_barcode(&barcode.get()) {
            Ok(code) => code,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);
        food.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::food::search(&code).await {
                Ok(result) => food.set(Some(result)),
                Err(err) => error.set(err.message().to_owned()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = code;
        }
    };

    let on_generate = move |_| {
        if busy.get() {
            return;
        }
        error.set(String::new());
        busy.set(true);
        meal_plan.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::meal_plan::fetch().await {
                Ok(plan) => meal_plan.set(Some(plan)),
                Err(err) => error.set(err.message().to_owned()),
            }
            busy.set(false);
        });
    };

    let welcome = move || {
        auth.get()
            .user
            .map(|user| (user.name, user.goal.label()))
            .unwrap_or_else(|| (String::new(), ""))
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().authenticated
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>{move || format!("Welcome, {}!", welcome().0)}</h1>
                    <p>"Your goal: " <strong>{move || welcome().1}</strong></p>
                </header>

                <ErrorBanner message=error/>

                <Card title="Search Food by Barcode">
                    <div class="search-form">
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Enter barcode (e.g., 3274080005003)"
                            prop:value=move || barcode.get()
                            on:input=move |ev| barcode.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    on_search(());
                                }
                            }
                        />
                        <button class="btn btn--primary" on:click=move |_| on_search(()) disabled=move || busy.get()>
                            {move || if busy.get() { "Searching..." } else { "Search" }}
                        </button>
                    </div>
                    {move || {
                        food.get()
                            .map(|food| {
                                view! {
                                    <div class="food-result">
                                        <h3>{food.name.clone()}</h3>
                                        <div class="nutrition-grid">
                                            <span>"Calories: " {format_amount(food.calories)} " kcal"</span>
                                            <span>"Protein: " {format_amount(food.protein)} "g"</span>
                                            <span>"Carbs: " {format_amount(food.carbs)} "g"</span>
                                            <span>"Fat: " {format_amount(food.fat)} "g"</span>
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </Card>

                <Card title="Your Meal Plan">
                    <button class="btn btn--primary" on:click=on_generate disabled=move || busy.get()>
                        {move || if busy.get() { "Generating..." } else { "Generate Meal Plan" }}
                    </button>
                    {move || {
                        meal_plan
                            .get()
                            .map(|plan| {
                                view! {
                                    <div class="meal-plan">
                                        <h3>"Summary"</h3>
                                        <div class="nutrition-grid">
                                            <span>"Total Calories: " {format_amount(plan.total_calories)} " kcal"</span>
                                            <span>"Total Protein: " {format_amount(plan.total_protein)} "g"</span>
                                            <span>"Total Carbs: " {format_amount(plan.total_carbs)} "g"</span>
                                            <span>"Total Fat: " {format_amount(plan.total_fat)} "g"</span>
                                        </div>
                                        <h3>{format!("Foods ({})", plan.foods.len())}</h3>
                                        <div class="meal-plan__foods">
                                            {plan
                                                .foods
                                                .into_iter()
                                                .map(|food| {
                                                    view! {
                                                        <div class="food-item">
                                                            <h4>{food.name.clone()}</h4>
                                                            <div class="nutrition-grid">
                                                                <span>"Calories: " {format_amount(food.calories)}</span>
                                                                <span>"Protein: " {format_amount(food.protein)} "g"</span>
                                                                <span>"Carbs: " {format_amount(food.carbs)} "g"</span>
                                                                <span>"Fat: " {format_amount(food.fat)} "g"</span>
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </Card>
            </div>
        </Show>
    }
}
