//! Registration page: account details plus optional body measurements.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::card::Card;
use crate::components::error_banner::ErrorBanner;
use crate::net::types::{Goal, RegisterRequest};
use crate::state::auth::AuthState;

/// Map the goal `<select>` value onto the wire enum.
pub(crate) fn goal_from_value(value: &str) -> Goal {
    match value {
        "hypertrophy" => Goal::Hypertrophy,
        _ => Goal::LoseWeight,
    }
}

/// Parse an optional measurement field: empty means unset, anything else
/// must be a number.
fn parse_optional_f64(value: &str, message: &'static str) -> Result<Option<f64>, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse::<f64>().map(Some).map_err(|_| message)
}

/// Validate the registration form into a request payload.
pub(crate) fn build_register_request(
    name: &str,
    email: &str,
    password: &str,
    goal: Goal,
    height: &str,
    weight: &str,
) -> Result<RegisterRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Name, email, and password are required.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        goal,
        height: parse_optional_f64(height, "Enter a valid height.")?,
        weight: parse_optional_f64(weight, "Enter a valid weight.")?,
    })
}

/// Registration page. An already-authenticated user is redirected to
/// `/dashboard`.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    crate::util::auth::install_guest_redirect(auth, navigate.clone());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let goal = RwSignal::new(Goal::LoseWeight);
    let height = RwSignal::new(String::new());
    let weight = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match build_register_request(
            &name.get(),
            &email.get(),
            &password.get(),
            goal.get(),
            &height.get(),
            &weight.get(),
        ) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                match crate::state::auth::register(auth, &request).await {
                    Ok(()) => navigate("/dashboard", leptos_router::NavigateOptions::default()),
                    Err(err) => error.set(err.message().to_owned()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate_submit);
        }
    };

    view! {
        <div class="auth-page">
            <Card title="Register">
                <ErrorBanner message=error/>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Name"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Your Name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Email"
                        <input
                            class="form__input"
                            type="email"
                            placeholder="your@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Password"
                        <input
                            class="form__input"
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Goal"
                        <select
                            class="form__input"
                            on:change=move |ev| goal.set(goal_from_value(&event_target_value(&ev)))
                        >
                            <option value="lose_weight" selected=move || goal.get() == Goal::LoseWeight>
                                "Lose Weight"
                            </option>
                            <option value="hypertrophy" selected=move || goal.get() == Goal::Hypertrophy>
                                "Hypertrophy"
                            </option>
                        </select>
                    </label>
                    <div class="form__row">
                        <label class="form__label">
                            "Height (cm)"
                            <input
                                class="form__input"
                                type="number"
                                step="0.1"
                                placeholder="170"
                                prop:value=move || height.get()
                                on:input=move |ev| height.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__label">
                            "Weight (kg)"
                            <input
                                class="form__input"
                                type="number"
                                step="0.1"
                                placeholder="70"
                                prop:value=move || weight.get()
                                on:input=move |ev| weight.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-page__switch">
                    "Already have an account? " <a href="/login">"Login"</a>
                </p>
            </Card>
        </div>
    }
}
