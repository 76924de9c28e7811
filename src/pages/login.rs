//! Login page with email/password authentication.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::card::Card;
use crate::components::error_banner::ErrorBanner;
use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;

/// Validate the login form into a request payload.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Login page. An already-authenticated user is redirected to `/dashboard`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    crate::util::auth::install_guest_redirect(auth, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
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
                match crate::state::auth::login(auth, &request).await {
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
            <Card title="Login">
                <ErrorBanner message=error/>
                <form class="form" on:submit=on_submit>
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
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-page__switch">
                    "Don't have an account? " <a href="/register">"Register"</a>
                </p>
            </Card>
        </div>
    }
}
