//! Top navigation bar, auth-aware.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Navigation shell: app links while a session is live, login/register
/// links otherwise, plus the current identity and a logout action.
#[component]
pub fn Navigation() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let identity = move || {
        auth.get().user.map(|user| {
            let role = user.role.map_or("user", Role::as_str);
            format!("{} ({role})", user.name)
        })
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::state::auth::logout(auth).await;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <nav class="nav">
            <a class="nav__brand" href="/">"Fitness App"</a>
            <Show when=move || auth.get().authenticated>
                <div class="nav__links">
                    <a href="/dashboard">"Dashboard"</a>
                    <a href="/workouts">"Workouts"</a>
                    <a href="/progress">"Progress"</a>
                    <a href="/videos">"Videos"</a>
                    <a href="/profile">"Profile"</a>
                </div>
            </Show>
            <span class="nav__spacer"></span>
            <Show
                when=move || auth.get().authenticated
                fallback=|| {
                    view! {
                        <div class="nav__links">
                            <a href="/login">"Login"</a>
                            <a href="/register">"Register"</a>
                        </div>
                    }
                }
            >
                <span class="nav__identity">{identity}</span>
                <button class="btn nav__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
