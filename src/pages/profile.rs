//! Profile page: re-fetches the account projection and renders it.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::card::Card;
use crate::components::error_banner::ErrorBanner;
use crate::net::types::{Role, User};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Badge styling per role; an unset role renders as a regular user.
pub(crate) fn role_badge_class(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => "badge badge--admin",
        Some(Role::Premium) => "badge badge--premium",
        Some(Role::User) | None => "badge badge--user",
    }
}

/// Profile page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let profile = RwSignal::new(None::<User>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_profile().await {
            Ok(user) => profile.set(Some(user)),
            Err(err) => error.set(err.message().to_owned()),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    // Prefer the freshly fetched projection, fall back to the session copy.
    let current = move || profile.get().or_else(|| auth.get().user);

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
        <div class="profile-page">
            <h1>"My Profile"</h1>

            <ErrorBanner message=error/>

            <Show when=move || loading.get()>
                <p class="list-page__loading">"Loading profile..."</p>
            </Show>

            <Show when=move || !loading.get()>
                <Card title="Profile Information">
                    {move || {
                        current()
                            .map(|user| {
                                let role = user.role;
                                let role_name = role.map_or("user", Role::as_str).to_uppercase();
                                view! {
                                    <div class="profile-page__fields">
                                        <p><strong>"Name: "</strong> {user.name.clone()}</p>
                                        <p><strong>"Email: "</strong> {user.email.clone()}</p>
                                        <p><strong>"Goal: "</strong> {user.goal.label()}</p>
                                        <p>
                                            <strong>"Role: "</strong>
                                            <span class=role_badge_class(role)>{role_name}</span>
                                        </p>
                                    </div>
                                }
                            })
                    }}
                </Card>
                <Card title="Account Actions">
                    <button class="btn btn--danger" on:click=on_logout>
                        "Logout"
                    </button>
                </Card>
            </Show>
        </div>
    }
}
