//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::navigation::Navigation;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, profile::ProfilePage, progress::ProgressPage,
    register::RegisterPage, videos::VideosPage, workouts::WorkoutsPage,
};
use crate::state::auth::{self, AuthState};
use crate::util::auth::replace_options;

/// Root application component.
///
/// Provides the shared session context, restores any persisted session
/// before the first render, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::booting());
    provide_context(auth);
    auth::restore_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/fittrack.css"/>
        <Title text="Fitness App"/>

        <Router>
            <Navigation/>
            <main class="app__main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("workouts") view=WorkoutsPage/>
                    <Route path=StaticSegment("progress") view=ProgressPage/>
                    <Route path=StaticSegment("videos") view=VideosPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Landing route: bounces to the dashboard or the login view depending on
/// whether a session was restored.
#[component]
fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = if state.authenticated { "/dashboard" } else { "/login" };
        navigate(target, replace_options());
    });

    view! { <p class="app__loading">"Loading..."</p> }
}
