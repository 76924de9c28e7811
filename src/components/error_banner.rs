//! The red message box every page uses for request failures.
//!
//! No distinction is rendered between validation errors and server errors;
//! whatever message the caller stored is shown verbatim.

use leptos::prelude::*;

/// Renders the stored error message, or nothing while it is empty.
#[component]
pub fn ErrorBanner(message: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="error-banner">
                <strong>"Error: "</strong>
                {move || message.get()}
            </div>
        </Show>
    }
}
