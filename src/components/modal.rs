//! Modal dialog shell for page-local forms.

use leptos::prelude::*;

/// Backdrop + dialog container. Clicking the backdrop closes; clicks inside
/// the dialog do not propagate out.
#[component]
pub fn Modal(#[prop(into)] title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">{title}</h2>
                {children()}
            </div>
        </div>
    }
}
