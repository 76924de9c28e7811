//! Body-progress page: list, create, edit, and delete entries.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::card::Card;
use crate::components::error_banner::ErrorBanner;
use crate::components::modal::Modal;
use crate::net::types::{Progress, ProgressPayload};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Raw form fields as entered.
#[derive(Clone, Debug, Default)]
pub(crate) struct ProgressForm {
    pub weight: String,
    pub body_fat: String,
    pub muscle_mass: String,
    pub notes: String,
    pub progress_date: String,
}

/// Coerce the form into a wire payload. Weight must parse; the optional
/// metrics default to 0 when left empty (the backend's "not measured"
/// value). Weight > 0 is only nudged by the input widget, not enforced
/// here.
pub(crate) fn parse_progress_form(form: &ProgressForm) -> Result<ProgressPayload, &'static str> {
    let weight = form
        .weight
        .trim()
        .parse::<f64>()
        .map_err(|_| "Enter your weight as a number.")?;
    if form.progress_date.trim().is_empty() {
        return Err("Progress date is required.");
    }
    let body_fat = parse_or_zero(&form.body_fat, "Enter body fat as a number.")?;
    let muscle_mass = parse_or_zero(&form.muscle_mass, "Enter muscle mass as a number.")?;
    let notes = form.notes.trim();
    Ok(ProgressPayload {
        weight,
        body_fat,
        muscle_mass,
        notes: (!notes.is_empty()).then(|| notes.to_owned()),
        progress_date: form.progress_date.trim().to_owned(),
    })
}

fn parse_or_zero(value: &str, message: &'static str) -> Result<f64, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0.0);
    }
    value.parse::<f64>().map_err(|_| message)
}

fn refresh_progress(list: RwSignal<Vec<Progress>>, loading: RwSignal<bool>, error: RwSignal<String>) {
    loading.set(true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::progress::list().await {
            Ok(items) => {
                list.set(items);
                error.set(String::new());
            }
            Err(err) => {
                list.set(Vec::new());
                error.set(err.message().to_owned());
            }
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);
}

/// Progress page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn ProgressPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let entries = RwSignal::new(Vec::<Progress>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let editing = RwSignal::new(None::<Option<i64>>);
    let form = RwSignal::new(ProgressForm::default());
    let delete_id = RwSignal::new(None::<i64>);

    refresh_progress(entries, loading, error);

    let on_add = move |_| {
        form.set(ProgressForm::default());
        editing.set(Some(None));
    };
    let on_edit = Callback::new(move |entry: Progress| {
        form.set(ProgressForm {
            weight: entry.weight.to_string(),
            body_fat: if entry.body_fat > 0.0 { entry.body_fat.to_string() } else { String::new() },
            muscle_mass: if entry.muscle_mass > 0.0 { entry.muscle_mass.to_string() } else { String::new() },
            notes: entry.notes.clone().unwrap_or_default(),
            progress_date: entry.progress_date.split('T').next().unwrap_or_default().to_owned(),
        });
        editing.set(Some(entry.id));
    });
    let on_cancel = Callback::new(move |()| editing.set(None));
    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));

    view! {
        <div class="list-page">
            <div class="list-page__header">
                <h1>"My Progress"</h1>
                <button class="btn btn--primary" on:click=on_add>
                    "Add Progress"
                </button>
            </div>

            <ErrorBanner message=error/>

            <Show when=move || loading.get()>
                <p class="list-page__loading">"Loading progress..."</p>
            </Show>

            <Show when=move || !loading.get() && entries.get().is_empty() && error.get().is_empty()>
                <Card>
                    <p class="list-page__empty">"No progress entries yet. Add your first entry!"</p>
                </Card>
            </Show>

            <div class="list-page__grid">
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .map(|entry| {
                            let edit_target = entry.clone();
                            let id = entry.id;
                            let body_fat = entry.body_fat;
                            let muscle_mass = entry.muscle_mass;
                            view! {
                                <Card title=entry.progress_date.clone()>
                                    <p><strong>"Weight: "</strong> {entry.weight} " kg"</p>
                                    <Show when=move || { body_fat > 0.0 }>
                                        <p><strong>"Body Fat: "</strong> {body_fat} "%"</p>
                                    </Show>
                                    <Show when=move || { muscle_mass > 0.0 }>
                                        <p><strong>"Muscle Mass: "</strong> {muscle_mass} " kg"</p>
                                    </Show>
                                    {entry.notes.clone().map(|notes| view! { <p class="card__notes">{notes}</p> })}
                                    <div class="card__actions">
                                        <button
                                            class="btn"
                                            on:click=move |_| on_edit.run(edit_target.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <button class="btn btn--danger" on:click=move |_| delete_id.set(id)>
                                            "Delete"
                                        </button>
                                    </div>
                                </Card>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || editing.get().is_some()>
                <ProgressDialog
                    editing=editing
                    form=form
                    on_cancel=on_cancel
                    entries=entries
                    loading=loading
                    error=error
                />
            </Show>
            <Show when=move || delete_id.get().is_some()>
                <DeleteProgressDialog
                    delete_id=delete_id
                    on_cancel=on_delete_cancel
                    entries=entries
                    loading=loading
                    error=error
                />
            </Show>
        </div>
    }
}

/// Modal form shared by create and edit.
#[component]
fn ProgressDialog(
    editing: RwSignal<Option<Option<i64>>>,
    form: RwSignal<ProgressForm>,
    on_cancel: Callback<()>,
    entries: RwSignal<Vec<Progress>>,
    loading: RwSignal<bool>,
    error: RwSignal<String>,
) -> impl IntoView {
    let title = move || if matches!(editing.get(), Some(Some(_))) { "Edit Progress" } else { "Add Progress" };

    let submit = Callback::new(move |()| {
        let payload = match parse_progress_form(&form.get()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        let target = editing.get().flatten();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match target {
                Some(id) => crate::net::progress::update(id, &payload).await.map(|_| ()),
                None => crate::net::progress::create(&payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    editing.set(None);
                    refresh_progress(entries, loading, error);
                }
                Err(err) => error.set(err.message().to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, target);
        }
    });

    view! {
        <Modal title=title() on_close=on_cancel>
            <form
                class="form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="form__label">
                    "Weight (kg)"
                    <input
                        class="form__input"
                        type="number"
                        min="1"
                        step="0.1"
                        prop:value=move || form.get().weight
                        on:input=move |ev| form.update(|f| f.weight = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Body Fat (%)"
                    <input
                        class="form__input"
                        type="number"
                        min="0"
                        step="0.1"
                        prop:value=move || form.get().body_fat
                        on:input=move |ev| form.update(|f| f.body_fat = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Muscle Mass (kg)"
                    <input
                        class="form__input"
                        type="number"
                        min="0"
                        step="0.1"
                        prop:value=move || form.get().muscle_mass
                        on:input=move |ev| form.update(|f| f.muscle_mass = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Notes"
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Optional notes"
                        prop:value=move || form.get().notes
                        on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Date"
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || form.get().progress_date
                        on:input=move |ev| form.update(|f| f.progress_date = event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit">
                        {move || if matches!(editing.get(), Some(Some(_))) { "Update" } else { "Create" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
fn DeleteProgressDialog(
    delete_id: RwSignal<Option<i64>>,
    on_cancel: Callback<()>,
    entries: RwSignal<Vec<Progress>>,
    loading: RwSignal<bool>,
    error: RwSignal<String>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let Some(id) = delete_id.get_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::progress::delete(id).await {
                Ok(()) => {
                    delete_id.set(None);
                    refresh_progress(entries, loading, error);
                }
                Err(err) => {
                    delete_id.set(None);
                    error.set(err.message().to_owned());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <Modal title="Delete Progress" on_close=on_cancel>
            <p class="dialog__danger">"Are you sure you want to delete this progress entry?"</p>
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--danger" on:click=move |_| submit.run(())>
                    "Delete"
                </button>
            </div>
        </Modal>
    }
}
