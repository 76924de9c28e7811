//! Workouts page: list, create, edit, and delete workout entries.
//!
//! The list is re-fetched after every successful mutation rather than
//! patched in place, matching the backend-as-source-of-truth model.

#[cfg(test)]
#[path = "workouts_test.rs"]
mod workouts_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::card::Card;
use crate::components::error_banner::ErrorBanner;
use crate::components::modal::Modal;
use crate::net::types::{Workout, WorkoutPayload};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Raw form fields as entered; numeric coercion happens in
/// [`parse_workout_form`].
#[derive(Clone, Debug, Default)]
pub(crate) struct WorkoutForm {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub calories_burned: String,
    pub workout_date: String,
}

/// Coerce the form into a wire payload: duration as whole minutes,
/// calories as a float, empty description omitted.
pub(crate) fn parse_workout_form(form: &WorkoutForm) -> Result<WorkoutPayload, &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Workout name is required.");
    }
    if form.workout_date.trim().is_empty() {
        return Err("Workout date is required.");
    }
    let duration = form
        .duration
        .trim()
        .parse::<i64>()
        .map_err(|_| "Enter the duration in whole minutes.")?;
    let calories_burned = form
        .calories_burned
        .trim()
        .parse::<f64>()
        .map_err(|_| "Enter the calories burned as a number.")?;
    let description = form.description.trim();
    Ok(WorkoutPayload {
        name: name.to_owned(),
        description: (!description.is_empty()).then(|| description.to_owned()),
        duration,
        calories_burned,
        workout_date: form.workout_date.trim().to_owned(),
    })
}

fn refresh_workouts(list: RwSignal<Vec<Workout>>, loading: RwSignal<bool>, error: RwSignal<String>) {
    loading.set(true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::workouts::list().await {
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

/// Workouts page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn WorkoutsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let workouts = RwSignal::new(Vec::<Workout>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    // Editing state: None = closed, Some(None) = create, Some(Some(id)) = edit.
    let editing = RwSignal::new(None::<Option<i64>>);
    let form = RwSignal::new(WorkoutForm::default());
    let delete_id = RwSignal::new(None::<i64>);

    refresh_workouts(workouts, loading, error);

    let on_add = move |_| {
        form.set(WorkoutForm::default());
        editing.set(Some(None));
    };
    let on_edit = Callback::new(move |workout: Workout| {
        form.set(WorkoutForm {
            name: workout.name.clone(),
            description: workout.description.clone().unwrap_or_default(),
            duration: workout.duration.to_string(),
            calories_burned: workout.calories_burned.to_string(),
            workout_date: workout.workout_date.split('T').next().unwrap_or_default().to_owned(),
        });
        editing.set(Some(workout.id));
    });
    let on_cancel = Callback::new(move |()| editing.set(None));
    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));

    view! {
        <div class="list-page">
            <div class="list-page__header">
                <h1>"My Workouts"</h1>
                <button class="btn btn--primary" on:click=on_add>
                    "Add Workout"
                </button>
            </div>

            <ErrorBanner message=error/>

            <Show when=move || loading.get()>
                <p class="list-page__loading">"Loading workouts..."</p>
            </Show>

            <Show when=move || !loading.get() && workouts.get().is_empty() && error.get().is_empty()>
                <Card>
                    <p class="list-page__empty">"No workouts yet. Add your first workout!"</p>
                </Card>
            </Show>

            <div class="list-page__grid">
                {move || {
                    workouts
                        .get()
                        .into_iter()
                        .map(|workout| {
                            let edit_target = workout.clone();
                            let id = workout.id;
                            view! {
                                <Card title=workout.name.clone()>
                                    <p>{workout.description.clone().unwrap_or_else(|| "No description".to_owned())}</p>
                                    <p><strong>"Duration: "</strong> {workout.duration} " minutes"</p>
                                    <p><strong>"Calories: "</strong> {format!("{:.0}", workout.calories_burned)} " kcal"</p>
                                    <p><strong>"Date: "</strong> {workout.workout_date.clone()}</p>
                                    <div class="card__actions">
                                        <button class="btn" on:click=move |_| on_edit.run(edit_target.clone())>
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
                <WorkoutDialog
                    editing=editing
                    form=form
                    on_cancel=on_cancel
                    workouts=workouts
                    loading=loading
                    error=error
                />
            </Show>
            <Show when=move || delete_id.get().is_some()>
                <DeleteWorkoutDialog
                    delete_id=delete_id
                    on_cancel=on_delete_cancel
                    workouts=workouts
                    loading=loading
                    error=error
                />
            </Show>
        </div>
    }
}

/// Modal form shared by create and edit.
#[component]
fn WorkoutDialog(
    editing: RwSignal<Option<Option<i64>>>,
    form: RwSignal<WorkoutForm>,
    on_cancel: Callback<()>,
    workouts: RwSignal<Vec<Workout>>,
    loading: RwSignal<bool>,
    error: RwSignal<String>,
) -> impl IntoView {
    let title = move || if matches!(editing.get(), Some(Some(_))) { "Edit Workout" } else { "Add Workout" };

    let submit = Callback::new(move |()| {
        let payload = match parse_workout_form(&form.get()) {
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
                Some(id) => crate::net::workouts::update(id, &payload).await.map(|_| ()),
                None => crate::net::workouts::create(&payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    editing.set(None);
                    refresh_workouts(workouts, loading, error);
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
                    "Workout Name"
                    <input
                        class="form__input"
                        type="text"
                        placeholder="e.g., Morning Run"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Description"
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Workout description"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Duration (minutes)"
                    <input
                        class="form__input"
                        type="number"
                        min="1"
                        prop:value=move || form.get().duration
                        on:input=move |ev| form.update(|f| f.duration = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Calories Burned"
                    <input
                        class="form__input"
                        type="number"
                        min="0"
                        step="0.1"
                        prop:value=move || form.get().calories_burned
                        on:input=move |ev| form.update(|f| f.calories_burned = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Date"
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || form.get().workout_date
                        on:input=move |ev| form.update(|f| f.workout_date = event_target_value(&ev))
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
fn DeleteWorkoutDialog(
    delete_id: RwSignal<Option<i64>>,
    on_cancel: Callback<()>,
    workouts: RwSignal<Vec<Workout>>,
    loading: RwSignal<bool>,
    error: RwSignal<String>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let Some(id) = delete_id.get_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::workouts::delete(id).await {
                Ok(()) => {
                    delete_id.set(None);
                    refresh_workouts(workouts, loading, error);
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
        <Modal title="Delete Workout" on_close=on_cancel>
            <p class="dialog__danger">"Are you sure you want to delete this workout?"</p>
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
