//! Task list page body: add/edit form, rows, and completion footer.

use chrono::NaiveDate;
use dioxus::prelude::*;
use store::{Task, TaskFields};

use super::actions;
use super::state::TaskListState;
use crate::api_context::use_api;
use crate::icons::{FaCheck, FaPen, FaSpinner, FaTrash};
use crate::session::use_session;
use crate::Icon;

/// Today's date in the user's local time zone, where the platform knows it.
fn today() -> Option<NaiveDate> {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(
            now.get_full_year() as i32,
            now.get_month() + 1,
            now.get_date(),
        )
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Some(chrono::Local::now().date_naive())
    }
}

/// `on_login` is called from the signed-out placeholder so the app can route
/// to its login page.
#[component]
pub fn TaskList(on_login: EventHandler<()>) -> Element {
    let session = use_session();
    let api = use_api();
    let mut state = use_signal(|| TaskListState::new(session.peek().session.clone()));

    // Initial fetch
    let load_api = api.clone();
    let _ = use_resource(move || {
        let api = load_api.clone();
        async move { actions::load_tasks(&api, &mut state).await }
    });

    // Follow sign-out (or a different sign-in) made elsewhere in the app
    let reload_api = api.clone();
    use_effect(move || {
        let current = session.read().session.clone();
        if state.peek().session() == current.as_ref() {
            return;
        }
        let signed_in = current.is_some();
        state.write().set_session(current);
        if signed_in {
            let api = reload_api.clone();
            spawn(async move { actions::load_tasks(&api, &mut state).await });
        }
    });

    let view = state.read().clone();

    if !view.is_signed_in() {
        return rsx! {
            div {
                class: "task-page",
                div {
                    class: "task-placeholder",
                    p { "Please log in to manage your tasks." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_login.call(()),
                        "Log in"
                    }
                }
            }
        };
    }

    let today = today();
    let total = view.tasks().len();
    let done = view.completed_count();
    let rows: Vec<_> = view
        .tasks()
        .iter()
        .map(|task| {
            (
                task.id.clone(),
                task.clone(),
                today.is_some_and(|d| task.is_overdue(d)),
                view.is_busy(&task.id),
                view.is_editing(&task.id),
            )
        })
        .collect();

    let add_api = api.clone();
    let on_add = move |_: ()| {
        let api = add_api.clone();
        spawn(async move { actions::add_task(&api, &mut state).await });
    };
    let save_api = api.clone();
    let on_save = move |_: ()| {
        let api = save_api.clone();
        spawn(async move { actions::save_edit(&api, &mut state).await });
    };
    let toggle_api = api.clone();
    let on_toggle = move |id: String| {
        let api = toggle_api.clone();
        spawn(async move { actions::toggle_task(&api, &mut state, &id).await });
    };
    let delete_api = api.clone();
    let on_delete = move |id: String| {
        let api = delete_api.clone();
        spawn(async move { actions::delete_task(&api, &mut state, &id).await });
    };

    rsx! {
        div {
            class: "task-page",

            header {
                class: "task-header",
                h1 { "My Tasks" }
                p { "Stay organized and get things done" }
            }

            if let Some(err) = view.error() {
                div {
                    class: "alert alert-error",
                    span { "{err}" }
                    button {
                        class: "alert-dismiss",
                        onclick: move |_| state.write().dismiss_error(),
                        "×"
                    }
                }
            }

            if let Some(buffer) = view.editing() {
                TaskForm {
                    heading: "Edit Task",
                    submit_label: "Save",
                    fields: buffer.fields.clone(),
                    busy: view.is_loading(),
                    on_change: move |fields: TaskFields| {
                        if let Some(slot) = state.write().edit_fields_mut() {
                            *slot = fields;
                        }
                    },
                    on_submit: on_save,
                    on_cancel: move |_: ()| state.write().cancel_edit(),
                }
            } else {
                TaskForm {
                    heading: "Add New Task",
                    submit_label: "Add Task",
                    fields: view.draft.clone(),
                    busy: view.is_loading(),
                    on_change: move |fields: TaskFields| state.write().draft = fields,
                    on_submit: on_add,
                }
            }

            if view.is_loading() && !view.is_loaded() {
                div {
                    class: "task-loading",
                    Icon { class: "spin", width: 20, height: 20, fill: "currentColor", icon: FaSpinner }
                    span { "Loading tasks..." }
                }
            } else if total == 0 {
                div { class: "task-empty", "No tasks yet. Add one to get started!" }
            } else {
                ul {
                    class: "task-items",
                    for (id, task, overdue, busy, editing) in rows {
                        TaskRow {
                            key: "{id}",
                            task,
                            overdue,
                            busy,
                            editing,
                            on_toggle: on_toggle.clone(),
                            on_edit: move |id: String| {
                                state.write().start_edit(&id);
                            },
                            on_delete: on_delete.clone(),
                        }
                    }
                }
            }

            if total > 0 {
                footer { class: "task-footer", "{done} of {total} tasks completed" }
            }
        }
    }
}

/// Title, description and due-date inputs shared by add and edit.
#[component]
fn TaskForm(
    heading: String,
    submit_label: String,
    fields: TaskFields,
    busy: bool,
    on_change: EventHandler<TaskFields>,
    on_submit: EventHandler<()>,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let title_fields = fields.clone();
    let description_fields = fields.clone();
    let due_fields = fields.clone();

    rsx! {
        form {
            class: "task-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },

            h2 { "{heading}" }

            input {
                r#type: "text",
                placeholder: "Task title",
                value: "{fields.title}",
                disabled: busy,
                oninput: move |evt: FormEvent| {
                    on_change.call(TaskFields { title: evt.value(), ..title_fields.clone() })
                },
            }
            textarea {
                placeholder: "Description",
                rows: 3,
                value: "{fields.description}",
                disabled: busy,
                oninput: move |evt: FormEvent| {
                    on_change.call(TaskFields { description: evt.value(), ..description_fields.clone() })
                },
            }
            input {
                r#type: "date",
                value: "{fields.due_date}",
                disabled: busy,
                oninput: move |evt: FormEvent| {
                    on_change.call(TaskFields { due_date: evt.value(), ..due_fields.clone() })
                },
            }

            div {
                class: "task-form-actions",
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: busy,
                    if busy { "Saving..." } else { "{submit_label}" }
                }
                if let Some(cancel) = on_cancel {
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        disabled: busy,
                        onclick: move |_| cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[component]
fn TaskRow(
    task: Task,
    busy: bool,
    overdue: bool,
    editing: bool,
    on_toggle: EventHandler<String>,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let mut class = String::from("task-item");
    if task.completed {
        class.push_str(" completed");
    }
    if overdue {
        class.push_str(" overdue");
    }
    if editing {
        class.push_str(" editing");
    }
    let due = task.due_date.format("%b %-d, %Y").to_string();
    let toggle_id = task.id.clone();
    let edit_id = task.id.clone();
    let delete_id = task.id.clone();
    let toggle_label = if task.completed { "Mark as pending" } else { "Mark as done" };

    rsx! {
        li {
            class: "{class}",

            button {
                class: "task-check",
                title: toggle_label,
                disabled: busy,
                onclick: move |_| on_toggle.call(toggle_id.clone()),
                if task.completed {
                    Icon { width: 14, height: 14, fill: "currentColor", icon: FaCheck }
                }
            }

            div {
                class: "task-body",
                h3 { "{task.title}" }
                if !task.description.is_empty() {
                    p { "{task.description}" }
                }
                span {
                    class: "task-due",
                    "Due: {due}"
                    if overdue {
                        " (overdue)"
                    }
                }
            }

            div {
                class: "task-actions",
                button {
                    class: "btn-icon",
                    title: "Edit",
                    disabled: busy,
                    onclick: move |_| on_edit.call(edit_id.clone()),
                    Icon { width: 14, height: 14, fill: "currentColor", icon: FaPen }
                }
                button {
                    class: "btn-icon btn-danger",
                    title: "Delete",
                    disabled: busy,
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    Icon { width: 14, height: 14, fill: "currentColor", icon: FaTrash }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_context::ApiProvider;
    use crate::session::SessionProvider;
    use crate::session_store::make_session_store;
    use store::config::ApiConfig;

    #[test]
    fn test_today_is_local_calendar_date() {
        assert_eq!(today(), Some(chrono::Local::now().date_naive()));
    }

    #[component]
    fn SignedOutPage(namespace: String) -> Element {
        rsx! {
            ApiProvider {
                config: ApiConfig::default(),
                SessionProvider {
                    namespace,
                    TaskList { on_login: move |_: ()| {} }
                }
            }
        }
    }

    #[test]
    fn test_signed_out_placeholder_renders() {
        let ns = format!("test-placeholder-{}", std::process::id());
        let mut dom = VirtualDom::new_with_props(
            SignedOutPage,
            SignedOutPageProps {
                namespace: ns.clone(),
            },
        );
        dom.rebuild_in_place();

        assert!(make_session_store(&ns).load().is_none());
    }
}
