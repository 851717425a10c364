//! Task manager for the Tasks page.

use leptos::{ev::SubmitEvent, prelude::*};
use taskboard_core::{Task, TaskFilter, TaskList};

use crate::primitives::{Button, ButtonSize, ButtonVariant, Card, button_class};

/// Summary line under the task list.
pub fn remaining_label(active: usize) -> String {
    match active {
        1 => "1 task left".to_string(),
        n => format!("{n} tasks left"),
    }
}

/// Add, complete, filter, and delete tasks held in memory.
#[component]
pub fn TaskManager() -> impl IntoView {
    let tasks = RwSignal::new(TaskList::new());
    let filter = RwSignal::new(TaskFilter::default());
    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        match tasks.try_update(|list| list.add(&text)) {
            Some(Ok(id)) => {
                log::debug!("Added task {id}");
                draft.set(String::new());
                error.set(None);
            }
            Some(Err(err)) => error.set(Some(err.to_string())),
            None => {}
        }
    };

    let visible = Memo::new(move |_| tasks.with(|list| list.filtered(filter.get())));

    view! {
      <Card>
        <form class="flex gap-2 mb-4" on:submit=on_submit>
          <input
            type="text"
            class="flex-1 px-4 py-2 border rounded dark:bg-gray-700 dark:border-gray-600"
            placeholder="Add a new task..."
            prop:value=move || draft.get()
            on:input=move |ev| draft.set(event_target_value(&ev))
          />
          <button type="submit" class="px-4 py-2 rounded bg-blue-600 hover:bg-blue-700 text-white">
            "Add Task"
          </button>
        </form>

        {move || error.get().map(|message| view! { <p class="text-red-500 text-sm mb-2">{message}</p> })}

        <div class="flex gap-2 mb-4">
          {TaskFilter::ALL
            .into_iter()
            .map(|option| {
              let class = move || {
                let variant = if filter.get() == option {
                  ButtonVariant::Primary
                } else {
                  ButtonVariant::Secondary
                };
                button_class(variant, ButtonSize::Sm, false)
              };
              view! {
                <button type="button" class=class on:click=move |_| filter.set(option)>
                  {option.label()}
                </button>
              }
            })
            .collect_view()}
        </div>

        <ul class="space-y-2">
          <For
            each=move || visible.get()
            key=|task| (task.id, task.completed)
            children=move |task| view! { <TaskRow task=task tasks=tasks /> }
          />
        </ul>

        <Show when=move || visible.with(|v| v.is_empty())>
          <p class="text-center text-gray-500 dark:text-gray-400 py-4">"No tasks to show."</p>
        </Show>

        <div class="flex justify-between items-center mt-4 text-sm text-gray-500 dark:text-gray-400">
          <span>{move || tasks.with(|list| remaining_label(list.active_count()))}</span>
          <Button
            variant=ButtonVariant::Danger
            size=ButtonSize::Sm
            disabled=Signal::derive(move || tasks.with(|list| list.completed_count() == 0))
            on_click=move |_| {
              tasks.update(|list| {
                let removed = list.clear_completed();
                log::debug!("Cleared {removed} completed tasks");
              })
            }
          >
            "Clear Completed"
          </Button>
        </div>
      </Card>
    }
}

#[component]
fn TaskRow(task: Task, tasks: RwSignal<TaskList>) -> impl IntoView {
    let id = task.id;
    let text_class = if task.completed {
        "flex-1 line-through text-gray-400"
    } else {
        "flex-1"
    };

    view! {
      <li class="flex items-center gap-3 p-2 rounded bg-gray-50 dark:bg-gray-700">
        <input
          type="checkbox"
          prop:checked=task.completed
          on:change=move |_| {
            tasks.update(|list| {
              list.toggle(id);
            })
          }
        />
        <span class=text_class>{task.text}</span>
        <Button
          variant=ButtonVariant::Danger
          size=ButtonSize::Sm
          on_click=move |_| {
            tasks.update(|list| {
              list.remove(id);
            })
          }
        >
          "Delete"
        </Button>
      </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_label() {
        assert_eq!(remaining_label(0), "0 tasks left");
        assert_eq!(remaining_label(1), "1 task left");
        assert_eq!(remaining_label(4), "4 tasks left");
    }
}
