use web_sys::{
  Event,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  NodeRef,
  Properties,
  classes,
  function_component,
  html
};
use ztasks_core::{
  Task,
  TaskId
};

use super::TaskEditForm;

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub task:           Task,
  /// Present only on the row being edited.
  pub draft:          Option<String>,
  pub edit_input:     NodeRef,
  pub on_toggle:      Callback<TaskId>,
  pub on_begin_edit:  Callback<TaskId>,
  pub on_edit_input:  Callback<String>,
  pub on_save_edit:   Callback<()>,
  pub on_cancel_edit: Callback<()>,
  pub on_remove:      Callback<TaskId>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let task = &props.task;
  let check_id =
    format!("check-{}", task.id);
  let toggle_label = if task.completed {
    format!(
      "Mark \"{}\" as incomplete",
      task.text
    )
  } else {
    format!(
      "Mark \"{}\" as complete",
      task.text
    )
  };

  let on_toggle = {
    let on_toggle =
      props.on_toggle.clone();
    let id = task.id.clone();
    move |_: Event| {
      on_toggle.emit(id.clone())
    }
  };
  let on_edit = {
    let on_begin_edit =
      props.on_begin_edit.clone();
    let id = task.id.clone();
    move |_: MouseEvent| {
      on_begin_edit.emit(id.clone())
    }
  };
  let on_delete = {
    let on_remove =
      props.on_remove.clone();
    let id = task.id.clone();
    move |_: MouseEvent| {
      on_remove.emit(id.clone())
    }
  };

  let body = match &props.draft {
    | Some(draft) => html! {
        <TaskEditForm
            task_id={task.id.clone()}
            draft={draft.clone()}
            input_ref={props.edit_input.clone()}
            on_input={props.on_edit_input.clone()}
            on_save={props.on_save_edit.clone()}
            on_cancel={props.on_cancel_edit.clone()}
        />
    },
    | None => html! {
        <label
            for={check_id.clone()}
            class={classes!("text", task.completed.then_some("done"))}
        >
            { &task.text }
        </label>
    }
  };

  html! {
      <li class="row" role="listitem">
          <div class="row-main">
              <input
                  id={check_id}
                  type="checkbox"
                  checked={task.completed}
                  onchange={on_toggle}
                  aria-label={toggle_label}
              />
              { body }
          </div>
          {
              if props.draft.is_some() {
                  html! {}
              } else {
                  html! {
                      <div class="row-actions">
                          <button
                              type="button"
                              class="btn ghost"
                              onclick={on_edit}
                              aria-label={format!("Edit {}", task.text)}
                          >
                              { "Edit" }
                          </button>
                          <button
                              type="button"
                              class="btn danger"
                              onclick={on_delete}
                              aria-label={format!("Delete {}", task.text)}
                          >
                              { "Delete" }
                          </button>
                      </div>
                  }
              }
          }
      </li>
  }
}
