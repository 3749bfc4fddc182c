use yew::{
  Callback,
  Html,
  NodeRef,
  Properties,
  function_component,
  html
};
use ztasks_core::{
  EditState,
  Task,
  TaskId
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:          Vec<Task>,
  pub editing:        EditState,
  pub edit_input:     NodeRef,
  pub on_toggle:      Callback<TaskId>,
  pub on_begin_edit:  Callback<TaskId>,
  pub on_edit_input:  Callback<String>,
  pub on_save_edit:   Callback<()>,
  pub on_cancel_edit: Callback<()>,
  pub on_remove:      Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <ul class="list" role="list" aria-label="Tasks">
          {
              for props.tasks.iter().cloned().map(|task| {
                  let draft = match &props.editing {
                      | EditState::Editing { id, draft } if *id == task.id => {
                          Some(draft.clone())
                      }
                      | _ => None
                  };
                  let key = task.id.to_string();
                  html! {
                      <TaskListRow
                          key={key}
                          task={task}
                          draft={draft}
                          edit_input={props.edit_input.clone()}
                          on_toggle={props.on_toggle.clone()}
                          on_begin_edit={props.on_begin_edit.clone()}
                          on_edit_input={props.on_edit_input.clone()}
                          on_save_edit={props.on_save_edit.clone()}
                          on_cancel_edit={props.on_cancel_edit.clone()}
                          on_remove={props.on_remove.clone()}
                      />
                  }
              })
          }
      </ul>
  }
}
