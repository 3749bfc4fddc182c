use web_sys::{
  HtmlInputElement,
  InputEvent,
  KeyboardEvent,
  MouseEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  NodeRef,
  Properties,
  TargetCast,
  function_component,
  html
};
use ztasks_core::TaskId;

#[derive(Properties, PartialEq)]
pub struct TaskEditFormProps {
  pub task_id:   TaskId,
  pub draft:     String,
  pub input_ref: NodeRef,
  pub on_input:  Callback<String>,
  pub on_save:   Callback<()>,
  pub on_cancel: Callback<()>
}

/// Inline editor: Enter saves, Escape cancels.
#[function_component(TaskEditForm)]
pub fn task_edit_form(
  props: &TaskEditFormProps
) -> Html {
  let edit_id =
    format!("edit-{}", props.task_id);
  let help_id =
    format!("help-{}", props.task_id);

  let oninput = {
    let on_input = props.on_input.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_input.emit(input.value());
    })
  };
  let onkeydown = {
    let on_cancel =
      props.on_cancel.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Escape" {
          e.prevent_default();
          on_cancel.emit(());
        }
      }
    )
  };
  let onsubmit = {
    let on_save = props.on_save.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      on_save.emit(());
    })
  };
  let on_cancel_click = {
    let on_cancel =
      props.on_cancel.clone();
    move |_: MouseEvent| {
      on_cancel.emit(())
    }
  };

  html! {
      <form class="edit" onsubmit={onsubmit}>
          <label for={edit_id.clone()} class="sr-only">{ "Edit task" }</label>
          <input
              id={edit_id}
              ref={props.input_ref.clone()}
              type="text"
              value={props.draft.clone()}
              oninput={oninput}
              onkeydown={onkeydown}
              aria-describedby={help_id.clone()}
          />
          <div id={help_id} class="help">{ "Enter to save, Esc to cancel" }</div>
          <div class="edit-actions">
              <button type="submit" class="btn primary small">{ "Save" }</button>
              <button type="button" class="btn ghost small" onclick={on_cancel_click}>
                  { "Cancel" }
              </button>
          </div>
      </form>
  }
}
