use web_sys::{
  HtmlInputElement,
  InputEvent,
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

#[derive(Properties, PartialEq)]
pub struct AddTaskFormProps {
  pub value:       String,
  pub placeholder: String,
  pub input_ref:   NodeRef,
  pub on_input:    Callback<String>,
  pub on_submit:   Callback<()>
}

#[function_component(AddTaskForm)]
pub fn add_task_form(
  props: &AddTaskFormProps
) -> Html {
  let oninput = {
    let on_input = props.on_input.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_input.emit(input.value());
    })
  };
  let onsubmit = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      on_submit.emit(());
    })
  };

  html! {
      <form class="add-row" onsubmit={onsubmit} aria-label="Add task">
          <div class="field">
              <label for="new-task" class="label">{ "Task" }</label>
              <input
                  id="new-task"
                  ref={props.input_ref.clone()}
                  type="text"
                  placeholder={props.placeholder.clone()}
                  value={props.value.clone()}
                  oninput={oninput}
                  required={true}
                  aria-required="true"
              />
          </div>
          <button type="submit" class="btn primary">{ "Add" }</button>
      </form>
  }
}
