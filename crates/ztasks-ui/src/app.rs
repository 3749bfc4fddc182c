mod state;
mod storage;

use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  NodeRef,
  function_component,
  html,
  use_effect_with,
  use_node_ref,
  use_reducer,
  use_state
};
use ztasks_core::{
  Action,
  AppConfig,
  Focus,
  TaskId,
  Theme
};

use self::state::{
  AppAction,
  AppState
};
use self::storage::apply_theme_attribute;
use crate::components::{
  AddTaskForm,
  LiveAnnouncer,
  ProgressMeter,
  SiteHeader,
  TaskList
};

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(AppConfig::load_embedded);
  let state = {
    let keys = config.storage_keys();
    use_reducer(move || {
      AppState::open(keys)
    })
  };
  let add_input = use_node_ref();
  let edit_input = use_node_ref();

  let session = &state.session;
  let board = session.board();
  let theme = session.theme();

  use_effect_with(theme, |theme| {
    apply_theme_attribute(*theme);
  });

  {
    let add_input = add_input.clone();
    let edit_input = edit_input.clone();
    use_effect_with(
      board.focus().clone(),
      move |request| {
        focus_target(
          &request.target,
          &add_input,
          &edit_input
        );
      }
    );
  }

  let dispatch = {
    let state = state.clone();
    Callback::from(
      move |action: AppAction| {
        state.dispatch(action)
      }
    )
  };

  let on_theme_change = dispatch
    .reform(AppAction::SelectTheme);
  let on_new_task_input = dispatch
    .reform(|text: String| {
      AppAction::Board(
        Action::SetNewTaskText(text)
      )
    });
  let on_add = dispatch
    .reform(|()| AppAction::SubmitNewTask);
  let on_toggle =
    dispatch.reform(|id: TaskId| {
      AppAction::Board(Action::Toggle(id))
    });
  let on_begin_edit =
    dispatch.reform(|id: TaskId| {
      AppAction::Board(Action::BeginEdit(
        id
      ))
    });
  let on_edit_input =
    dispatch.reform(|text: String| {
      AppAction::Board(
        Action::SetEditText(text)
      )
    });
  let on_save_edit = dispatch.reform(|()| {
    AppAction::Board(Action::SaveEdit)
  });
  let on_cancel_edit =
    dispatch.reform(|()| {
      AppAction::Board(Action::CancelEdit)
    });
  let on_remove =
    dispatch.reform(|id: TaskId| {
      AppAction::Board(Action::Remove(id))
    });

  let branding = &config.branding;

  html! {
      <>
          <SiteHeader
              brand_name={branding.brand_name.clone()}
              logo_glyph={branding.logo_glyph.clone()}
              themes={Theme::ALL.to_vec()}
              theme={theme}
              on_theme_change={on_theme_change}
          />
          <main id="main" class="shell" role="main" aria-labelledby="app-title">
              <section class="card">
                  <h1 id="app-title" class="title">{ &branding.title }</h1>
                  <AddTaskForm
                      value={board.new_task_text().to_string()}
                      placeholder={branding.input_placeholder.clone()}
                      input_ref={add_input.clone()}
                      on_input={on_new_task_input}
                      on_submit={on_add}
                  />
                  <ProgressMeter progress={board.progress()} />
                  <TaskList
                      tasks={board.tasks().to_vec()}
                      editing={board.editing().clone()}
                      edit_input={edit_input.clone()}
                      on_toggle={on_toggle}
                      on_begin_edit={on_begin_edit}
                      on_edit_input={on_edit_input}
                      on_save_edit={on_save_edit}
                      on_cancel_edit={on_cancel_edit}
                      on_remove={on_remove}
                  />
                  <LiveAnnouncer message={board.announcement().to_string()} />
              </section>
          </main>
      </>
  }
}

fn focus_target(
  target: &Focus,
  add_input: &NodeRef,
  edit_input: &NodeRef
) {
  let node = match target {
    | Focus::AddInput => add_input,
    | Focus::EditInput(_) => edit_input
  };
  let Some(input) =
    node.cast::<HtmlInputElement>()
  else {
    return;
  };
  if let Err(err) = input.focus() {
    tracing::debug!(
      error = ?err,
      ?target,
      "focus request failed"
    );
  }
}
