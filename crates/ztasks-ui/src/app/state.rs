use std::rc::Rc;

use yew::Reducible;
use ztasks_core::{
  Action,
  Session,
  StorageKeys,
  Theme
};

use super::storage::{
  LocalStorageBackend,
  prefers_dark_scheme
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppAction {
  Board(Action),
  SubmitNewTask,
  SelectTheme(Theme)
}

/// Root-owned container; every change goes through `reduce`.
#[derive(Debug, Clone)]
pub(crate) struct AppState {
  pub(crate) session:
    Session<LocalStorageBackend>
}

impl AppState {
  pub(crate) fn open(
    keys: StorageKeys
  ) -> Self {
    Self {
      session: Session::open(
        LocalStorageBackend::connect(),
        keys,
        prefers_dark_scheme()
      )
    }
  }
}

impl Reducible for AppState {
  type Action = AppAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next =
      Rc::unwrap_or_clone(self);
    match action {
      | AppAction::Board(action) => {
        next.session.dispatch(action);
      }
      | AppAction::SubmitNewTask => {
        let text = next
          .session
          .board()
          .new_task_text()
          .to_string();
        next
          .session
          .dispatch(Action::Add(text));
      }
      | AppAction::SelectTheme(theme) => {
        next.session.set_theme(theme);
      }
    }
    Rc::new(next)
  }
}
