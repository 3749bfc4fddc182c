use tracing::{
  debug,
  info
};

use crate::progress::Progress;
use crate::state::{
  Action,
  Effects,
  TaskBoard
};
use crate::store::{
  KeyValueStore,
  PersistentStore,
  StorageKeys
};
use crate::theme::Theme;

/// The state container owned by the composition root: the task board,
/// the theme preference and the store both are mirrored into.
#[derive(Debug, Clone)]
pub struct Session<S> {
  store: PersistentStore<S>,
  keys:  StorageKeys,
  board: TaskBoard,
  theme: Theme
}

impl<S: KeyValueStore> Session<S> {
  /// Loads both keys, falling back to an empty list and the
  /// preference-derived theme, then writes both back.
  #[tracing::instrument(skip(backend))]
  pub fn open(
    backend: S,
    keys: StorageKeys,
    prefers_dark: bool
  ) -> Self {
    let store =
      PersistentStore::new(backend);
    let theme = store.load(
      &keys.theme,
      Theme::from_preference(
        prefers_dark
      )
    );
    let tasks =
      store.load_tasks(&keys.tasks);

    info!(
      %theme,
      task_count = tasks.len(),
      "opened task session"
    );

    let session = Self {
      store,
      keys,
      board: TaskBoard::new(tasks),
      theme
    };
    session.persist_theme();
    session.persist_tasks();
    session
  }

  pub fn board(&self) -> &TaskBoard {
    &self.board
  }

  pub fn theme(&self) -> Theme {
    self.theme
  }

  pub fn progress(&self) -> Progress {
    self.board.progress()
  }

  pub fn store(
    &self
  ) -> &PersistentStore<S> {
    &self.store
  }

  pub fn dispatch(
    &mut self,
    action: Action
  ) -> Effects {
    let effects =
      self.board.apply(action);
    if effects.persist_tasks {
      self.persist_tasks();
    }
    effects
  }

  #[tracing::instrument(skip(self))]
  pub fn set_theme(
    &mut self,
    theme: Theme
  ) {
    debug!(
      from = %self.theme,
      to = %theme,
      "theme selected"
    );
    self.theme = theme;
    self.persist_theme();
  }

  fn persist_tasks(&self) {
    self.store.save(
      &self.keys.tasks,
      self.board.tasks()
    );
  }

  fn persist_theme(&self) {
    self
      .store
      .save(&self.keys.theme, &self.theme);
  }
}
