mod common;

use common::open_session;
use ztasks_core::{
  Action,
  EditState,
  MemoryStore,
  Task,
  TaskId
};

fn first_id(
  session: &ztasks_core::Session<
    MemoryStore
  >
) -> TaskId {
  session.board().tasks()[0]
    .id
    .clone()
}

#[test]
fn adding_to_empty_list_creates_one_open_task() {
  let backend = MemoryStore::new();
  let mut session =
    open_session(&backend);

  session.dispatch(Action::Add(
    "Buy milk".to_string()
  ));

  let tasks = session.board().tasks();
  assert_eq!(tasks.len(), 1);
  assert_eq!(tasks[0].text, "Buy milk");
  assert!(!tasks[0].completed);
  assert!(!tasks[0].id.as_str().is_empty());
  assert_eq!(
    session.progress().label(),
    "0/1"
  );
}

#[test]
fn whitespace_add_leaves_list_and_store_untouched() {
  let backend = MemoryStore::new();
  let mut session =
    open_session(&backend);
  let stored = backend.raw("tasks");

  let effects = session
    .dispatch(Action::Add("   ".to_string()));

  assert!(!effects.persist_tasks);
  assert!(session.board().tasks().is_empty());
  assert_eq!(backend.raw("tasks"), stored);
  assert_eq!(
    session.board().announcement(),
    ""
  );
}

#[test]
fn toggling_twice_restores_completion() {
  let backend = MemoryStore::new();
  let mut session =
    open_session(&backend);
  session.dispatch(Action::Add(
    "Walk dog".to_string()
  ));
  let id = first_id(&session);

  session.dispatch(Action::Toggle(id.clone()));
  assert!(session.board().tasks()[0].completed);
  assert_eq!(
    session.progress().label(),
    "1/1"
  );

  session.dispatch(Action::Toggle(id));
  assert!(!session.board().tasks()[0].completed);
}

#[test]
fn editing_to_empty_keeps_original_text() {
  let backend = MemoryStore::new();
  let mut session =
    open_session(&backend);
  session.dispatch(Action::Add(
    "Buy milk".to_string()
  ));
  let id = first_id(&session);

  session.dispatch(Action::BeginEdit(id));
  session.dispatch(Action::SetEditText(
    "   ".to_string()
  ));
  session.dispatch(Action::SaveEdit);

  assert_eq!(
    session.board().tasks()[0].text,
    "Buy milk"
  );
  assert_eq!(
    session.board().editing(),
    &EditState::NotEditing
  );
}

#[test]
fn editing_commits_trimmed_text_and_persists() {
  let backend = MemoryStore::new();
  let mut session =
    open_session(&backend);
  session.dispatch(Action::Add(
    "Buy milk".to_string()
  ));
  let id = first_id(&session);

  session.dispatch(Action::BeginEdit(id));
  session.dispatch(Action::SetEditText(
    " Buy eggs ".to_string()
  ));
  let effects =
    session.dispatch(Action::SaveEdit);

  assert!(effects.persist_tasks);
  assert_eq!(
    session.board().tasks()[0].text,
    "Buy eggs"
  );
  assert_eq!(
    session.board().announcement(),
    "Edited task: Buy eggs"
  );

  let stored: Vec<Task> =
    serde_json::from_str(
      &backend
        .raw("tasks")
        .expect("tasks stored")
    )
    .expect("stored tasks parse");
  assert_eq!(stored[0].text, "Buy eggs");
}

#[test]
fn deleting_only_task_empties_list() {
  let backend = MemoryStore::new();
  let mut session =
    open_session(&backend);
  session.dispatch(Action::Add(
    "Buy milk".to_string()
  ));
  let id = first_id(&session);

  session.dispatch(Action::Remove(id));

  assert!(session.board().tasks().is_empty());
  let progress = session.progress();
  assert_eq!(
    progress.display_numerator(),
    0
  );
  assert_eq!(
    progress.display_denominator(),
    1
  );
  assert_eq!(
    session.board().announcement(),
    "Deleted task: Buy milk"
  );
  assert_eq!(
    backend.raw("tasks").as_deref(),
    Some("[]")
  );
}

#[test]
fn newest_task_is_first() {
  let backend = MemoryStore::new();
  let mut session =
    open_session(&backend);
  for text in ["one", "two", "three"] {
    session.dispatch(Action::Add(
      text.to_string()
    ));
  }

  let texts: Vec<&str> = session
    .board()
    .tasks()
    .iter()
    .map(|task| task.text.as_str())
    .collect();
  assert_eq!(
    texts,
    vec!["three", "two", "one"]
  );
}

#[test]
fn write_failures_never_surface() {
  let backend = MemoryStore::new();
  let mut session =
    open_session(&backend);
  backend.set_fail_writes(true);

  session.dispatch(Action::Add(
    "Offline task".to_string()
  ));

  assert_eq!(
    session.board().tasks()[0].text,
    "Offline task"
  );
  assert_eq!(
    backend.raw("tasks").as_deref(),
    Some("[]")
  );
}

/// Deterministic walk over every action kind; the edit state must always
/// point at an existing row or be idle.
#[test]
fn random_action_sequences_keep_single_edit_row() {
  let backend = MemoryStore::new();
  let mut session =
    open_session(&backend);
  let mut seed: u64 = 0x2545_f491_4f6c_dd1d;

  for step in 0..2_000_u32 {
    seed ^= seed << 13;
    seed ^= seed >> 7;
    seed ^= seed << 17;

    let tasks = session.board().tasks();
    let pick = if tasks.is_empty() {
      TaskId::from("missing")
    } else {
      tasks[(seed as usize >> 8) % tasks.len()]
        .id
        .clone()
    };

    let action = match seed % 8 {
      | 0 | 1 => Action::Add(format!(
        "task {step}"
      )),
      | 2 => Action::Toggle(pick),
      | 3 => Action::BeginEdit(pick),
      | 4 => Action::SetEditText(
        if step % 3 == 0 {
          " ".to_string()
        } else {
          format!(" edited {step} ")
        }
      ),
      | 5 => Action::SaveEdit,
      | 6 => Action::CancelEdit,
      | _ => Action::Remove(pick)
    };
    session.dispatch(action);

    let board = session.board();
    if let Some(id) =
      board.editing().editing_id()
    {
      assert!(
        board.find(id).is_some(),
        "editing a missing row at step \
         {step}"
      );
    }
    assert!(
      board
        .tasks()
        .iter()
        .all(Task::has_text)
    );
  }
}
