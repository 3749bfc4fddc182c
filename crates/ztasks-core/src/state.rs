use tracing::{
  debug,
  trace
};

use crate::progress::Progress;
use crate::task::{
  Task,
  TaskId,
  normalize_text
};

const DELETED_PLACEHOLDER: &str =
  "task";

/// At most one row is editable; the draft only exists while editing.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub enum EditState {
  #[default]
  NotEditing,
  Editing {
    id:    TaskId,
    draft: String
  }
}

impl EditState {
  pub fn editing_id(
    &self
  ) -> Option<&TaskId> {
    match self {
      | Self::NotEditing => None,
      | Self::Editing {
        id,
        ..
      } => Some(id)
    }
  }

  pub fn is_editing(
    &self,
    task_id: &TaskId
  ) -> bool {
    self.editing_id() == Some(task_id)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
  AddInput,
  EditInput(TaskId)
}

/// `generation` grows on every request so the view can tell two
/// consecutive requests for the same target apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRequest {
  pub target:     Focus,
  pub generation: u64
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  SetNewTaskText(String),
  Add(String),
  Toggle(TaskId),
  BeginEdit(TaskId),
  SetEditText(String),
  SaveEdit,
  CancelEdit,
  Remove(TaskId)
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub struct Effects {
  /// The task list changed and must be written through.
  pub persist_tasks: bool
}

impl Effects {
  fn none() -> Self {
    Self::default()
  }

  fn persist() -> Self {
    Self {
      persist_tasks: true
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoard {
  tasks:         Vec<Task>,
  new_task_text: String,
  editing:       EditState,
  announcement:  String,
  focus:         FocusRequest
}

impl Default for TaskBoard {
  fn default() -> Self {
    Self::new(Vec::new())
  }
}

impl TaskBoard {
  pub fn new(tasks: Vec<Task>) -> Self {
    Self {
      tasks,
      new_task_text: String::new(),
      editing: EditState::NotEditing,
      announcement: String::new(),
      focus: FocusRequest {
        target:     Focus::AddInput,
        generation: 0
      }
    }
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn new_task_text(&self) -> &str {
    &self.new_task_text
  }

  pub fn editing(&self) -> &EditState {
    &self.editing
  }

  pub fn announcement(&self) -> &str {
    &self.announcement
  }

  pub fn focus(&self) -> &FocusRequest {
    &self.focus
  }

  pub fn progress(&self) -> Progress {
    Progress::from_tasks(&self.tasks)
  }

  pub fn find(
    &self,
    id: &TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| &task.id == id)
  }

  #[tracing::instrument(skip(self))]
  pub fn apply(
    &mut self,
    action: Action
  ) -> Effects {
    match action {
      | Action::SetNewTaskText(text) => {
        self.new_task_text = text;
        Effects::none()
      }
      | Action::Add(text) => {
        self.add(&text)
      }
      | Action::Toggle(id) => {
        self.toggle(&id)
      }
      | Action::BeginEdit(id) => {
        self.begin_edit(&id)
      }
      | Action::SetEditText(text) => {
        self.set_edit_text(text)
      }
      | Action::SaveEdit => {
        self.save_edit()
      }
      | Action::CancelEdit => {
        self.cancel_edit()
      }
      | Action::Remove(id) => {
        self.remove(&id)
      }
    }
  }

  pub fn add(
    &mut self,
    text: &str
  ) -> Effects {
    let Some(text) = normalize_text(text)
    else {
      trace!("ignoring blank task");
      return Effects::none();
    };

    let mut task = Task::new(text);
    while self.find(&task.id).is_some() {
      task.id = TaskId::generate();
    }
    debug!(id = %task.id, "added task");

    self.announcement =
      format!("Added task: {}", task.text);
    self.tasks.insert(0, task);
    self.new_task_text.clear();
    self.request_focus(Focus::AddInput);
    Effects::persist()
  }

  pub fn toggle(
    &mut self,
    id: &TaskId
  ) -> Effects {
    let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| &task.id == id)
    else {
      debug!(%id, "toggle on unknown task");
      return Effects::none();
    };

    task.completed = !task.completed;
    Effects::persist()
  }

  /// Switching rows drops the previous draft unsaved.
  pub fn begin_edit(
    &mut self,
    id: &TaskId
  ) -> Effects {
    let Some(task) = self.find(id) else {
      debug!(%id, "edit on unknown task");
      return Effects::none();
    };

    self.editing = EditState::Editing {
      id:    task.id.clone(),
      draft: task.text.clone()
    };
    self.request_focus(
      Focus::EditInput(id.clone())
    );
    Effects::none()
  }

  pub fn set_edit_text(
    &mut self,
    text: String
  ) -> Effects {
    if let EditState::Editing {
      draft,
      ..
    } = &mut self.editing
    {
      *draft = text;
    }
    Effects::none()
  }

  pub fn save_edit(&mut self) -> Effects {
    let EditState::Editing {
      id,
      draft
    } = std::mem::take(&mut self.editing)
    else {
      return Effects::none();
    };
    self.request_focus(Focus::AddInput);

    let Some(text) = normalize_text(&draft)
    else {
      trace!(%id, "blank edit reverted");
      return Effects::none();
    };

    let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| task.id == id)
    else {
      debug!(%id, "edited task no longer exists");
      return Effects::none();
    };

    task.text = text;
    self.announcement =
      format!("Edited task: {}", task.text);
    Effects::persist()
  }

  pub fn cancel_edit(&mut self) -> Effects {
    self.editing = EditState::NotEditing;
    self.request_focus(Focus::AddInput);
    Effects::none()
  }

  pub fn remove(
    &mut self,
    id: &TaskId
  ) -> Effects {
    if self.editing.is_editing(id) {
      self.editing = EditState::NotEditing;
    }

    let Some(index) = self
      .tasks
      .iter()
      .position(|task| &task.id == id)
    else {
      debug!(%id, "remove on unknown task");
      self.announcement = format!(
        "Deleted task: \
         {DELETED_PLACEHOLDER}"
      );
      return Effects::none();
    };

    let task = self.tasks.remove(index);
    self.announcement =
      format!("Deleted task: {}", task.text);
    Effects::persist()
  }

  fn request_focus(
    &mut self,
    target: Focus
  ) {
    self.focus = FocusRequest {
      target,
      generation: self
        .focus
        .generation
        .wrapping_add(1)
    };
  }
}
