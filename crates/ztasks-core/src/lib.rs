pub mod config;
pub mod progress;
pub mod session;
pub mod state;
pub mod store;
pub mod task;
pub mod theme;

pub use config::AppConfig;
pub use progress::Progress;
pub use session::Session;
pub use state::{
  Action,
  EditState,
  Effects,
  Focus,
  FocusRequest,
  TaskBoard
};
pub use store::{
  KeyValueStore,
  MemoryStore,
  PersistentStore,
  StorageKeys
};
pub use task::{
  Task,
  TaskId
};
pub use theme::Theme;
