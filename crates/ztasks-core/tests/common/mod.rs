use tracing_subscriber::EnvFilter;
use ztasks_core::{
  MemoryStore,
  Session,
  StorageKeys
};

/// Routes `tracing` output through the test harness. Honours `RUST_LOG`.
pub fn init_tracing() {
  let env_filter =
    EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| {
        EnvFilter::new("warn")
      });

  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(true)
    .with_test_writer()
    .try_init();
}

pub fn open_session(
  backend: &MemoryStore
) -> Session<MemoryStore> {
  init_tracing();
  Session::open(
    backend.clone(),
    StorageKeys::default(),
    false
  )
}
