use anyhow::anyhow;
use tracing::warn;
use wasm_bindgen::JsValue;
use ztasks_core::{
  KeyValueStore,
  Theme
};

const DARK_SCHEME_QUERY: &str =
  "(prefers-color-scheme: dark)";

/// `window.localStorage`, or nothing when the browser denies access.
#[derive(Debug, Clone, Default)]
pub(crate) struct LocalStorageBackend {
  storage: Option<web_sys::Storage>
}

impl LocalStorageBackend {
  pub(crate) fn connect() -> Self {
    let storage = web_sys::window()
      .and_then(|window| {
        window
          .local_storage()
          .ok()
          .flatten()
      });
    if storage.is_none() {
      warn!(
        "local storage unavailable; \
         changes last for this page only"
      );
    }
    Self {
      storage
    }
  }

  fn storage(
    &self
  ) -> anyhow::Result<&web_sys::Storage>
  {
    self.storage.as_ref().ok_or_else(
      || anyhow!("local storage unavailable")
    )
  }
}

impl KeyValueStore
  for LocalStorageBackend
{
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    self
      .storage()?
      .get_item(key)
      .map_err(js_error)
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .storage()?
      .set_item(key, value)
      .map_err(js_error)
  }
}

fn js_error(
  err: JsValue
) -> anyhow::Error {
  anyhow!("{err:?}")
}

pub(crate) fn prefers_dark_scheme()
-> bool {
  web_sys::window()
    .and_then(|window| {
      window
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
    })
    .is_some_and(|query| query.matches())
}

pub(crate) fn apply_theme_attribute(
  theme: Theme
) {
  let Some(root) = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.document_element()
    })
  else {
    return;
  };

  if let Err(err) = root.set_attribute(
    "data-theme",
    theme.storage_value()
  ) {
    warn!(
      error = ?err,
      "failed setting data-theme"
    );
  }
}
