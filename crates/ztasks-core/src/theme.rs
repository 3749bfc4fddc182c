use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
  Light,
  Dark,
  Monokai,
  Apple,
  PurpleDark,
  Cyan
}

impl Theme {
  pub const ALL: [Theme; 6] = [
    Theme::Light,
    Theme::Dark,
    Theme::Monokai,
    Theme::Apple,
    Theme::PurpleDark,
    Theme::Cyan
  ];

  /// Default used when nothing is stored yet.
  pub fn from_preference(
    prefers_dark: bool
  ) -> Self {
    if prefers_dark {
      Self::Dark
    } else {
      Self::Light
    }
  }

  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark",
      | Self::Monokai => "monokai",
      | Self::Apple => "apple",
      | Self::PurpleDark => {
        "purple-dark"
      }
      | Self::Cyan => "cyan"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Light => "Light",
      | Self::Dark => "Dark",
      | Self::Monokai => "Monokai",
      | Self::Apple => "Apple",
      | Self::PurpleDark => {
        "Purple Dark"
      }
      | Self::Cyan => "Cyan"
    }
  }
}

impl FromStr for Theme {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    Theme::ALL
      .into_iter()
      .find(|theme| {
        theme.storage_value() == s
      })
      .ok_or_else(|| {
        anyhow!("unknown theme: {s}")
      })
  }
}

impl fmt::Display for Theme {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.storage_value())
  }
}
