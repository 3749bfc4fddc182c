use std::str::FromStr;

use web_sys::{
  Event,
  HtmlSelectElement
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};
use ztasks_core::Theme;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
  pub brand_name:      String,
  pub logo_glyph:      String,
  pub themes:          Vec<Theme>,
  pub theme:           Theme,
  pub on_theme_change: Callback<Theme>
}

#[function_component(SiteHeader)]
pub fn site_header(
  props: &SiteHeaderProps
) -> Html {
  let on_change = {
    let on_theme_change =
      props.on_theme_change.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      let value = select.value();
      match Theme::from_str(&value) {
        | Ok(theme) => {
          on_theme_change.emit(theme)
        }
        | Err(error) => {
          tracing::warn!(%error, "ignoring unknown theme selection");
        }
      }
    })
  };

  html! {
      <header class="site-header" role="banner" aria-label="Header">
          <div class="brand">
              <div class="logo" aria-hidden="true">{ &props.logo_glyph }</div>
              <span class="brand-name">{ &props.brand_name }</span>
          </div>
          <div class="theme-picker">
              <label for="theme">{ "Theme" }</label>
              <select id="theme" aria-label="Select theme" onchange={on_change}>
                  {
                      for props.themes.iter().map(|theme| html! {
                          <option
                              key={theme.storage_value()}
                              value={theme.storage_value()}
                              selected={*theme == props.theme}
                          >
                              { theme.label() }
                          </option>
                      })
                  }
              </select>
          </div>
      </header>
  }
}
