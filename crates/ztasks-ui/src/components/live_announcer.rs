use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct LiveAnnouncerProps {
  pub message: String
}

/// Screen-reader status line; holds only the latest message.
#[function_component(LiveAnnouncer)]
pub fn live_announcer(
  props: &LiveAnnouncerProps
) -> Html {
  html! {
      <div class="sr-only" role="status" aria-live="polite">
          { &props.message }
      </div>
  }
}
