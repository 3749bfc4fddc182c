use yew::{
  Html,
  Properties,
  function_component,
  html
};
use ztasks_core::Progress;

#[derive(Properties, PartialEq)]
pub struct ProgressMeterProps {
  pub progress: Progress
}

#[function_component(ProgressMeter)]
pub fn progress_meter(
  props: &ProgressMeterProps
) -> Html {
  let progress = props.progress;

  html! {
      <div class="progress-wrap">
          <div class="progress-head" id="progress-label">
              <span>{ "Progress" }</span>
              <span class="progress-count" aria-live="polite">{ progress.label() }</span>
          </div>
          <progress
              class="progress"
              max={progress.display_denominator().to_string()}
              value={progress.display_numerator().to_string()}
              aria-describedby="progress-label"
          />
      </div>
  }
}
