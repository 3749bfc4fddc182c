use crate::task::Task;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub struct Progress {
  pub completed: usize,
  pub total:     usize
}

impl Progress {
  pub fn from_tasks(
    tasks: &[Task]
  ) -> Self {
    Self {
      completed: tasks
        .iter()
        .filter(|task| task.completed)
        .count(),
      total:     tasks.len()
    }
  }

  /// Forced to zero for an empty list.
  pub fn display_numerator(
    &self
  ) -> usize {
    if self.total == 0 {
      0
    } else {
      self.completed
    }
  }

  /// Never below one, so the meter never shows `x/0`.
  pub fn display_denominator(
    &self
  ) -> usize {
    self.total.max(1)
  }

  pub fn label(&self) -> String {
    format!(
      "{}/{}",
      self.display_numerator(),
      self.display_denominator()
    )
  }

  pub fn fraction(&self) -> f64 {
    self.display_numerator() as f64
      / self.display_denominator()
        as f64
  }
}

#[cfg(test)]
mod tests {
  use super::Progress;
  use crate::task::Task;

  #[test]
  fn empty_list_reads_zero_over_one() {
    let progress =
      Progress::from_tasks(&[]);
    assert_eq!(progress.label(), "0/1");
    assert_eq!(progress.fraction(), 0.0);
  }

  #[test]
  fn counts_completed_tasks() {
    let mut done =
      Task::new("a".to_string());
    done.completed = true;
    let open =
      Task::new("b".to_string());

    let progress =
      Progress::from_tasks(&[
        done, open
      ]);
    assert_eq!(progress.label(), "1/2");
    assert_eq!(progress.fraction(), 0.5);
  }
}
