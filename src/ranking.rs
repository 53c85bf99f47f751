use super::*;

#[derive(Debug)]
pub(crate) struct Ranking {
  entries: Vec<TimedComment>,
}

impl Ranking {
  pub(crate) fn best(&self) -> Option<&TimedComment> {
    self.entries.first()
  }

  pub(crate) fn entries(&self) -> &[TimedComment] {
    &self.entries
  }

  pub(crate) fn new(mut entries: Vec<TimedComment>) -> Self {
    entries.sort_by_key(|entry| Reverse(entry.reserve_time));

    Self { entries }
  }
}
