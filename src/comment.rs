use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RawComment {
  pub(crate) author: String,
  pub(crate) body: String,
  pub(crate) permalink: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RelevantComment(RawComment);

impl RelevantComment {
  pub(crate) fn body(&self) -> &str {
    &self.0.body
  }

  pub(crate) fn into_inner(self) -> RawComment {
    self.0
  }

  pub(crate) fn new(comment: RawComment) -> Self {
    Self(comment)
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TimedComment {
  pub(crate) comment: RawComment,
  pub(crate) reserve_time: i64,
}

impl TimedComment {
  pub(crate) fn author(&self) -> &str {
    &self.comment.author
  }

  pub(crate) fn permalink(&self) -> &str {
    &self.comment.permalink
  }
}

impl Display for TimedComment {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} by {} > {}",
      self.reserve_time,
      self.author(),
      permalink_url(self.permalink())
    )
  }
}
