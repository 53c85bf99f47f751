use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ThreadId(String);

impl ThreadId {
  pub(crate) fn as_str(&self) -> &str {
    &self.0
  }

  pub(crate) fn fullname(&self) -> String {
    format!("t3_{}", self.0)
  }
}

impl Display for ThreadId {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl FromStr for ThreadId {
  type Err = Error;

  fn from_str(input: &str) -> Result<Self, Self::Err> {
    let trimmed = input.trim();

    let candidate = match trimmed.split_once("/comments/") {
      Some((_, rest)) => rest.split(['/', '?', '#']).next().unwrap_or_default(),
      None => trimmed.strip_prefix("t3_").unwrap_or(trimmed),
    };

    if candidate.is_empty()
      || !candidate.chars().all(|ch| ch.is_ascii_alphanumeric())
    {
      return Err(Error::InvalidThreadId {
        input: input.to_string(),
      });
    }

    Ok(Self(candidate.to_ascii_lowercase()))
  }
}
