use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("request to {url} failed")]
  Fetch {
    #[source]
    source: reqwest::Error,
    url: String,
  },
  #[error("`{input}` is not a thread id, fullname or comments url")]
  InvalidThreadId { input: String },
  #[error("thread listing from {url} has no comment listing")]
  MissingCommentListing { url: String },
  #[error("unexpected response shape from {url}")]
  Parse {
    #[source]
    source: serde_json::Error,
    url: String,
  },
  #[error("access token request was rejected ({status}): {message}")]
  Token { message: String, status: u16 },
}

impl Error {
  pub(crate) fn is_fetch(&self) -> bool {
    matches!(self, Self::Fetch { .. })
  }
}
