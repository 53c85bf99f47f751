use super::*;

const COMMENT_KIND: &str = "t1";
const STUB_KIND: &str = "more";

#[derive(Debug, Deserialize)]
pub(crate) struct RawNode {
  #[serde(default)]
  pub(crate) data: Value,
  pub(crate) kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentData {
  author: Option<String>,
  body: Option<String>,
  permalink: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StubData {
  children: Option<Vec<String>>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Node {
  Comment {
    author: String,
    body: String,
    permalink: String,
  },
  Stub(Vec<String>),
  Unknown,
}

impl From<RawNode> for Node {
  fn from(raw: RawNode) -> Self {
    match raw.kind.as_deref() {
      Some(COMMENT_KIND) => {
        let Ok(CommentData {
          author: Some(author),
          body: Some(body),
          permalink: Some(permalink),
        }) = serde_json::from_value::<CommentData>(raw.data)
        else {
          return Self::Unknown;
        };

        if body.is_empty() {
          return Self::Unknown;
        }

        Self::Comment {
          author,
          body,
          permalink,
        }
      }
      Some(STUB_KIND) => match serde_json::from_value::<StubData>(raw.data) {
        Ok(StubData {
          children: Some(children),
        }) if !children.is_empty() => Self::Stub(children),
        _ => Self::Unknown,
      },
      _ => Self::Unknown,
    }
  }
}
