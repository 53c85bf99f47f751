use super::*;

pub(crate) struct Expander {
  excluded_authors: Vec<String>,
}

#[derive(Default)]
struct Pass {
  comments: Vec<RawComment>,
  seen: HashSet<String>,
  stubs: Vec<String>,
}

impl Pass {
  fn collect(mut self, nodes: Vec<RawNode>, expander: &Expander) -> Self {
    for node in nodes {
      match Node::from(node) {
        Node::Comment {
          author,
          body,
          permalink,
        } => {
          if expander.is_excluded(&author) {
            debug!(%author, %permalink, "skipping excluded author");
            continue;
          }

          self.comments.push(RawComment {
            author,
            body: normalize_body(&body),
            permalink,
          });
        }
        Node::Stub(ids) => {
          for id in ids {
            if self.seen.insert(id.clone()) {
              self.stubs.push(id);
            }
          }
        }
        Node::Unknown => {}
      }
    }

    self
  }
}

impl Expander {
  pub(crate) async fn expand(
    &self,
    client: &Client,
    thread: &ThreadId,
    nodes: Vec<RawNode>,
  ) -> Result<Vec<RawComment>, Error> {
    let Pass {
      mut comments,
      stubs,
      ..
    } = Pass::default().collect(nodes, self);

    if stubs.is_empty() {
      info!(comments = comments.len(), "listing has no stub comments");
      return Ok(comments);
    }

    info!(
      comments = comments.len(),
      stubs = stubs.len(),
      "expanding stub comments"
    );

    let things = match client.fetch_more_children(thread, &stubs).await {
      Ok(things) => things,
      Err(error) if error.is_fetch() => {
        warn!(
          %error,
          kept = comments.len(),
          "could not expand stub comments, keeping first pass"
        );
        return Ok(comments);
      }
      Err(error) => return Err(error),
    };

    let second = Pass::default().collect(things, self);

    if !second.stubs.is_empty() {
      debug!(
        stubs = second.stubs.len(),
        "leaving nested stub comments unexpanded"
      );
    }

    info!(expanded = second.comments.len(), "merged stub comments");

    comments.extend(second.comments);

    Ok(comments)
  }

  fn is_excluded(&self, author: &str) -> bool {
    self
      .excluded_authors
      .iter()
      .any(|excluded| excluded.eq_ignore_ascii_case(author))
  }

  pub(crate) fn new<I, S>(excluded_authors: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      excluded_authors: excluded_authors.into_iter().map(Into::into).collect(),
    }
  }
}
