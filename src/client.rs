use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  api_base: String,
  client: reqwest::Client,
}

impl Client {
  pub(crate) const API_BASE_URL: &str = "https://oauth.reddit.com";

  pub(crate) fn builder(
    user_agent: &str,
    timeout: Option<Duration>,
  ) -> reqwest::ClientBuilder {
    let builder = reqwest::Client::builder().user_agent(user_agent);

    match timeout {
      Some(timeout) => builder.timeout(timeout),
      None => builder,
    }
  }

  pub(crate) async fn fetch_more_children(
    &self,
    thread: &ThreadId,
    ids: &[String],
  ) -> Result<Vec<RawNode>, Error> {
    let (link_id, children) = (thread.fullname(), ids.join(","));

    let text = self
      .get_text(
        "/api/morechildren",
        &[
          ("link_id", link_id.as_str()),
          ("children", children.as_str()),
          ("api_type", "json"),
          ("raw_json", "1"),
        ],
      )
      .await?;

    let response = serde_json::from_str::<MoreChildrenResponse>(&text)
      .map_err(|source| Error::Parse {
        url: self.url("/api/morechildren"),
        source,
      })?;

    Ok(response.json.data.things)
  }

  pub(crate) async fn fetch_thread(
    &self,
    thread: &ThreadId,
  ) -> Result<Vec<RawNode>, Error> {
    let path = format!("/comments/{thread}");

    let text = self
      .get_text(
        &path,
        &[
          ("sort", "old"),
          ("threaded", "false"),
          ("api_type", "json"),
          ("raw_json", "1"),
        ],
      )
      .await?;

    let listings = serde_json::from_str::<Vec<Listing>>(&text).map_err(
      |source| Error::Parse {
        url: self.url(&path),
        source,
      },
    )?;

    let Some(comments) = listings.into_iter().nth(1) else {
      return Err(Error::MissingCommentListing {
        url: self.url(&path),
      });
    };

    info!(
      %thread,
      nodes = comments.data.children.len(),
      "fetched comment listing"
    );

    Ok(comments.data.children)
  }

  pub(crate) async fn get_text(
    &self,
    path: &str,
    query: &[(&str, &str)],
  ) -> Result<String, Error> {
    let url = self.url(path);

    debug!(%url, "GET");

    let response = self
      .client
      .get(&url)
      .query(query)
      .send()
      .await
      .and_then(reqwest::Response::error_for_status)
      .map_err(|source| Error::Fetch {
        url: url.clone(),
        source,
      })?;

    response
      .text()
      .await
      .map_err(|source| Error::Fetch { url, source })
  }

  pub(crate) fn new(
    api_base: &str,
    user_agent: &str,
    token: Option<&AccessToken>,
    timeout: Option<Duration>,
  ) -> Result<Self> {
    let mut headers = HeaderMap::new();

    if let Some(token) = token {
      let mut value = HeaderValue::from_str(&format!("Bearer {}", token.secret()))
        .context("access token is not a valid header value")?;

      value.set_sensitive(true);

      headers.insert(AUTHORIZATION, value);
    }

    let client = Self::builder(user_agent, timeout)
      .default_headers(headers)
      .build()
      .context("could not build http client")?;

    Ok(Self {
      api_base: api_base.trim_end_matches('/').to_string(),
      client,
    })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{path}", self.api_base)
  }
}
