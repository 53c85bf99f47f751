use super::*;

#[derive(Clone)]
pub(crate) struct AccessToken(String);

#[derive(Debug, Deserialize)]
struct TokenResponse {
  access_token: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  error: Option<String>,
  message: Option<String>,
}

impl TokenResponse {
  fn reason(&self) -> String {
    match (self.message.as_deref(), self.error.as_deref()) {
      (Some(message), _) => message.to_string(),
      (None, Some(error)) => error.to_string(),
      (None, None) => "response carried no access_token".to_string(),
    }
  }
}

impl AccessToken {
  pub(crate) const AUTH_URL: &str = "https://www.reddit.com/api/v1/access_token";

  pub(crate) async fn acquire(
    http: &reqwest::Client,
    auth_url: &str,
    app_id: &str,
    app_secret: &str,
    attempts: u32,
  ) -> Result<Self, Error> {
    let attempts = attempts.max(1);

    let mut attempt = 1;

    loop {
      match Self::request(http, auth_url, app_id, app_secret).await {
        Ok(token) => {
          info!(attempt, "acquired access token");
          return Ok(token);
        }
        Err(error) if attempt < attempts => {
          warn!(attempt, attempts, %error, "access token attempt failed");
          attempt += 1;
        }
        Err(error) => return Err(error),
      }
    }
  }

  async fn request(
    http: &reqwest::Client,
    auth_url: &str,
    app_id: &str,
    app_secret: &str,
  ) -> Result<Self, Error> {
    let fetch_error = |source| Error::Fetch {
      url: auth_url.to_string(),
      source,
    };

    let response = http
      .post(auth_url)
      .basic_auth(app_id, Some(app_secret))
      .form(&[("grant_type", "client_credentials")])
      .send()
      .await
      .map_err(fetch_error)?;

    let status = response.status();

    let body = response.text().await.map_err(fetch_error)?;

    match serde_json::from_str::<TokenResponse>(&body) {
      Ok(TokenResponse {
        access_token: Some(token),
        ..
      }) if !token.is_empty() => Ok(Self::from(token)),
      Ok(response) => Err(Error::Token {
        message: response.reason(),
        status: status.as_u16(),
      }),
      Err(source) if status.is_success() => Err(Error::Parse {
        url: auth_url.to_string(),
        source,
      }),
      Err(_) => Err(Error::Token {
        message: truncate(body.trim(), 120),
        status: status.as_u16(),
      }),
    }
  }

  pub(crate) fn secret(&self) -> &str {
    &self.0
  }
}

impl From<String> for AccessToken {
  fn from(token: String) -> Self {
    Self(token)
  }
}

impl fmt::Debug for AccessToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str("AccessToken(..)")
  }
}
