use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "reserve-finder",
  version,
  about = "Find the latest reservation time reported in a Reddit thread"
)]
pub(crate) struct Arguments {
  #[arg(long, env = "RESERVE_FINDER_API_BASE", default_value = Client::API_BASE_URL)]
  api_base: String,
  #[arg(long, env = "REDDIT_APP_ID")]
  app_id: String,
  #[arg(long, env = "REDDIT_APP_SECRET", hide_env_values = true)]
  app_secret: String,
  #[arg(long, env = "RESERVE_FINDER_AUTH_URL", default_value = AccessToken::AUTH_URL)]
  auth_url: String,
  /// Ignore comments by this author (repeatable)
  #[arg(long = "exclude-author", value_name = "NAME", default_value = "fammy")]
  exclude_authors: Vec<String>,
  /// Print the ranking as JSON
  #[arg(long)]
  json: bool,
  /// Open the best match in the browser
  #[arg(long)]
  open: bool,
  /// Region keyword, for example eu, us or uk
  #[arg(long, value_parser = parse_keyword)]
  region: String,
  /// Size keyword, for example 64, 256 or 512
  #[arg(long, value_parser = parse_keyword)]
  size: String,
  /// Thread id, t3_ fullname or comments url
  thread: ThreadId,
  /// Request timeout in seconds
  #[arg(long, value_name = "SECONDS")]
  timeout: Option<u64>,
  #[arg(long, default_value_t = 10)]
  token_attempts: u32,
  #[arg(
    long,
    env = "RESERVE_FINDER_USER_AGENT",
    default_value = concat!("reserve-finder/", env!("CARGO_PKG_VERSION"))
  )]
  user_agent: String,
  /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
  #[arg(short, long, action = ArgAction::Count)]
  verbose: u8,
}

impl Arguments {
  pub(crate) fn log_directive(&self) -> String {
    let level = match self.verbose {
      0 => "warn",
      1 => "info",
      2 => "debug",
      _ => "trace",
    };

    format!("warn,reserve_finder={level}")
  }

  pub(crate) async fn run(self) -> Result {
    let timeout = self.timeout.map(Duration::from_secs);

    let http = Client::builder(&self.user_agent, timeout)
      .build()
      .context("could not build http client")?;

    let token = AccessToken::acquire(
      &http,
      &self.auth_url,
      &self.app_id,
      &self.app_secret,
      self.token_attempts,
    )
    .await
    .context("could not acquire access token")?;

    let client =
      Client::new(&self.api_base, &self.user_agent, Some(&token), timeout)?;

    let keywords = Keywords::new(&self.region, &self.size);

    let expander = Expander::new(self.exclude_authors);

    let ranking =
      find_best_reservation(&client, &self.thread, &keywords, &expander)
        .await
        .with_context(|| {
          format!("failed to load comments for thread {}", self.thread)
        })?;

    if self.json {
      println!("{}", render_json(&ranking)?);
    } else {
      println!("{}", render_text(&ranking, &keywords));
    }

    if self.open
      && let Some(best) = ranking.best()
    {
      let url = permalink_url(best.permalink());

      webbrowser::open(&url).with_context(|| format!("could not open {url}"))?;
    }

    Ok(())
  }
}

fn parse_keyword(value: &str) -> Result<String, String> {
  let keyword = value.trim();

  if keyword.is_empty() {
    return Err("keyword must not be blank".into());
  }

  Ok(keyword.to_string())
}
