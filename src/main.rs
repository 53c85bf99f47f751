use {
  anyhow::Context,
  arguments::Arguments,
  clap::{ArgAction, Parser},
  client::Client,
  comment::{RawComment, RelevantComment, TimedComment},
  crossterm::style::Stylize,
  error::Error,
  expander::Expander,
  keywords::Keywords,
  lazy_regex::regex_captures,
  listing::{Listing, MoreChildrenResponse},
  node::{Node, RawNode},
  pipeline::find_best_reservation,
  ranking::Ranking,
  report::{render_json, render_text},
  reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue},
  reservation::extract_reservations,
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected},
  },
  serde_json::Value,
  std::{
    backtrace::BacktraceStatus,
    cmp::Reverse,
    collections::HashSet,
    fmt::{self, Display, Formatter},
    io::{self, IsTerminal},
    process,
    str::FromStr,
    time::Duration,
  },
  thread_id::ThreadId,
  token::AccessToken,
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  utils::{deserialize_optional_string, normalize_body, permalink_url, truncate},
};

mod arguments;
mod client;
mod comment;
mod error;
mod expander;
mod keywords;
mod listing;
mod node;
mod pipeline;
mod ranking;
mod report;
mod reservation;
mod thread_id;
mod token;
mod utils;

const PERMALINK_HOST: &str = "https://www.reddit.com";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging(arguments: &Arguments) {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(arguments.log_directive()));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

#[tokio::main]
async fn main() {
  let arguments = Arguments::parse();

  initialize_logging(&arguments);

  if let Err(error) = arguments.run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
