use super::*;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
  best: Option<ReportEntry<'a>>,
  entries: Vec<ReportEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ReportEntry<'a> {
  permalink: String,
  reserve_time: i64,
  username: &'a str,
}

impl<'a> From<&'a TimedComment> for ReportEntry<'a> {
  fn from(entry: &'a TimedComment) -> Self {
    Self {
      permalink: permalink_url(entry.permalink()),
      reserve_time: entry.reserve_time,
      username: entry.author(),
    }
  }
}

pub(crate) fn render_json(ranking: &Ranking) -> serde_json::Result<String> {
  serde_json::to_string_pretty(&JsonReport {
    best: ranking.best().map(ReportEntry::from),
    entries: ranking.entries().iter().map(ReportEntry::from).collect(),
  })
}

pub(crate) fn render_text(ranking: &Ranking, keywords: &Keywords) -> String {
  let Some(best) = ranking.best() else {
    return format!(
      "no reservation found for {}/{}",
      keywords.region(),
      keywords.size()
    );
  };

  let mut output = String::from("Found reserve times:\n");

  for entry in ranking.entries() {
    output.push_str(&entry.to_string());
    output.push('\n');
  }

  output.push_str(&format!(
    "\n= highest reserve time for {}/{}: {best} =",
    keywords.region(),
    keywords.size()
  ));

  output
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  fn ranking() -> Ranking {
    Ranking::new(vec![
      TimedComment {
        comment: RawComment {
          author: "early".into(),
          body: "eu 512 1626459600".into(),
          permalink: "/r/SteamDeck/comments/abc/t/c1/".into(),
        },
        reserve_time: 1_626_459_600,
      },
      TimedComment {
        comment: RawComment {
          author: "late".into(),
          body: "eu 512 1626459700".into(),
          permalink: "/r/SteamDeck/comments/abc/t/c2/".into(),
        },
        reserve_time: 1_626_459_700,
      },
    ])
  }

  #[test]
  fn text_lists_entries_then_highest() {
    assert_eq!(
      render_text(&ranking(), &Keywords::new("eu", "512")),
      "\
Found reserve times:
1626459700 by late > https://www.reddit.com/r/SteamDeck/comments/abc/t/c2/
1626459600 by early > https://www.reddit.com/r/SteamDeck/comments/abc/t/c1/

= highest reserve time for eu/512: 1626459700 by late > https://www.reddit.com/r/SteamDeck/comments/abc/t/c2/ ="
    );
  }

  #[test]
  fn text_reports_no_match_explicitly() {
    assert_eq!(
      render_text(&Ranking::new(Vec::new()), &Keywords::new("UK", "64")),
      "no reservation found for uk/64"
    );
  }

  #[test]
  fn json_contains_best_and_entries() {
    let value = serde_json::from_str::<Value>(&render_json(&ranking()).unwrap())
      .unwrap();

    assert_eq!(
      value["best"],
      json!({
        "permalink": "https://www.reddit.com/r/SteamDeck/comments/abc/t/c2/",
        "reserve_time": 1_626_459_700,
        "username": "late"
      })
    );

    assert_eq!(value["entries"].as_array().map(Vec::len), Some(2));
  }

  #[test]
  fn json_best_is_null_without_match() {
    let value =
      serde_json::from_str::<Value>(&render_json(&Ranking::new(Vec::new())).unwrap())
        .unwrap();

    assert!(value["best"].is_null());
  }
}
