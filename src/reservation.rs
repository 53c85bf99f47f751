use super::*;

pub(crate) fn extract_reservations(
  comments: Vec<RelevantComment>,
) -> Vec<TimedComment> {
  comments
    .into_iter()
    .filter_map(|comment| {
      let Some(reserve_time) = reserve_time(comment.body()) else {
        debug!(
          snippet = %truncate(comment.body(), 60),
          "relevant comment has no reservation time"
        );
        return None;
      };

      let comment = comment.into_inner();

      debug!(
        reserve_time,
        author = %comment.author,
        snippet = %truncate(&comment.body, 60),
        "found reservation time"
      );

      Some(TimedComment {
        comment,
        reserve_time,
      })
    })
    .collect()
}

pub(crate) fn reserve_time(body: &str) -> Option<i64> {
  let (_, digits) = regex_captures!(r"(?:^|[^0-9])([0-9]{10})(?:[^0-9]|$)", body)?;

  digits.parse().ok()
}

#[cfg(test)]
mod tests {
  use {super::*, rstest::rstest};

  fn relevant(body: &str) -> RelevantComment {
    RelevantComment::new(RawComment {
      author: "deckfan".into(),
      body: body.into(),
      permalink: "/p/".into(),
    })
  }

  #[rstest]
  #[case::embedded("reserved slot 1700000000 confirmed", Some(1_700_000_000))]
  #[case::whole_body("1626459600", Some(1_626_459_600))]
  #[case::punctuation("eu 512: rt=1626459600!", Some(1_626_459_600))]
  #[case::first_of_two("1626459600 then 1626459999", Some(1_626_459_600))]
  #[case::nine_digits("only 9999999 here", None)]
  #[case::short_run("only 999999999 here", None)]
  #[case::eleven_digits("order 16264596001 placed", None)]
  #[case::skips_long_run("16264596001 or 1626459602", Some(1_626_459_602))]
  #[case::no_digits("eu 512 no time yet", None)]
  fn finds_standalone_ten_digit_run(
    #[case] body: &str,
    #[case] expected: Option<i64>,
  ) {
    assert_eq!(reserve_time(body), expected);
  }

  #[test]
  fn extraction_drops_comments_without_time() {
    let timed = extract_reservations(vec![
      relevant("eu 512 1700000000"),
      relevant("eu 512 soon"),
      relevant("512 eu 1690000000"),
    ]);

    assert_eq!(
      timed
        .iter()
        .map(|timed| timed.reserve_time)
        .collect::<Vec<_>>(),
      [1_700_000_000, 1_690_000_000]
    );
  }
}
