use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Keywords {
  region: String,
  size: String,
}

impl Keywords {
  pub(crate) fn filter(
    &self,
    comments: Vec<RawComment>,
  ) -> Vec<RelevantComment> {
    comments
      .into_iter()
      .filter(|comment| self.matches(&comment.body))
      .map(RelevantComment::new)
      .collect()
  }

  pub(crate) fn matches(&self, body: &str) -> bool {
    let mut first_end = None::<usize>;
    let mut last_start = None::<usize>;

    for (start, end) in self.occurrences(&body.to_ascii_lowercase()) {
      first_end = Some(first_end.map_or(end, |current| current.min(end)));
      last_start = Some(last_start.map_or(start, |current| current.max(start)));
    }

    matches!((first_end, last_start), (Some(end), Some(start)) if end <= start)
  }

  pub(crate) fn new(region: &str, size: &str) -> Self {
    Self {
      region: region.to_ascii_lowercase(),
      size: size.to_ascii_lowercase(),
    }
  }

  fn occurrences(&self, body: &str) -> Vec<(usize, usize)> {
    let mut occurrences = Vec::new();

    let mut previous = None::<char>;

    for (index, ch) in body.char_indices() {
      let rest = &body[index..];

      let at_word_start = previous.is_none_or(|prev| !is_word_char(prev));

      if at_word_start && rest.starts_with(self.region.as_str()) {
        occurrences.push((index, index + self.region.len()));
      }

      if rest.starts_with(self.size.as_str()) {
        occurrences.push((index, index + self.size.len()));
      }

      previous = Some(ch);
    }

    occurrences
  }

  pub(crate) fn region(&self) -> &str {
    &self.region
  }

  pub(crate) fn size(&self) -> &str {
    &self.size
  }
}

fn is_word_char(ch: char) -> bool {
  ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
  use {super::*, rstest::rstest};

  fn eu_512() -> Keywords {
    Keywords::new("eu", "512")
  }

  fn raw(body: &str) -> RawComment {
    RawComment {
      author: "someone".into(),
      body: body.into(),
      permalink: "/p/".into(),
    }
  }

  #[rstest]
  #[case::region_then_size("eu 512gb reserved 1700000000")]
  #[case::size_then_region("512gb, eu slot")]
  #[case::text_between("reserved eu at last, only the 512 model")]
  #[case::punctuation_boundary("(eu)-512")]
  #[case::start_of_line_region("eu\n512\neu 512")]
  #[case::uppercase_body("EU 512GB")]
  #[case::size_twice("512 and 512")]
  #[case::region_twice("eu, eu")]
  #[case::region_on_own_line("eu\n512 1626459600")]
  #[case::blank_lines_between("eu:\n\n512gb 1626459600")]
  #[case::size_then_region_next_line("512gb\nreserved in the eu")]
  fn relevant_bodies_match(#[case] body: &str) {
    assert!(eu_512().matches(body), "{body:?} should match");
  }

  #[rstest]
  #[case::region_once("eu order email arrived")]
  #[case::size_once("went with 512")]
  #[case::region_inside_word("queue 512")]
  #[case::nothing("no keywords at all")]
  fn irrelevant_bodies_do_not_match(#[case] body: &str) {
    assert!(!eu_512().matches(body), "{body:?} should not match");
  }

  #[test]
  fn occurrences_on_separate_lines_count() {
    assert!(Keywords::new("EU", "512GB").matches("EU\n512GB 1626459600"));
    assert!(Keywords::new("e", "5").matches("e\n5x\n5x"));
  }

  #[test]
  fn keywords_are_case_insensitive() {
    assert!(Keywords::new("EU", "512").matches("512 eu"));
    assert!(Keywords::new("Uk", "64GB").matches("uk reservation, 64gb"));
  }

  #[test]
  fn region_needs_word_start_but_size_does_not() {
    let keywords = Keywords::new("us", "64");

    assert!(keywords.matches("us 256/64"));
    assert!(!keywords.matches("status 64"));
  }

  #[test]
  fn same_occurrence_is_not_counted_twice() {
    assert!(!Keywords::new("eu", "eu").matches("eu"));
    assert!(Keywords::new("eu", "eu").matches("eu eu"));
  }

  #[test]
  fn filter_returns_subset_in_input_order() {
    let input = vec![
      raw("eu 512 1700000000"),
      raw("us 64 1700000001"),
      raw("512 eu 1700000002"),
      raw("eu only"),
    ];

    let relevant = eu_512().filter(input.clone());

    let bodies = relevant
      .iter()
      .map(RelevantComment::body)
      .collect::<Vec<_>>();

    assert_eq!(bodies, ["eu 512 1700000000", "512 eu 1700000002"]);

    assert!(
      relevant
        .into_iter()
        .all(|comment| input.contains(&comment.into_inner()))
    );
  }
}
