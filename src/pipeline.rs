use super::*;

pub(crate) async fn find_best_reservation(
  client: &Client,
  thread: &ThreadId,
  keywords: &Keywords,
  expander: &Expander,
) -> Result<Ranking, Error> {
  let nodes = client.fetch_thread(thread).await?;

  let comments = expander.expand(client, thread, nodes).await?;

  let total = comments.len();

  let relevant = keywords.filter(comments);

  info!(
    total,
    relevant = relevant.len(),
    region = keywords.region(),
    size = keywords.size(),
    "filtered comments"
  );

  let timed = extract_reservations(relevant);

  info!(timed = timed.len(), "extracted reservation times");

  Ok(Ranking::new(timed))
}
