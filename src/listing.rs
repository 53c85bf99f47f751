use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
  pub(crate) data: ListingData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingData {
  #[serde(default)]
  pub(crate) children: Vec<RawNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoreChildrenResponse {
  pub(crate) json: MoreChildrenJson,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoreChildrenJson {
  pub(crate) data: MoreChildrenData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoreChildrenData {
  #[serde(default)]
  pub(crate) things: Vec<RawNode>,
}
