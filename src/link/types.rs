use async_graphql::SimpleObject;

/// A bookmarked url together with a short description of it
#[derive(Clone, Debug, PartialEq, SimpleObject)]
pub struct Link {
    pub id: i32,
    pub description: String,
    pub url: String
}
