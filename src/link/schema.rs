//! GraphQL root fields for the link feed

use std::sync::MutexGuard;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, PathSegment, Result, Schema};

use crate::link::handlers::memory_handler::{LinkStore, MemoryHandler};
use crate::link::types::Link;
use crate::link::util::handler::LinkDataHandler;
use crate::shared::types::error::LinkError;

pub type LinkSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: LinkStore) -> LinkSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn store<'a>(ctx: &Context<'a>) -> Result<MutexGuard<'a, MemoryHandler>> {
    ctx.data_unchecked::<LinkStore>()
        .lock()
        .map_err(|_| {
            log::error!("link store mutex is poisoned");
            LinkError::StoreUnavailable.extend()
        })
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every link, oldest first
    async fn feed(&self, ctx: &Context<'_>) -> Result<Vec<Link>> {
        Ok(store(ctx)?.list().to_vec())
    }

    /// Looks up a single link. A missing id resolves to null and adds an error.
    async fn link(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Link>> {
        match store(ctx)?.get_link(id) {
            Ok(link) => Ok(Some(link.clone())),
            Err(err) => {
                log::debug!("link: no link with id {}", id);
                let mut error = err.extend().into_server_error(ctx.item.pos);
                if let Some(node) = ctx.path_node {
                    error.path = node.to_string_vec().into_iter().map(PathSegment::Field).collect();
                }
                ctx.add_error(error);
                Ok(None)
            }
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Adds a link to the end of the feed
    async fn post(&self, ctx: &Context<'_>, description: String, url: String) -> Result<Link> {
        store(ctx)?
            .create_link(description, url)
            .map(Link::clone)
            .map_err(|err| err.extend())
    }

    /// Replaces the description and/or url of an existing link
    async fn update_link(
        &self,
        ctx: &Context<'_>,
        id: i32,
        description: Option<String>,
        url: Option<String>,
    ) -> Result<Link> {
        store(ctx)?
            .update_link(id, description, url)
            .map(Link::clone)
            .map_err(|err| err.extend())
    }
}
