// A handler that stores links in memory (non-persistent)
// Lives for as long as the server process does

use std::sync::{Arc, Mutex};

use crate::link::types::Link;
use crate::link::util::handler::LinkDataHandler;
use crate::shared::types::error::LinkError;

/// Shared handle to the store, cloned into every worker
pub type LinkStore = Arc<Mutex<MemoryHandler>>;

// Arguments that are absent or empty leave the existing value alone
macro_rules! update_if_present {
    ($base: ident, $property: ident) => {
        if let Some(value) = $property.filter(|value| !value.is_empty()) {
            $base.$property = value;
        }
    };
}

#[derive(Clone, Debug, Default)]
pub struct MemoryHandler {
    links: Vec<Link>
}

impl MemoryHandler {
    pub fn new() -> MemoryHandler {
        MemoryHandler { links: Vec::new() }
    }
}

// Ids are derived from the size, only sound while links are never removed.
// GraphQL Int is 32 bits so the store is full once the next id would overflow.
fn id_after(len: usize) -> Result<i32, LinkError> {
    len.checked_add(1)
        .and_then(|next| i32::try_from(next).ok())
        .ok_or(LinkError::StoreFull)
}

/// Builds the seeded store owned by the server
pub fn new_store() -> LinkStore {
    let mut handler = MemoryHandler::new();
    handler.init();
    Arc::new(Mutex::new(handler))
}

impl LinkDataHandler for MemoryHandler {
    fn init(&mut self) {
        self.links = vec![
            Link {
                id: 1,
                url: "google.com".to_string(),
                description: "Popular search engine".to_string()
            },
            Link {
                id: 2,
                url: "graphql.org".to_string(),
                description: "GraphQL official website".to_string()
            }
        ];
    }

    fn list(&self) -> &[Link] {
        &self.links
    }

    fn find_by_id(&self, id: i32) -> Option<&Link> {
        self.links.iter().find(|link| link.id == id)
    }

    fn create_link(&mut self, description: String, url: String) -> Result<&Link, LinkError> {
        let id = id_after(self.links.len())?;
        self.links.push(Link { id, description, url });
        log::info!("created link {}", id);
        match self.links.last() {
            None => Err(LinkError::StoreUnavailable),
            Some(link) => Ok(link)
        }
    }

    fn update_link(&mut self, id: i32, description: Option<String>, url: Option<String>)
            -> Result<&Link, LinkError> {
        let link = match self.links.iter_mut().find(|link| link.id == id) {
            None => {
                log::debug!("update_link: no link with id {}", id);
                return Err(LinkError::NotFound { id });
            }
            Some(link) => link
        };

        update_if_present!(link, description);
        update_if_present!(link, url);
        log::info!("updated link {}", id);
        Ok(&*link)
    }
}
