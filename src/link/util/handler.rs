//! An abstraction layer interface for link storage

use crate::link::types::Link;
use crate::shared::types::error::LinkError;

pub trait LinkDataHandler {
    // Called once by the composition root, seeds the store
    fn init(&mut self);

    fn list(&self) -> &[Link];
    fn find_by_id(&self, id: i32) -> Option<&Link>;

    fn get_link(&self, id: i32) -> Result<&Link, LinkError> {
        self.find_by_id(id).ok_or(LinkError::NotFound { id })
    }

    fn create_link(&mut self, description: String, url: String) -> Result<&Link, LinkError>;
    fn update_link(&mut self, id: i32, description: Option<String>, url: Option<String>)
        -> Result<&Link, LinkError>;
}
