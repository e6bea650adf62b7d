#[cfg(test)]
mod tests {
    use linkfeed_server::link::handlers::memory_handler::MemoryHandler;
    use linkfeed_server::link::types::Link;
    use linkfeed_server::link::util::handler::LinkDataHandler;
    use linkfeed_server::shared::types::error::LinkError;

    fn seeded() -> MemoryHandler {
        let mut handler = MemoryHandler::new();
        handler.init();
        handler
    }

    fn link(id: i32, description: &str, url: &str) -> Link {
        Link { id, description: description.to_string(), url: url.to_string() }
    }

    #[test]
    fn get_link() {
        let handler = seeded();
        assert_eq!(handler.get_link(1), Ok(&link(1, "Popular search engine", "google.com")),
            "Get a seeded link");
        assert_eq!(handler.get_link(3), Err(LinkError::NotFound { id: 3 }), "Get a non-existing link");
        assert!(handler.find_by_id(0).is_none(), "Absence is not an error when finding");
    }

    #[test]
    fn create_link() {
        let mut handler = seeded();
        let created = handler.create_link("Test".to_string(), "test.com".to_string()).unwrap().clone();
        assert_eq!(created, link(3, "Test", "test.com"), "New link gets size + 1 as id");
        assert_eq!(handler.list().len(), 3, "Link appended to store");
        assert_eq!(handler.list().last(), Some(&created), "Created link is last in the feed");

        let next = handler.create_link("Rust".to_string(), "rust-lang.org".to_string()).unwrap();
        assert_eq!(next.id, 4, "Ids keep following the store size");
    }

    #[test]
    fn list_order() {
        let mut handler = seeded();
        handler.create_link("Third".to_string(), "third.org".to_string()).unwrap();
        handler.create_link("Fourth".to_string(), "fourth.org".to_string()).unwrap();

        let ids: Vec<i32> = handler.list().iter().map(|link| link.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4], "Feed keeps insertion order, seeds first");
        assert_eq!(handler.list().to_vec(), handler.list().to_vec(), "Listing twice yields the same feed");
    }

    #[test]
    fn update_link() {
        let mut handler = seeded();

        let updated = handler.update_link(1, Some("Updated".to_string()), None).unwrap().clone();
        assert_eq!(updated, link(1, "Updated", "google.com"), "Only the description changes");
        assert_eq!(handler.list()[0], updated, "Update is written back into the store");

        let updated = handler.update_link(2, None, Some("spec.graphql.org".to_string())).unwrap().clone();
        assert_eq!(updated, link(2, "GraphQL official website", "spec.graphql.org"), "Only the url changes");

        let unchanged = handler.update_link(1, None, None).unwrap().clone();
        assert_eq!(unchanged, link(1, "Updated", "google.com"), "No arguments leaves the link as is");
        assert_eq!(handler.list().len(), 2, "Updates never add links");
    }

    #[test]
    fn update_missing_link() {
        let mut handler = seeded();
        assert_eq!(handler.update_link(3, Some("Nope".to_string()), None),
            Err(LinkError::NotFound { id: 3 }), "Updating a non-existing link");
        assert_eq!(handler.list().len(), 2, "Failed update leaves the store alone");
    }
}
