//! REST URL construction
//!
//! The server address is a scheme-less `host:port`; every address the client
//! talks to is `http://{server}/api/v1/...`. Ids are UUID-safe strings and are
//! interpolated without additional encoding.

/// `http://{server}/api/v1/{entity}` — collection find and create
pub(crate) fn collection(server: &str, entity: &str) -> String {
    format!("http://{server}/api/v1/{entity}")
}

/// `http://{server}/api/v1/{entity}/{id}` — find_by_id, update, delete
pub(crate) fn resource(server: &str, entity: &str, id: &str) -> String {
    format!("http://{server}/api/v1/{entity}/{id}")
}

/// `http://{server}/api/v1/{entity}/{id}/subscriptions`
pub(crate) fn subscriptions(server: &str, entity: &str, id: &str) -> String {
    format!("http://{server}/api/v1/{entity}/{id}/subscriptions")
}

/// `http://{server}/api/v1/{entity}/{id}/runs` — nested run listing, and run
/// creation when the entity is `tests`
pub(crate) fn runs(server: &str, entity: &str, id: &str) -> String {
    format!("http://{server}/api/v1/{entity}/{id}/runs")
}

/// `http://{server}/api/v1/{entity1}/{id1}/{entity2}/{id2}` — pairwise
/// mapping create, find, and delete
pub(crate) fn map(server: &str, entity1: &str, id1: &str, entity2: &str, id2: &str) -> String {
    format!("http://{server}/api/v1/{entity1}/{id1}/{entity2}/{id2}")
}

/// `http://{server}/api/v1/{entity1}/{id1}/{entity2}` — mapping collection
/// find
pub(crate) fn map_collection(server: &str, entity1: &str, id1: &str, entity2: &str) -> String {
    format!("http://{server}/api/v1/{entity1}/{id1}/{entity2}")
}

/// `http://{server}/api/v1/{entity1}/{id1}/{entity2}/{id2}/{name}` — mapping
/// keyed by an additional name
pub(crate) fn named_map(
    server: &str,
    entity1: &str,
    id1: &str,
    entity2: &str,
    id2: &str,
    name: &str,
) -> String {
    format!("http://{server}/api/v1/{entity1}/{id1}/{entity2}/{id2}/{name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_collection_url() {
        assert_eq!(
            collection("example.com", "pipelines"),
            "http://example.com/api/v1/pipelines"
        );
    }

    #[test]
    fn test_resource_url() {
        let id = Uuid::new_v4().to_string();
        assert_eq!(
            resource("example.com:8080", "templates", &id),
            format!("http://example.com:8080/api/v1/templates/{id}")
        );
    }

    #[test]
    fn test_subscriptions_url() {
        assert_eq!(
            subscriptions("example.com", "templates", "abc"),
            "http://example.com/api/v1/templates/abc/subscriptions"
        );
    }

    #[test]
    fn test_runs_url() {
        assert_eq!(
            runs("example.com", "tests", "abc"),
            "http://example.com/api/v1/tests/abc/runs"
        );
    }

    #[test]
    fn test_map_urls() {
        assert_eq!(
            map("example.com", "templates", "t1", "results", "r1"),
            "http://example.com/api/v1/templates/t1/results/r1"
        );
        assert_eq!(
            map_collection("example.com", "templates", "t1", "results"),
            "http://example.com/api/v1/templates/t1/results"
        );
        assert_eq!(
            named_map("example.com", "reports", "r1", "sections", "s1", "Intro"),
            "http://example.com/api/v1/reports/r1/sections/s1/Intro"
        );
    }
}
