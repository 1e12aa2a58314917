//! GraphQL schema export.

use juice_bar_server::db::Store;
use juice_bar_server::graphql::build_schema;

/// Render the schema served at `/graphql` as SDL.
///
/// The schema shape does not depend on the data, so an empty store is used.
#[must_use]
pub fn sdl() -> String {
    build_schema(Store::default()).sdl()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdl_has_all_roots() {
        let sdl = sdl();
        assert!(sdl.contains("type Juice"));
        assert!(sdl.contains("type Order"));
        assert!(sdl.contains("input JuiceInput"));
        assert!(sdl.contains("input OrderInput"));
        assert!(sdl.contains("searchJuices(query: String!)"));
        assert!(sdl.contains("juiceAdded"));
        assert!(sdl.contains("orderCreated"));
    }
}
