//! Registry shared across threads.
//!
//! A registry is built during startup, then published here. Readers take
//! lock-free snapshots; a reload swaps in a whole new registry at once.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::routing::registry::RouteRegistry;
use crate::routing::route::{Routable, Route};
use crate::routing::template::Variables;
use crate::routing::types::RouteResult;

pub struct SharedRegistry<R = Route> {
    current: ArcSwap<RouteRegistry<R>>,
}

impl<R: Routable> SharedRegistry<R> {
    pub fn new(registry: RouteRegistry<R>) -> Self {
        Self {
            current: ArcSwap::from_pointee(registry),
        }
    }

    /// Snapshot of the current registry.
    pub fn load(&self) -> Arc<RouteRegistry<R>> {
        self.current.load_full()
    }

    /// Publish a new registry, returning the one it replaced.
    pub fn replace(&self, registry: RouteRegistry<R>) -> Arc<RouteRegistry<R>> {
        let count = registry.len();
        let previous = self.current.swap(Arc::new(registry));
        tracing::info!(routes = count, previous = previous.len(), "Route registry replaced");
        previous
    }

    pub fn url_for(&self, name: impl AsRef<str>, variables: &Variables) -> RouteResult<String> {
        self.current.load().url_for(name, variables)
    }
}

impl<R: Routable> Default for SharedRegistry<R> {
    fn default() -> Self {
        Self::new(RouteRegistry::new())
    }
}

impl<R: Routable + std::fmt::Debug> std::fmt::Debug for SharedRegistry<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRegistry")
            .field("current", &self.current.load_full())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_replace_swaps_whole_registry() {
        let shared = SharedRegistry::new([Route::new("home", "/v1")].into_iter().collect());
        let before = shared.load();

        let previous = shared.replace([Route::new("home", "/v2")].into_iter().collect());

        assert_eq!(previous.find("home").unwrap().path(), "/v1");
        assert_eq!(before.find("home").unwrap().path(), "/v1");
        assert_eq!(shared.url_for("home", &Variables::new()).unwrap(), "/v2");
    }

    #[test]
    fn test_concurrent_readers() {
        let shared = SharedRegistry::new(
            [Route::templated("search", "/search{?q}")].into_iter().collect(),
        );

        thread::scope(|s| {
            for i in 0..4 {
                let shared = &shared;
                s.spawn(move || {
                    let vars = Variables::new().with("q", i.to_string());
                    let url = shared.url_for("search", &vars).unwrap();
                    assert_eq!(url, format!("/search?q={i}"));
                });
            }
        });
    }
}
