//! Route registry.
//!
//! # Responsibilities
//! - Store routes in insertion order
//! - Enforce one route per name
//! - Resolve names to routes, permissively or strictly
//!
//! # Design Decisions
//! - Append-only: routes are never removed or replaced
//! - First definition of a name wins under permissive insertion
//! - O(n) name scan (registries are small, built at startup)
//! - Generic over `Routable`; never depends on the concrete `Route`

use std::slice;

use crate::routing::route::{Routable, Route};
use crate::routing::template::Variables;
use crate::routing::types::{RouteError, RouteResult};

/// An ordered, uniquely-named collection of routes.
#[derive(Debug, Clone)]
pub struct RouteRegistry<R = Route> {
    routes: Vec<R>,
}

impl<R> Default for RouteRegistry<R> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<R: Routable> RouteRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route unless its name is already taken.
    ///
    /// Returns `true` if the route was added. A duplicate is dropped without
    /// error and the existing route is kept.
    pub fn add(&mut self, route: R) -> bool {
        if self.contains_name(route.name()) {
            tracing::debug!(route = %route.name(), "Duplicate route ignored");
            return false;
        }

        tracing::debug!(route = %route.name(), "Route added");
        self.routes.push(route);
        true
    }

    /// Append a route, failing if its name is already taken.
    pub fn add_strict(&mut self, route: R) -> RouteResult<()> {
        if self.contains_name(route.name()) {
            tracing::debug!(route = %route.name(), "Duplicate route rejected");
            return Err(RouteError::ExistingRoute(route.name().to_string()));
        }

        tracing::debug!(route = %route.name(), "Route added");
        self.routes.push(route);
        Ok(())
    }

    /// Admit an untyped route candidate, then [`add`](Self::add) it.
    ///
    /// Fails with [`RouteError::InvalidRoute`] if the candidate does not
    /// carry both a name and an expansion target.
    pub fn try_add<T>(&mut self, candidate: T) -> RouteResult<bool>
    where
        T: TryInto<R, Error = RouteError>,
    {
        let route = candidate.try_into()?;
        Ok(self.add(route))
    }

    /// Admit an untyped route candidate, then [`add_strict`](Self::add_strict) it.
    pub fn try_add_strict<T>(&mut self, candidate: T) -> RouteResult<()>
    where
        T: TryInto<R, Error = RouteError>,
    {
        let route = candidate.try_into()?;
        self.add_strict(route)
    }

    /// Look up a route by name.
    pub fn find(&self, name: impl AsRef<str>) -> Option<&R> {
        let name = name.as_ref();
        self.routes.iter().find(|route| route.name() == name)
    }

    /// Look up a route by name, failing if it is not registered.
    pub fn find_strict(&self, name: impl AsRef<str>) -> RouteResult<&R> {
        let name = name.as_ref();
        self.find(name)
            .ok_or_else(|| RouteError::RouteNotFound(name.to_string()))
    }

    /// Resolve a name and expand it in one step.
    pub fn url_for(&self, name: impl AsRef<str>, variables: &Variables) -> RouteResult<String> {
        self.find_strict(name)?.url_for(variables)
    }

    pub fn contains_name(&self, name: impl AsRef<str>) -> bool {
        self.find(name).is_some()
    }

    /// Membership by value equality, independent of name lookup.
    pub fn contains(&self, route: &R) -> bool
    where
        R: PartialEq,
    {
        self.routes.contains(route)
    }

    /// Whether any routes have been registered.
    pub fn has_routes(&self) -> bool {
        !self.routes.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, R> {
        self.routes.iter()
    }

    pub fn routes(&self) -> &[R] {
        &self.routes
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.name())
    }
}

impl<'a, R> IntoIterator for &'a RouteRegistry<R> {
    type Item = &'a R;
    type IntoIter = slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

impl<R> IntoIterator for RouteRegistry<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}

impl<R: Routable> Extend<R> for RouteRegistry<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for route in iter {
            self.add(route);
        }
    }
}

impl<R: Routable> FromIterator<R> for RouteRegistry<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}
