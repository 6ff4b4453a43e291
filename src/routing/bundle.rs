//! Route bundles.
//!
//! # Design Decisions
//! - Built once, never mutated afterwards
//! - `routes()` hands out an owned copy, never a view of internal state
//! - Order is registration order; engines treat entries independently

use std::slice;

use crate::routing::descriptor::RouteDescriptor;
use crate::routing::handler::RouteHandler;

/// Ordered, immutable set of predefined routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBundle<H = RouteHandler> {
    routes: Vec<RouteDescriptor<H>>,
}

impl<H> RouteBundle<H> {
    /// Create a bundle from an already built list. Accepts an empty list.
    pub fn new(routes: Vec<RouteDescriptor<H>>) -> Self {
        Self { routes }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Borrowing iterator in registration order.
    pub fn iter(&self) -> slice::Iter<'_, RouteDescriptor<H>> {
        self.routes.iter()
    }
}

impl<H: Clone> RouteBundle<H> {
    /// Independent copy of the descriptors. Mutating it leaves the bundle intact.
    pub fn routes(&self) -> Vec<RouteDescriptor<H>> {
        self.routes.clone()
    }
}

impl<H> Default for RouteBundle<H> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<H> FromIterator<RouteDescriptor<H>> for RouteBundle<H> {
    fn from_iter<I: IntoIterator<Item = RouteDescriptor<H>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, H> IntoIterator for &'a RouteBundle<H> {
    type Item = &'a RouteDescriptor<H>;
    type IntoIter = slice::Iter<'a, RouteDescriptor<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
