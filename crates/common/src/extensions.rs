//! Body transformation hooks
//!
//! Deployments can register hooks that rewrite the outbound query body
//! before it is sent (`augment_query`) and the upstream result body before
//! it is returned (`augment_results`). Hooks run synchronously in
//! registration order; with no hooks registered the body passes through
//! untouched.

use std::fmt;
use std::sync::Arc;

/// A synchronous in-place body transformation
pub type BodyHook = Arc<dyn Fn(&mut Vec<u8>) + Send + Sync>;

/// Registered pre-send and post-receive hooks
#[derive(Clone, Default)]
pub struct Extensions {
    augment_query: Vec<BodyHook>,
    augment_results: Vec<BodyHook>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook run on the request body before the upstream call
    pub fn on_augment_query<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut Vec<u8>) + Send + Sync + 'static,
    {
        self.augment_query.push(Arc::new(hook));
        self
    }

    /// Register a hook run on the upstream body before it is returned
    pub fn on_augment_results<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut Vec<u8>) + Send + Sync + 'static,
    {
        self.augment_results.push(Arc::new(hook));
        self
    }

    pub fn augment_query(&self, body: &mut Vec<u8>) {
        for hook in &self.augment_query {
            hook(body);
        }
    }

    pub fn augment_results(&self, body: &mut Vec<u8>) {
        for hook in &self.augment_results {
            hook(body);
        }
    }
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extensions")
            .field("augment_query", &self.augment_query.len())
            .field("augment_results", &self.augment_results.len())
            .finish()
    }
}
