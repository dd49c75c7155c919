//! Per-class collection of response tables.

use crate::{format::Action, response::Response};
use std::{collections::HashMap, fmt};

/// Maps action names to their [`Response`] tables.
///
/// Reading an action through [`Collector::get`] materializes an empty table
/// on first access, so configuration code never has to declare actions
/// up front.
pub struct Collector<C, O = ()> {
    responses: HashMap<Action, Response<C, O>>,
}

impl<C, O> Collector<C, O> {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    /// The response table for `action`, created empty if missing.
    pub fn get(&mut self, action: impl Into<Action>) -> &mut Response<C, O> {
        self.responses.entry(action.into()).or_default()
    }

    /// The response table for `action`, without creating one.
    pub fn find(&self, action: &str) -> Option<&Response<C, O>> {
        self.responses.get(action)
    }

    /// Drop the table for `action`, returning it.
    pub fn remove(&mut self, action: &str) -> Option<Response<C, O>> {
        self.responses.remove(action)
    }

    /// The configured action names, sorted.
    pub fn actions(&self) -> Vec<&Action> {
        let mut actions: Vec<_> = self.responses.keys().collect();
        actions.sort();
        actions
    }

    /// Number of actions with a table.
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Whether no table has been created yet.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl<C, O> Default for Collector<C, O> {
    fn default() -> Self {
        Self::new()
    }
}

// Every table is cloned, none is shared between collectors.
impl<C, O> Clone for Collector<C, O> {
    fn clone(&self) -> Self {
        Self {
            responses: self
                .responses
                .iter()
                .map(|(action, response)| (action.clone(), response.clone()))
                .collect(),
        }
    }
}

impl<C, O> fmt::Debug for Collector<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.responses.iter()).finish()
    }
}
