//! The response table for a single action.
//!
//! A [`Response`] records three kinds of bindings:
//!
//! - **Custom formats**: arbitrary format names, each with its own optional
//!   callback, kept in first-registration order.
//! - **Published formats**: a group of formats sharing one callback.
//! - **Default**: the callback for the fallback `any` format.
//!
//! Dispatch walks them in exactly that order, so a custom format beats a
//! published one, which beats the default.

use crate::{callback::Callback, error::ConfigError, format::Format};
use std::{collections::HashMap, fmt};

/// The ordered format → callback table for one action.
pub struct Response<C, O = ()> {
    default: Option<Callback<C, O>>,
    blocks: HashMap<Format, Option<Callback<C, O>>>,
    block_order: Vec<Format>,
    publish_formats: Vec<Format>,
    publish_block: Option<Callback<C, O>>,
}

impl<C, O> Response<C, O> {
    /// Create an empty response table.
    pub fn new() -> Self {
        Self {
            default: None,
            blocks: HashMap::new(),
            block_order: Vec::new(),
            publish_formats: Vec::new(),
            publish_block: None,
        }
    }

    /// The callback for the fallback `any` format, if any.
    pub fn default(&self) -> Option<&Callback<C, O>> {
        self.default.as_ref()
    }

    /// Set the callback for the fallback `any` format.
    pub fn set_default(&mut self, callback: Callback<C, O>) -> &Callback<C, O> {
        self.default.insert(callback)
    }

    /// Remove the default callback, returning it.
    ///
    /// Dispatch still offers `any` afterwards, just without a callback.
    pub fn clear_default(&mut self) -> Option<Callback<C, O>> {
        self.default.take()
    }

    /// Publish one or more formats under the shared publish callback.
    ///
    /// Formats already published keep their position. Supplying a callback
    /// replaces the shared one for every published format. Without a
    /// callback, an earlier one must already be on record; otherwise the
    /// table is left untouched and [`ConfigError::MissingPublishCallback`]
    /// is returned.
    pub fn publish<I>(
        &mut self,
        formats: I,
        callback: Option<Callback<C, O>>,
    ) -> Result<&Callback<C, O>, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<Format>,
    {
        let formats: Vec<Format> = formats.into_iter().map(Into::into).collect();

        let callback = match (callback, &self.publish_block) {
            (Some(callback), _) => callback,
            (None, Some(existing)) => existing.clone(),
            (None, None) => return Err(ConfigError::MissingPublishCallback { formats }),
        };

        for format in formats {
            if !self.publish_formats.contains(&format) {
                self.publish_formats.push(format);
            }
        }

        Ok(&*self.publish_block.insert(callback))
    }

    /// The published formats, in publication order.
    pub fn publish_formats(&self) -> &[Format] {
        &self.publish_formats
    }

    /// The callback shared by all published formats.
    pub fn publish_block(&self) -> Option<&Callback<C, O>> {
        self.publish_block.as_ref()
    }

    /// Register an arbitrary format.
    ///
    /// Without a callback the format is still recorded, meaning "known
    /// format, render it the framework's default way". A callback stored
    /// earlier is kept in that case.
    pub fn register_format(
        &mut self,
        format: impl Into<Format>,
        callback: Option<Callback<C, O>>,
    ) -> Option<&Callback<C, O>> {
        let format = format.into();
        if !self.blocks.contains_key(&format) {
            self.block_order.push(format.clone());
        }

        let slot = self.blocks.entry(format).or_insert(None);
        if let Some(callback) = callback {
            *slot = Some(callback);
        }
        slot.as_ref()
    }

    /// The callback registered for a custom format.
    pub fn format(&self, format: &str) -> Option<&Callback<C, O>> {
        self.blocks.get(format).and_then(Option::as_ref)
    }

    /// Whether a custom format has been registered, with or without a callback.
    pub fn contains_format(&self, format: &str) -> bool {
        self.blocks.contains_key(format)
    }

    /// Custom formats and their callbacks, in first-registration order.
    pub fn each_format(&self) -> impl Iterator<Item = (&Format, Option<&Callback<C, O>>)> + '_ {
        self.block_order.iter().map(move |format| {
            let callback = self.blocks.get(format).and_then(Option::as_ref);
            (format, callback)
        })
    }

    /// Published formats paired with the shared publish callback.
    pub fn each_published(&self) -> impl Iterator<Item = (&Format, &Callback<C, O>)> + '_ {
        self.publish_block
            .iter()
            .flat_map(move |callback| self.publish_formats.iter().map(move |f| (f, callback)))
    }

    /// Whether nothing at all has been configured.
    pub fn is_empty(&self) -> bool {
        self.default.is_none()
            && self.block_order.is_empty()
            && self.publish_formats.is_empty()
            && self.publish_block.is_none()
    }
}

impl<C, O> Default for Response<C, O> {
    fn default() -> Self {
        Self::new()
    }
}

// Containers are duplicated, callbacks are shared handles to immutable
// functions. Reassigning anything on the clone leaves the original alone.
impl<C, O> Clone for Response<C, O> {
    fn clone(&self) -> Self {
        Self {
            default: self.default.clone(),
            blocks: self.blocks.clone(),
            block_order: self.block_order.clone(),
            publish_formats: self.publish_formats.clone(),
            publish_block: self.publish_block.clone(),
        }
    }
}

impl<C, O> fmt::Debug for Response<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("default", &self.default.is_some())
            .field("formats", &self.block_order)
            .field("publish_formats", &self.publish_formats)
            .field("publish_block", &self.publish_block.is_some())
            .finish()
    }
}
