// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, friend-graphs authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

use thiserror::Error;

/// Errors that can occur while reading or loading a serialized graph.
#[derive(Debug, Error)]
pub enum Error {
    /// The document is well-formed, but its records don't describe a complete graph.
    #[error(transparent)]
    GraphCorrupt(#[from] GraphCorrupt),
    /// The document, or some value in it, could not be parsed.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl Error {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Error::GraphCorrupt(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Error {
        Error::Format(FormatError::Document(source))
    }
}

/// A serialized graph refers to a record it doesn't contain.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphCorrupt {
    #[error("root `{root}` has no record")]
    MissingRoot { root: String },
    #[error("record `{record}` lists unknown friend `{friend}`")]
    DanglingFriend { record: String, friend: String },
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("malformed document: {0}")]
    Document(#[source] serde_json::Error),
    #[error("malformed timestamp `{value}`: {source}")]
    Timestamp {
        value: String,
        source: time::error::Parse,
    },
}
