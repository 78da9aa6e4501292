// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, friend-graphs authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Serialization and deserialization support for social graphs.
//!
//! A [`SocialGraph`][] uses arena allocation and handle-based references internally, and its
//! friendships are cyclic, so it cannot be handed to `serde` directly. This module provides a
//! flat representation that can:
//!
//! - be produced from any person in a graph ([`SerializedGraph::from_graph`][])
//! - be written to and read from JSON
//! - be loaded back into a graph ([`SerializedGraph::load_into`][]), restoring every shared and
//!   cyclic friendship exactly once
//!
//! ## Document format
//!
//! ```json
//! {
//!   "root": "0",
//!   "nodes": {
//!     "0": { "name": "Alice", "born_in": "2000-01-01T00:00:00", "friends": ["1"] },
//!     "1": { "name": "Bob", "born_in": "2002-05-05T00:00:00", "friends": ["0"] }
//!   }
//! }
//! ```
//!
//! Ids are only meaningful inside one document: serializing the same graph twice produces the
//! same ids, but nothing relates them to ids in other documents. Ids are always written as
//! strings; integer ids in `root` and friend lists are read as their decimal text.
//!
//! Documents are indented by two spaces, and every character outside printable ASCII is
//! escaped as `\uXXXX`, so names like `Zoë` are written as `Zo\u00eb`. Timestamps are described
//! in [`timestamp`][].
//!
//! Older documents that use `data` instead of `nodes`, or `n`/`d`/`f`, `_name`/`_born_in`/
//! `_friends` or `friends_ids` as record fields, are read as well. Documents are always written
//! with the names shown above.
//!
//! ## Error Handling
//!
//! Loading fails with [`Error::GraphCorrupt`][] if the root or any listed friend has no record,
//! and with [`Error::Format`][] if the document or a timestamp can't be parsed. Nothing is added
//! to the target graph when loading fails.
//!
//! ```ignore
//! let json = friend_graphs::serde::encode(&graph, alice)?;
//! let (copy, root) = friend_graphs::serde::decode(&json)?;
//! assert_eq!(copy[root].name(), "Alice");
//! ```

mod error;
mod graph;
pub mod timestamp;

pub use error::*;
pub use graph::*;

use crate::arena::Handle;
use crate::graph::Person;
use crate::graph::SocialGraph;

/// Serializes the people reachable from `root` as a JSON document.
pub fn encode(graph: &SocialGraph, root: Handle<Person>) -> Result<String, Error> {
    SerializedGraph::from_graph(graph, root).to_json()
}

/// Parses a JSON document and loads it into a new graph.
pub fn decode(json: &str) -> Result<(SocialGraph, Handle<Person>), Error> {
    SerializedGraph::from_json(json)?.to_graph()
}
