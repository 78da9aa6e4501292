// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, friend-graphs authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! # Friend graphs: serializing cyclic social graphs
//!
//! A friend graph is a set of people connected by a symmetric friend relation. Friendships
//! form cycles: Alice is Bob's friend and Bob is Alice's, and longer chains of friends can lead
//! back to where they started. That makes friend graphs awkward to serialize naively, since
//! following friend references never terminates, and awkward to deserialize naively, since
//! materializing each reference separately duplicates people who are shared.
//!
//! This crate stores a graph in an [`arena`][], where each person is owned by the
//! [`SocialGraph`][graph::SocialGraph] and friendships are [handles][arena::Handle] rather than
//! owning pointers. The [`serde`][] module flattens the people reachable from a root into a
//! table of records keyed by per-document ids, and rebuilds a graph from such a table in two
//! passes: first every person is allocated, then every friendship is linked. Shared and
//! cyclic friendships come back exactly once.
//!
//! ## Quick Example
//!
//! ```ignore
//! use friend_graphs::graph::SocialGraph;
//! use friend_graphs::serde::SerializedGraph;
//! use time::macros::datetime;
//!
//! let mut graph = SocialGraph::new();
//! let alice = graph.add_person("Alice", datetime!(2000-01-01 0:00));
//! let bob = graph.add_person("Bob", datetime!(2002-05-05 0:00));
//! graph.befriend(alice, bob);
//!
//! let document = SerializedGraph::from_graph(&graph, alice).to_json()?;
//!
//! let (copy, root) = SerializedGraph::from_json(&document)?.to_graph()?;
//! assert_eq!(copy[root].name(), "Alice");
//! let bob = copy[root].friends()[0];
//! assert_eq!(copy[bob].friends(), &[root]);
//! ```

pub mod arena;
pub mod graph;
pub mod serde;
pub mod stats;
