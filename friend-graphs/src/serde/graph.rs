// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, friend-graphs authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

use std::collections::HashMap;
use std::io;
use std::io::Read;
use std::io::Write;

use ::serde::Deserialize;
use ::serde::Deserializer;
use ::serde::Serialize;
use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;
use log::trace;
use serde_json::ser::Formatter;
use serde_json::ser::PrettyFormatter;
use time::PrimitiveDateTime;

use crate::arena::Handle;
use crate::graph::Person;
use crate::graph::SocialGraph;

use super::timestamp;
use super::Error;
use super::GraphCorrupt;

/// A flat, acyclic description of the people reachable from a root person.
///
/// Records are keyed by an id that is only meaningful within one document. Friendships are
/// expressed as lists of those ids, so a cyclic graph becomes a plain table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedGraph {
    /// The id of the person the graph was serialized from.
    #[serde(deserialize_with = "deserialize_id")]
    pub root: String,
    /// Every record, in the order the people were visited.
    #[serde(alias = "data")]
    pub nodes: IndexMap<String, SerializedRecord>,
}

/// One person, with their friends referred to by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedRecord {
    #[serde(alias = "n", alias = "_name")]
    pub name: String,
    /// ISO-8601 date-time text, e.g. `2010-10-10T00:00:00`.
    #[serde(alias = "d", alias = "_born_in")]
    pub born_in: String,
    #[serde(
        alias = "f",
        alias = "_friends",
        alias = "friends_ids",
        deserialize_with = "deserialize_ids"
    )]
    pub friends: Vec<String>,
}

/// An id as it appears in a document. Ids are written as strings, but integers are read too,
/// and are turned into their decimal text so that they match the record keys.
#[derive(Deserialize)]
#[serde(untagged, expecting = "a string or integer id")]
enum AnyId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl From<AnyId> for String {
    fn from(id: AnyId) -> String {
        match id {
            AnyId::Text(text) => text,
            AnyId::Unsigned(n) => n.to_string(),
            AnyId::Signed(n) => n.to_string(),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(AnyId::deserialize(deserializer)?.into())
}

fn deserialize_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = Vec::<AnyId>::deserialize(deserializer)?;
    Ok(ids.into_iter().map(String::from).collect())
}

impl SerializedRecord {
    fn from_person(person: &Person, friends: Vec<String>) -> SerializedRecord {
        SerializedRecord {
            name: person.name().to_string(),
            born_in: timestamp::format(person.born_in()),
            friends,
        }
    }
}

//-------------------------------------------------------------------------------------------------
// Encoding

impl SerializedGraph {
    /// Serializes every person reachable from `root`.
    ///
    /// People are visited depth-first, exploring friends in the order they appear in each friend
    /// list, and each person is recorded exactly once. Ids are assigned `"0"`, `"1"`, ... in
    /// the order people are first encountered, so the same graph and root always produce the
    /// same document.
    pub fn from_graph(graph: &SocialGraph, root: Handle<Person>) -> SerializedGraph {
        let mut walker = GraphWalker::new(graph);
        let root_id = walker.id_of(root);
        walker.walk(root);
        debug!(
            "Serialized {} people reachable from {:?}",
            walker.nodes.len(),
            root
        );
        SerializedGraph {
            root: root_id,
            nodes: walker.nodes,
        }
    }
}

struct GraphWalker<'a> {
    graph: &'a SocialGraph,
    ids: HashMap<Handle<Person>, String>,
    nodes: IndexMap<String, SerializedRecord>,
}

impl<'a> GraphWalker<'a> {
    fn new(graph: &'a SocialGraph) -> GraphWalker<'a> {
        GraphWalker {
            graph,
            ids: HashMap::new(),
            nodes: IndexMap::new(),
        }
    }

    /// Returns the id of a person, assigning the next one if we haven't seen them yet.
    fn id_of(&mut self, person: Handle<Person>) -> String {
        let next = self.ids.len();
        self.ids
            .entry(person)
            .or_insert_with(|| next.to_string())
            .clone()
    }

    fn walk(&mut self, root: Handle<Person>) {
        let graph = self.graph;
        let mut stack = vec![root];
        while let Some(handle) = stack.pop() {
            let id = self.id_of(handle);
            if self.nodes.contains_key(&id) {
                continue;
            }
            let person = &graph[handle];
            let friends = person
                .friends()
                .iter()
                .map(|friend| self.id_of(*friend))
                .collect::<Vec<_>>();
            trace!("Visit {} {:?} -> {:?}", id, person.name(), friends);
            self.nodes
                .insert(id, SerializedRecord::from_person(person, friends));
            // Reversed, so that the first friend is popped (and visited) first.
            stack.extend(
                person
                    .friends()
                    .iter()
                    .rev()
                    .filter(|friend| !self.nodes.contains_key(&self.ids[*friend]))
                    .copied(),
            );
        }
    }
}

//-------------------------------------------------------------------------------------------------
// Decoding

/// A serialized graph whose references have all been checked.
struct Resolved {
    root: usize,
    born_in: Vec<PrimitiveDateTime>,
    friends: Vec<Vec<usize>>,
}

impl SerializedGraph {
    /// Loads the people and friendships of this document into `graph`, returning the handle of
    /// the root person.
    ///
    /// Every record becomes a new person, even if `graph` already contains someone with the same
    /// name and birth date. The whole document is checked before anything is added, so on error
    /// `graph` is left untouched.
    pub fn load_into(&self, graph: &mut SocialGraph) -> Result<Handle<Person>, Error> {
        let resolved = self.resolve()?;

        let mut handles = Vec::with_capacity(self.nodes.len());
        for (record, born_in) in self.nodes.values().zip(resolved.born_in) {
            handles.push(graph.add_person(record.name.as_str(), born_in));
        }

        let mut links = 0usize;
        for (index, friends) in resolved.friends.iter().enumerate() {
            for friend in friends {
                if graph.befriend(handles[index], handles[*friend]) {
                    trace!("Link {} <-> {}", index, friend);
                    links += 1;
                }
            }
        }

        debug!(
            "Loaded {} people and {} friendships",
            handles.len(),
            links
        );
        Ok(handles[resolved.root])
    }

    /// Loads this document into a new graph, returning it with the handle of the root person.
    pub fn to_graph(&self) -> Result<(SocialGraph, Handle<Person>), Error> {
        let mut graph = SocialGraph::new();
        let root = self.load_into(&mut graph)?;
        Ok((graph, root))
    }

    fn resolve(&self) -> Result<Resolved, Error> {
        let root = self
            .nodes
            .get_index_of(&self.root)
            .ok_or_else(|| GraphCorrupt::MissingRoot {
                root: self.root.clone(),
            })?;

        let mut born_in = Vec::with_capacity(self.nodes.len());
        let mut friends = Vec::with_capacity(self.nodes.len());
        for (id, record) in &self.nodes {
            born_in.push(timestamp::parse(&record.born_in)?);
            let indices = record
                .friends
                .iter()
                .map(|friend| {
                    self.nodes
                        .get_index_of(friend)
                        .ok_or_else(|| GraphCorrupt::DanglingFriend {
                            record: id.clone(),
                            friend: friend.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            friends.push(indices);
        }

        Ok(Resolved {
            root,
            born_in,
            friends,
        })
    }

    /// Returns the pairs `(a, b)` where record `a` lists `b` as a friend, but `b` doesn't list
    /// `a`.
    ///
    /// Loading completes such friendships on both sides. Friends that have no record are not
    /// reported here; loading rejects them.
    pub fn asymmetric_links(&self) -> Vec<(String, String)> {
        self.nodes
            .iter()
            .flat_map(|(id, record)| {
                record
                    .friends
                    .iter()
                    .filter(move |friend| {
                        self.nodes
                            .get(friend.as_str())
                            .map_or(false, |other| !other.friends.contains(id))
                    })
                    .map(move |friend| (id.clone(), friend.clone()))
            })
            .unique()
            .collect()
    }
}

//-------------------------------------------------------------------------------------------------
// JSON documents

impl SerializedGraph {
    /// Renders this graph as a pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.to_writer(&mut buffer)?;
        // AsciiFormatter never writes anything but ASCII.
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Writes this graph as a pretty-printed JSON document, indented by two spaces, with every
    /// non-ASCII character escaped as `\uXXXX`.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut serializer = serde_json::Serializer::with_formatter(writer, AsciiFormatter::new());
        Ok(self.serialize(&mut serializer)?)
    }

    /// Parses a JSON document.  References are not checked until the graph is loaded.
    pub fn from_json(json: &str) -> Result<SerializedGraph, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<SerializedGraph, Error> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Pretty-prints like [`PrettyFormatter`][], but escapes every character outside printable
/// ASCII, writing characters beyond the basic multilingual plane as UTF-16 surrogate pairs.
struct AsciiFormatter {
    pretty: PrettyFormatter<'static>,
}

impl AsciiFormatter {
    fn new() -> AsciiFormatter {
        AsciiFormatter {
            pretty: PrettyFormatter::new(),
        }
    }
}

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for (start, c) in fragment.char_indices() {
            if (' '..='~').contains(&c) {
                writer.write_all(&fragment.as_bytes()[start..start + 1])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object_value(writer)
    }
}
