// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, friend-graphs authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Defines the structure of a social graph.
//!
//! A [`SocialGraph`][] owns every [`Person`][] in it. People refer to their friends using
//! [`Handle<Person>`][Handle]s into the graph, never by owning them, so friend cycles don't
//! turn into reference cycles.
//!
//! The friend relation is symmetric: if Alice is in Bob's friend list, Bob is in Alice's.
//! [`SocialGraph::befriend`][] is the only way to create an edge, and it always writes both
//! sides.
//!
//! ```ignore
//! use friend_graphs::graph::SocialGraph;
//! use time::macros::datetime;
//!
//! let mut graph = SocialGraph::new();
//! let alice = graph.add_person("Alice", datetime!(2000-01-01 0:00));
//! let bob = graph.add_person("Bob", datetime!(2002-05-05 0:00));
//! graph.befriend(alice, bob);
//! assert!(graph.are_friends(bob, alice));
//! ```

use std::ops::Index;

use time::PrimitiveDateTime;

use crate::arena::Arena;
use crate::arena::Handle;

/// One person in a social graph.
#[derive(Clone, Debug)]
pub struct Person {
    name: String,
    born_in: PrimitiveDateTime,
    friends: Vec<Handle<Person>>,
}

impl Person {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn born_in(&self) -> PrimitiveDateTime {
        self.born_in
    }

    /// Returns this person's friends, in the order the friendships were made.
    pub fn friends(&self) -> &[Handle<Person>] {
        &self.friends
    }

    pub fn has_friend(&self, other: Handle<Person>) -> bool {
        self.friends.contains(&other)
    }

    pub fn friend_count(&self) -> usize {
        self.friends.len()
    }
}

/// Contains all of the people and friendships in a social graph.
#[derive(Default)]
pub struct SocialGraph {
    people: Arena<Person>,
}

impl SocialGraph {
    /// Creates a new, empty social graph.
    pub fn new() -> SocialGraph {
        SocialGraph::default()
    }

    /// Adds a new person with no friends, returning a handle to it.
    ///
    /// Every call creates a distinct person, even if another person with the same name and birth
    /// date already exists.
    pub fn add_person<S: Into<String>>(
        &mut self,
        name: S,
        born_in: PrimitiveDateTime,
    ) -> Handle<Person> {
        self.people.add(Person {
            name: name.into(),
            born_in,
            friends: Vec::new(),
        })
    }

    /// Makes two people friends with each other.
    ///
    /// Returns `false` if they already were, in which case nothing changes.  A person can be
    /// their own friend; they are then listed once in their own friend list.
    pub fn befriend(&mut self, a: Handle<Person>, b: Handle<Person>) -> bool {
        if a == b {
            let person = &mut self.people[a];
            if person.has_friend(a) {
                return false;
            }
            person.friends.push(a);
            return true;
        }

        let (left, right) = self.people.get_pair_mut(a, b);
        let added_left = !left.has_friend(b);
        if added_left {
            left.friends.push(b);
        }
        let added_right = !right.has_friend(a);
        if added_right {
            right.friends.push(a);
        }
        added_left || added_right
    }

    /// Returns whether two people are friends.
    pub fn are_friends(&self, a: Handle<Person>, b: Handle<Person>) -> bool {
        self.people[a].has_friend(b)
    }

    /// Returns an iterator over the friends of a person.
    pub fn friends(&self, person: Handle<Person>) -> impl Iterator<Item = Handle<Person>> + '_ {
        self.people[person].friends.iter().copied()
    }

    /// Returns an iterator over every person in the graph, in the order they were added.
    pub fn iter_people(&self) -> impl Iterator<Item = Handle<Person>> {
        self.people.iter_handles()
    }

    /// Returns the people reachable from `start` through friendships, including `start` itself.
    /// The result is in breadth-first order.
    pub fn reachable_from(&self, start: Handle<Person>) -> Vec<Handle<Person>> {
        let mut seen = vec![false; self.people.len()];
        let mut result = vec![start];
        seen[start.as_usize()] = true;
        let mut next = 0;
        while next < result.len() {
            let current = result[next];
            next += 1;
            for friend in self.friends(current) {
                if !seen[friend.as_usize()] {
                    seen[friend.as_usize()] = true;
                    result.push(friend);
                }
            }
        }
        result
    }

    /// Returns whether `handle` refers to a person in this graph.
    pub fn contains(&self, handle: Handle<Person>) -> bool {
        self.people.contains(handle)
    }

    /// Returns the number of people in the graph.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl Index<Handle<Person>> for SocialGraph {
    type Output = Person;
    #[inline(always)]
    fn index(&self, handle: Handle<Person>) -> &Person {
        &self.people[handle]
    }
}
