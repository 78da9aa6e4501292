// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, friend-graphs authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Summaries of the shape of a social graph.
//!
//! [`GraphStats`][] counts people and friendships, and records how many friends each person has
//! in a [`FrequencyDistribution`][], which can report quantiles of the friend counts.

use std::collections::HashMap;
use std::hash::Hash;

use itertools::Itertools;

use crate::arena::Handle;
use crate::graph::Person;
use crate::graph::SocialGraph;

/// Tracks how often each distinct value has been recorded.
#[derive(Clone, Debug, Default)]
pub struct FrequencyDistribution<T>
where
    T: Eq + Hash,
{
    values: HashMap<T, usize>,
    total: usize,
}

impl<T: Eq + Hash> FrequencyDistribution<T> {
    pub fn record(&mut self, value: T) {
        *self.values.entry(value).or_default() += 1;
        self.total += 1;
    }

    /// Returns how often `value` was recorded.
    pub fn frequency(&self, value: &T) -> usize {
        self.values.get(value).copied().unwrap_or(0)
    }
}

impl<T: Eq + Hash + Ord> FrequencyDistribution<T> {
    /// Returns the `q + 1` values that split the recorded values into `q` equally sized groups,
    /// starting with the minimum and ending with the maximum. Returns an empty vector if `q` is
    /// zero or nothing was recorded.
    pub fn quantiles(&self, q: usize) -> Vec<&T> {
        if q == 0 || self.total == 0 {
            return vec![];
        }

        let mut it = self.values.iter().sorted_by_key(|e| e.0);
        let mut total_count = 0;
        let mut last_value;
        let mut result = Vec::with_capacity(q + 1);

        match it.next() {
            Some((value, count)) => {
                total_count += count;
                last_value = value;
            }
            None => return vec![],
        }
        result.push(last_value);

        for k in 1..=q {
            let limit = ((self.total as f64 * k as f64) / q as f64).round() as usize;
            while total_count < limit {
                match it.next() {
                    Some((value, count)) => {
                        total_count += count;
                        last_value = value;
                    }
                    None => break,
                }
            }
            result.push(last_value);
        }

        result
    }
}

/// Counts describing a set of people and the friendships between them.
#[derive(Clone, Debug, Default)]
pub struct GraphStats {
    pub people: usize,
    /// Distinct friendships; a friendship between two people is counted once.
    pub friendships: usize,
    /// People who are their own friend.
    pub self_friendships: usize,
    /// The number of friends of each person.
    pub friend_counts: FrequencyDistribution<usize>,
}

impl GraphStats {
    /// Computes statistics for every person in the graph.
    pub fn of(graph: &SocialGraph) -> GraphStats {
        GraphStats::of_people(graph, graph.iter_people())
    }

    /// Computes statistics for the people reachable from `root`.
    pub fn reachable_from(graph: &SocialGraph, root: Handle<Person>) -> GraphStats {
        GraphStats::of_people(graph, graph.reachable_from(root))
    }

    fn of_people<I>(graph: &SocialGraph, people: I) -> GraphStats
    where
        I: IntoIterator<Item = Handle<Person>>,
    {
        let mut stats = GraphStats::default();
        let mut endpoints = 0;
        for person in people {
            let friends = graph[person].friend_count();
            stats.people += 1;
            stats.friend_counts.record(friends);
            if graph[person].has_friend(person) {
                stats.self_friendships += 1;
                endpoints += friends - 1;
            } else {
                endpoints += friends;
            }
        }
        // Every other friendship appears in exactly two friend lists.
        stats.friendships = stats.self_friendships + endpoints / 2;
        stats
    }
}
