// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, friend-graphs authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

use friend_graphs::graph::SocialGraph;
use friend_graphs::stats::GraphStats;
use time::macros::datetime;

use crate::util::alice_and_bob;
use crate::util::tangle;

#[test]
fn counts_people_and_friendships() {
    let (graph, people) = tangle();
    let stats = GraphStats::of(&graph);
    assert_eq!(stats.people, 5);
    assert_eq!(stats.friendships, 6);
    assert_eq!(stats.self_friendships, 0);
    assert_eq!(stats.friend_counts.frequency(&3), 3);
    assert_eq!(stats.friend_counts.frequency(&2), 1);
    assert_eq!(stats.friend_counts.frequency(&1), 1);
    assert_eq!(stats.friend_counts.quantiles(2), vec![&1, &3, &3]);

    let from_e = GraphStats::reachable_from(&graph, people[4]);
    assert_eq!(from_e.people, 5);
    assert_eq!(from_e.friendships, 6);
}

#[test]
fn counts_self_friendships_once() {
    let mut graph = SocialGraph::new();
    let narcissus = graph.add_person("Narcissus", datetime!(1990-01-01 0:00));
    let echo = graph.add_person("Echo", datetime!(1990-02-02 0:00));
    graph.befriend(narcissus, narcissus);
    graph.befriend(narcissus, echo);
    let stats = GraphStats::of(&graph);
    assert_eq!(stats.people, 2);
    assert_eq!(stats.self_friendships, 1);
    assert_eq!(stats.friendships, 2);
}

#[test]
fn only_counts_reachable_people() {
    let (mut graph, alice, _) = alice_and_bob();
    graph.add_person("Loner", datetime!(1980-02-02 0:00));
    let stats = GraphStats::reachable_from(&graph, alice);
    assert_eq!(stats.people, 2);
    assert_eq!(stats.friendships, 1);
    assert_eq!(GraphStats::of(&graph).people, 3);
    assert_eq!(GraphStats::of(&graph).friend_counts.frequency(&0), 1);
}
