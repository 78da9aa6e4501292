// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, friend-graphs authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

use friend_graphs::serde::decode;
use friend_graphs::serde::Error;
use friend_graphs::serde::FormatError;
use friend_graphs::serde::GraphCorrupt;
use friend_graphs::serde::SerializedGraph;
use serde_json::json;
use time::macros::datetime;

use crate::util::alice_and_bob;
use crate::util::assert_no_duplicate_friends;
use crate::util::assert_symmetric;

fn document(value: serde_json::Value) -> SerializedGraph {
    serde_json::from_value(value).unwrap()
}

#[test]
fn can_decode_two_friends() {
    let serialized = document(json!({
        "root": "a",
        "nodes": {
            "a": { "name": "Alice", "born_in": "2000-01-01T00:00:00", "friends": ["b"] },
            "b": { "name": "Bob", "born_in": "2002-05-05T00:00:00", "friends": ["a"] },
        },
    }));
    let (graph, alice) = serialized.to_graph().unwrap();
    assert_eq!(graph.len(), 2);
    assert_eq!(graph[alice].name(), "Alice");
    assert_eq!(graph[alice].born_in(), datetime!(2000-01-01 0:00));
    assert_eq!(graph[alice].friend_count(), 1);
    let bob = graph[alice].friends()[0];
    assert_eq!(graph[bob].name(), "Bob");
    assert_eq!(graph[bob].born_in(), datetime!(2002-05-05 0:00));
    assert_eq!(graph[bob].friends(), &[alice]);
}

#[test]
fn rejects_missing_root() {
    let serialized = document(json!({
        "root": "nobody",
        "nodes": {
            "a": { "name": "Alice", "born_in": "2000-01-01T00:00:00", "friends": [] },
        },
    }));
    match serialized.to_graph() {
        Err(Error::GraphCorrupt(GraphCorrupt::MissingRoot { root })) => {
            assert_eq!(root, "nobody")
        }
        other => panic!("expected missing root, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn rejects_dangling_friends() {
    let serialized = document(json!({
        "root": "a",
        "nodes": {
            "a": { "name": "Alice", "born_in": "2000-01-01T00:00:00", "friends": ["b"] },
            "b": { "name": "Bob", "born_in": "2002-05-05T00:00:00", "friends": ["a", "ghost"] },
        },
    }));
    match serialized.to_graph() {
        Err(Error::GraphCorrupt(corrupt)) => assert_eq!(
            corrupt,
            GraphCorrupt::DanglingFriend {
                record: "b".to_string(),
                friend: "ghost".to_string(),
            }
        ),
        other => panic!("expected dangling friend, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn rejects_malformed_timestamps() {
    let serialized = document(json!({
        "root": "a",
        "nodes": {
            "a": { "name": "Alice", "born_in": "the first of January", "friends": [] },
        },
    }));
    match serialized.to_graph() {
        Err(Error::Format(FormatError::Timestamp { value, .. })) => {
            assert_eq!(value, "the first of January")
        }
        other => panic!("expected timestamp error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn rejects_malformed_documents() {
    for text in [
        "",
        "{",
        r#"{"root": "a"}"#,
        r#"{"root": "a", "nodes": {"a": {"name": "Alice"}}}"#,
        r#"{"root": true, "nodes": {}}"#,
        r#"{"root": "a", "nodes": {"a": {"name": "Alice", "born_in": "2000-01-01T00:00:00", "friends": [1.5]}}}"#,
    ] {
        let err = decode(text).err().expect("decoding should fail");
        assert!(err.is_format(), "{:?} gave {}", text, err);
        assert!(!err.is_corrupt());
    }
}

#[test]
fn reads_integer_ids() {
    let (graph, alice) = decode(
        r#"{
            "root": 0,
            "nodes": {
                "0": { "name": "Alice", "born_in": "2000-01-01T00:00:00", "friends": [1] },
                "1": { "name": "Bob", "born_in": "2002-05-05T00:00:00", "friends": [0] }
            }
        }"#,
    )
    .unwrap();
    assert_eq!(graph.len(), 2);
    assert_eq!(graph[alice].name(), "Alice");
    let bob = graph[alice].friends()[0];
    assert_eq!(graph[bob].name(), "Bob");
    assert_eq!(graph[bob].friends(), &[alice]);
}

#[test]
fn integer_ids_must_match_record_keys() {
    let serialized = document(json!({
        "root": 140234,
        "nodes": {
            "140234": { "name": "Alice", "born_in": "2000-01-01T00:00:00", "friends": [-7] },
        },
    }));
    assert_eq!(serialized.root, "140234");
    match serialized.to_graph() {
        Err(Error::GraphCorrupt(corrupt)) => assert_eq!(
            corrupt,
            GraphCorrupt::DanglingFriend {
                record: "140234".to_string(),
                friend: "-7".to_string(),
            }
        ),
        other => panic!("expected dangling friend, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn failed_load_leaves_graph_untouched() {
    let (mut graph, alice, bob) = alice_and_bob();
    let serialized = document(json!({
        "root": "x",
        "nodes": {
            "x": { "name": "Xavier", "born_in": "1980-01-01T00:00:00", "friends": ["y"] },
            "y": { "name": "Yolanda", "born_in": "1981-01-01T00:00:00", "friends": ["z"] },
        },
    }));
    assert!(serialized.load_into(&mut graph).unwrap_err().is_corrupt());
    assert_eq!(graph.len(), 2);
    assert_eq!(graph[alice].friends(), &[bob]);
    assert_eq!(graph[bob].friends(), &[alice]);
}

#[test]
fn load_adds_new_people_alongside_existing_ones() {
    let (mut graph, alice, _) = alice_and_bob();
    let serialized = SerializedGraph::from_graph(&graph, alice);
    let copy = serialized.load_into(&mut graph).unwrap();
    assert_eq!(graph.len(), 4);
    assert_ne!(copy, alice);
    assert_eq!(graph[copy].name(), "Alice");
    assert!(!graph.are_friends(copy, alice));
    assert!(graph.friends(copy).all(|friend| graph[friend].name() == "Bob"));
}

#[test]
fn completes_one_sided_friendships() {
    let serialized = document(json!({
        "root": "a",
        "nodes": {
            "a": { "name": "Alice", "born_in": "2000-01-01T00:00:00", "friends": ["b", "c"] },
            "b": { "name": "Bob", "born_in": "2002-05-05T00:00:00", "friends": [] },
            "c": { "name": "Carol", "born_in": "2003-03-03T00:00:00", "friends": ["a"] },
        },
    }));
    assert_eq!(
        serialized.asymmetric_links(),
        vec![("a".to_string(), "b".to_string())]
    );
    let (graph, alice) = serialized.to_graph().unwrap();
    assert_symmetric(&graph, alice);
    assert_eq!(graph.reachable_from(alice).len(), 3);
}

#[test]
fn links_each_pair_once() {
    let serialized = document(json!({
        "root": "a",
        "nodes": {
            "a": { "name": "Alice", "born_in": "2000-01-01T00:00:00", "friends": ["b", "b", "c"] },
            "b": { "name": "Bob", "born_in": "2002-05-05T00:00:00", "friends": ["a", "c", "a"] },
            "c": { "name": "Carol", "born_in": "2003-03-03T00:00:00", "friends": ["b", "a"] },
        },
    }));
    assert!(serialized.asymmetric_links().is_empty());
    let (graph, alice) = serialized.to_graph().unwrap();
    assert_no_duplicate_friends(&graph);
    assert_symmetric(&graph, alice);
    for person in graph.iter_people() {
        assert_eq!(graph[person].friend_count(), 2);
    }
}

#[test]
fn friends_follow_document_order() {
    let serialized = document(json!({
        "root": "a",
        "nodes": {
            "a": { "name": "Alice", "born_in": "2000-01-01T00:00:00", "friends": ["c", "b"] },
            "b": { "name": "Bob", "born_in": "2002-05-05T00:00:00", "friends": ["a"] },
            "c": { "name": "Carol", "born_in": "2003-03-03T00:00:00", "friends": ["a"] },
        },
    }));
    let (graph, alice) = serialized.to_graph().unwrap();
    let names = graph
        .friends(alice)
        .map(|friend| graph[friend].name())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Carol", "Bob"]);
}

#[test]
fn reads_legacy_field_names() {
    let documents = [
        json!({
            "root": "140",
            "nodes": {
                "140": { "n": "Ruslan", "d": "2000-01-01T00:00:00", "f": ["141"] },
                "141": { "n": "Ivan", "d": "2002-05-05T00:00:00", "f": ["140"] },
            },
        }),
        json!({
            "root": "140",
            "nodes": {
                "140": { "_name": "Ruslan", "_born_in": "2000-01-01T00:00:00", "_friends": ["141"] },
                "141": { "_name": "Ivan", "_born_in": "2002-05-05T00:00:00", "_friends": ["140"] },
            },
        }),
        json!({
            "root": "140",
            "data": {
                "140": { "name": "Ruslan", "born_in": "2000-01-01T00:00:00", "friends_ids": ["141"] },
                "141": { "name": "Ivan", "born_in": "2002-05-05T00:00:00", "friends_ids": ["140"] },
            },
        }),
    ];
    for value in documents {
        let (graph, root) = decode(&value.to_string()).unwrap();
        assert_eq!(graph[root].name(), "Ruslan");
        let friend = graph[root].friends()[0];
        assert_eq!(graph[friend].name(), "Ivan");
        assert_eq!(graph[friend].friends(), &[root]);
    }
}

#[test]
fn writes_canonical_field_names() {
    let serialized = document(json!({
        "root": "7",
        "data": {
            "7": { "n": "Solo", "d": "1999-09-09T00:00:00", "f": [] },
        },
    }));
    let value: serde_json::Value = serde_json::from_str(&serialized.to_json().unwrap()).unwrap();
    pretty_assertions::assert_eq!(
        value,
        json!({
            "root": "7",
            "nodes": { "7": { "name": "Solo", "born_in": "1999-09-09T00:00:00", "friends": [] } },
        })
    );
}

#[test]
fn reads_microsecond_timestamps() {
    let serialized = document(json!({
        "root": "a",
        "nodes": {
            "a": { "name": "Alice", "born_in": "2011-11-11T11:11:11.500000", "friends": [] },
        },
    }));
    let (graph, alice) = serialized.to_graph().unwrap();
    assert_eq!(graph[alice].born_in(), datetime!(2011-11-11 11:11:11.5));
}

#[test]
fn reads_space_separated_and_date_only_timestamps() {
    let serialized = document(json!({
        "root": "a",
        "nodes": {
            "a": { "name": "Alice", "born_in": "2000-01-01 08:15:00", "friends": ["b"] },
            "b": { "name": "Bob", "born_in": "2002-05-05", "friends": ["a"] },
        },
    }));
    let (graph, alice) = serialized.to_graph().unwrap();
    assert_eq!(graph[alice].born_in(), datetime!(2000-01-01 8:15));
    let bob = graph[alice].friends()[0];
    assert_eq!(graph[bob].born_in(), datetime!(2002-05-05 0:00));
}

#[test]
fn can_read_from_a_stream() {
    let text = r#"{"root": "a", "nodes": {"a": {"name": "Alice", "born_in": "2000-01-01T00:00:00", "friends": []}}}"#;
    let serialized = SerializedGraph::from_reader(text.as_bytes()).unwrap();
    assert_eq!(serialized.nodes.len(), 1);
    let mut written = Vec::new();
    serialized.to_writer(&mut written).unwrap();
    assert_eq!(
        SerializedGraph::from_reader(written.as_slice()).unwrap(),
        serialized
    );
}
