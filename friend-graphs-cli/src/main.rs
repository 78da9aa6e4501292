// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, friend-graphs authors.
// Licensed under either of Apache License, Version 2.0, or MIT license, at your option.
// Please see the LICENSE-APACHE or LICENSE-MIT files in this distribution for license details.
// ------------------------------------------------------------------------------------------------

//! Command-line tool for friend graph documents.
//!
//! Reads and writes the JSON documents produced by `friend_graphs::serde`: it can check that a
//! document describes a complete graph, rewrite it in canonical form, and summarize it.

use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use friend_graphs::arena::Handle;
use friend_graphs::graph::Person;
use friend_graphs::graph::SocialGraph;
use friend_graphs::serde::SerializedGraph;
use friend_graphs::stats::GraphStats;
use log::info;
use log::warn;
use time::macros::datetime;

#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Log more details; repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a small sample graph, then decode it again
    Demo {
        /// Write the encoded document here instead of to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check that a document describes a complete graph
    Check {
        /// Document to check
        file: PathBuf,
    },
    /// Rewrite a document with canonical field names and sequential ids
    Normalize {
        /// Document to rewrite
        file: PathBuf,
        /// Write the result here instead of to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Summarize the people and friendships in a document
    Stats {
        /// Document to summarize
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Command::Demo { output } => demo(output.as_deref()),
        Command::Check { file } => check(&file),
        Command::Normalize { file, output } => normalize(&file, output.as_deref()),
        Command::Stats { file } => stats(&file),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_document(path: &Path) -> Result<SerializedGraph> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    SerializedGraph::from_reader(BufReader::new(file))
        .with_context(|| format!("Cannot read {}", path.display()))
}

fn load_document(path: &Path) -> Result<(SerializedGraph, SocialGraph, Handle<Person>)> {
    let serialized = read_document(path)?;
    let (graph, root) = serialized
        .to_graph()
        .with_context(|| format!("Cannot load {}", path.display()))?;
    info!("Loaded {} people from {}", graph.len(), path.display());
    Ok((serialized, graph, root))
}

fn write_document(serialized: &SerializedGraph, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serialized.to_writer(&mut writer)?;
            writeln!(writer)?;
            writer.flush()?;
            info!("Wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            serialized.to_writer(&mut writer)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn demo(output: Option<&Path>) -> Result<()> {
    let mut graph = SocialGraph::new();
    let alice = graph.add_person("Alice", datetime!(2000-01-01 0:00));
    let bob = graph.add_person("Bob", datetime!(2002-05-05 0:00));
    graph.befriend(alice, bob);

    let serialized = SerializedGraph::from_graph(&graph, alice);
    write_document(&serialized, output)?;

    let (copy, root) = serialized.to_graph()?;
    let friends = copy
        .friends(root)
        .map(|friend| copy[friend].name())
        .collect::<Vec<_>>();
    info!(
        "Decoded {} with {} friend(s): {}",
        copy[root].name(),
        friends.len(),
        friends.join(", ")
    );
    Ok(())
}

fn check(path: &Path) -> Result<()> {
    let (serialized, graph, root) = load_document(path)?;
    let asymmetric = serialized.asymmetric_links();
    for (a, b) in &asymmetric {
        warn!("{} lists {} as a friend, but not vice versa", a, b);
    }
    let reachable = graph.reachable_from(root).len();
    if reachable < graph.len() {
        warn!(
            "{} of {} people are not reachable from the root",
            graph.len() - reachable,
            graph.len()
        );
    }
    println!(
        "{}: {} people, root {}, {} one-sided friendship(s)",
        path.display(),
        graph.len(),
        graph[root].name(),
        asymmetric.len()
    );
    Ok(())
}

fn normalize(path: &Path, output: Option<&Path>) -> Result<()> {
    let (_, graph, root) = load_document(path)?;
    write_document(&SerializedGraph::from_graph(&graph, root), output)
}

fn stats(path: &Path) -> Result<()> {
    let (_, graph, root) = load_document(path)?;
    let stats = GraphStats::reachable_from(&graph, root);
    println!("people:           {}", stats.people);
    println!("friendships:      {}", stats.friendships);
    println!("self-friendships: {}", stats.self_friendships);
    println!("friendless:       {}", stats.friend_counts.frequency(&0));
    let quartiles = stats
        .friend_counts
        .quantiles(4)
        .into_iter()
        .map(|count| count.to_string())
        .collect::<Vec<_>>();
    if !quartiles.is_empty() {
        println!("friends per person (min, q1, median, q3, max): {}", quartiles.join(", "));
    }
    Ok(())
}
