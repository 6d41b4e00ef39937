//! Example: keeping a live blocklist of phrases and scanning messages with it.
//!
//! Shows the online part of the automaton: patterns are added and removed
//! between scans without rebuilding anything.
//!
//! Run with: cargo run --example scan

use libaho::PatternAutomaton;

/// Returns the matches of one scan, sorted for stable output.
fn scan(automaton: &mut PatternAutomaton, message: &str) -> Vec<String> {
    let mut matches: Vec<String> = automaton.query(message).into_iter().collect();
    matches.sort();
    matches
}

fn main() {
    let mut blocklist = PatternAutomaton::new();
    for phrase in ["spam", "scam", "free money", "money"] {
        blocklist.add(phrase).unwrap();
    }

    let messages = [
        "claim your free money now",
        "this is not a scam, honest",
        "lunch at noon?",
    ];

    println!("Initial scan:");
    for message in messages {
        println!("  {message:?}: {:?}", scan(&mut blocklist, message));
    }

    // Edit the dictionary between scans.
    blocklist.delete("money");
    blocklist.add("honest").unwrap();
    blocklist.add("noon").unwrap();

    println!("\nAfter edits:");
    for message in messages {
        println!("  {message:?}: {:?}", scan(&mut blocklist, message));
    }

    let mut initials: Vec<char> = blocklist.root().children().map(|(c, _)| c).collect();
    initials.sort();
    println!("\nPhrases start with: {initials:?}");

    println!("\n{blocklist:?}");
    blocklist.rebuild();
    println!("after rebuild: {blocklist:?}");
}
