use std::fs::File;

use checktree::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("catalog.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = TreeConfig::new(Mode::Hierarchical)
        .show_partially_selected()
        .defaults_enabled(true);

    // category -> group -> item
    let store = TreeStore::with_nodes(
        config,
        [
            Node::new("food", "Food").selected_by_default(true),
            Node::new("fruit", "Fruit").parent("food").expanded(true),
            Node::new("apple", "Apple")
                .parent("fruit")
                .selected_by_default(true),
            Node::new("pear", "Pear").parent("fruit"),
            Node::new("drinks", "Drinks"),
            Node::new("juice", "Juice").parent("drinks"),
            Node::new("orange", "Orange")
                .parent("juice")
                .selected_by_default(true),
        ],
    );

    for (id, outcome) in store.activate_all() {
        println!("{id:>8}: {outcome:?}");
    }

    println!();
    for id in store.ids() {
        if let Some(presentation) = store.presentation(&id) {
            let pad = presentation.padding_left.unwrap_or(0) as usize / 10;
            println!(
                "{:pad$}{:<10} [{}] {:?}",
                "",
                presentation.row_id,
                presentation.classes,
                presentation.aria.to_pairs()
            );
        }
    }

    for event in store.take_events() {
        println!("{}", serde_json::to_string(&event).unwrap_or_default());
    }

    Ok(())
}
