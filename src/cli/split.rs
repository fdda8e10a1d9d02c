use std::fs;

use crate::dataset::{self, shard};

pub fn run() {
    let input = dataset::source_path();
    if !input.exists() {
        eprintln!("Error: {} not found!", input.display());
        eprintln!("Make sure you've downloaded the dataset first.");
        std::process::exit(1);
    }

    let out_dir = dataset::shard_dir();
    if let Err(e) = fs::create_dir_all(&out_dir) {
        eprintln!("Failed to create {}: {}", out_dir.display(), e);
        std::process::exit(1);
    }

    if let Err(e) = shard::split_source(&input, &out_dir, dataset::SHARD_COUNT) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
