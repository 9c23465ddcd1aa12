pub mod config;
pub mod entry;
pub mod error;
pub mod finalize;
pub mod outcome_gen;
pub mod persist;
pub mod qualification;
pub mod ranking;
pub mod seed_data;
pub mod standings;
pub mod state;
