pub mod csv;

pub use csv::{write_sweep_history, write_sweep_history_file, SweepRecord};
