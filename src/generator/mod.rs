mod runner;

pub use runner::{run_generation, GenerationReport, RunOptions, Sample, WriteFailure};
