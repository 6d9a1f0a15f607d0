pub mod assets;
pub mod data;
pub mod run;
pub mod select;

pub use data::{Sample, Statistics};
pub use run::{run, RunConfig, RunReport};
