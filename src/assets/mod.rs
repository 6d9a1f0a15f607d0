// Each asset renders to a string, run.rs does the writing

pub mod comparison;
pub mod diagram;
pub mod slides;
pub mod table;
