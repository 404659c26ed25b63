// The five batch pipelines, one per process entry point.
//
// Each pipeline is a synchronous, stateless function of exactly two
// textual inputs; main.rs only reads stdin, dispatches here, and prints
// the result.

pub mod keywords;
pub mod plain;
pub mod projects;
pub mod skill_gap;
pub mod users;
