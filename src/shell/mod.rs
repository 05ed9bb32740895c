// Composition root.
//
// Responsibilities:
// - Read config from flags and environment.
// - Wire the HTTP product store into the catalog controller for the console.
// - Wire the in-memory repository into the development products API.

pub mod config;
pub mod http;
pub mod state;
