// Composition root for the registration fixture application and the
// browser harness.
//
// - Read config from environment.
// - Wire the in-memory account store into the registration handler.
// - Serve the fixture pages and API, standalone or on an ephemeral test
//   port.

pub mod config;
pub mod fixture;
pub mod http;
pub mod pages;
pub mod state;
