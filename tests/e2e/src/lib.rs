//! Browser-level tests for the portfolio site.
//!
//! Every test builds and starts the `web` server, so they are `#[ignore]`d by
//! default: run them with `cargo test -p e2e -- --ignored` on a machine with Chrome.

pub mod browser;
pub mod test_server;
