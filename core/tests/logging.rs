//! Global subscriber ownership.
//!
//! Kept in its own test binary: the process-wide dispatcher can only be set
//! once, so nothing else here may touch it.

use std::collections::HashMap;

use amadeus_core::{init_logging, Client, Configuration, LogLevel, Options};

#[test]
fn client_leaves_global_subscriber_to_the_application() {
    let options = Options::new()
        .set("client_id", "id")
        .set("client_secret", "secret")
        .set("log_level", "debug");
    let config = Configuration::resolve(&options, HashMap::new(), None).unwrap();

    // Building a client and a request must not claim the global dispatcher.
    let client = Client::new(config);
    client.build_get("/v1/x", &[("a", "1")], None);
    assert!(!tracing::dispatcher::has_been_set());

    // The application opts in explicitly.
    init_logging(LogLevel::Debug);
    assert!(tracing::dispatcher::has_been_set());
    assert!(tracing::enabled!(target: "my_app", tracing::Level::ERROR));
}
