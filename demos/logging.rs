//! Example demonstrating logging capabilities
//!
//! Run with JSON logging (production):
//! ```bash
//! cargo run --example logging --features logging-json
//! ```
//!
//! Run with pretty logging (development):
//! ```bash
//! cargo run --example logging --features logging-pretty
//! ```

use service_container::{Container, DiError};

// Example services
#[allow(dead_code)]
struct Database {
    url: String,
}

#[allow(dead_code)]
struct UserService {
    name: String,
}

#[allow(dead_code)]
struct RequestContext {
    request_id: String,
}

fn main() {
    // Uses JSON if logging-json feature enabled, pretty if logging-pretty enabled
    service_container::logging::init();

    println!("=== Service Container Logging Demo ===\n");

    // Logs: "Creating new service container"
    let container = Container::builder().version("1.4.2").build();

    // Logs: "Registered service"
    container
        .register(|_| {
            Ok(Database {
                url: "postgres://localhost/mydb".into(),
            })
        })
        .unwrap();

    container
        .register(|c| {
            c.resolve::<Database>()?;
            Ok(UserService {
                name: "UserService".into(),
            })
        })
        .unwrap();

    // Logs the registration with activation = "deferred"
    container
        .register_deferred(|_| {
            println!("  [App] Deferred service being created...");
            Ok(RequestContext {
                request_id: "default".into(),
            })
        })
        .unwrap();

    // Logs: "Rejected duplicate registration"
    let duplicate = container.instance(Database {
        url: "sqlite::memory:".into(),
    });
    assert!(matches!(duplicate, Err(DiError::AlreadyRegistered { .. })));

    // Logs: "Bootstrapping service" for each eager service, then "Container bootstrapped"
    container.bootstrap().unwrap();

    // Logs: "Materializing service on first access"
    let _ctx = container.resolve::<RequestContext>().unwrap();

    // Logs: "Service not found in container"
    let missing = container.try_resolve::<i32>();
    assert!(missing.is_none());

    container.register_shutdown(|_| Err("connection reset".into()));

    // Logs a warning for the failing callback
    let _ = container.shutdown();

    println!("\n=== Demo Complete ===");
    println!("Check the log output above to see structured logging in action!");
    println!("\nTip: Use --features logging-json for production (JSON output)");
    println!("     Use --features logging-pretty for development (colorful output)");
}
