//! Example wiring an application through bootstrap and shutdown
//!
//! ```bash
//! cargo run --example lifecycle
//! ```

use service_container::{Container, DiError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Settings {
    database_url: String,
    pool_size: usize,
}

struct Pool {
    url: String,
    size: usize,
    open: AtomicUsize,
}

struct Mailer {
    pool: Arc<Pool>,
}

struct ReportJob {
    id: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    println!("=== Service Container Lifecycle Demo ===\n");

    let container = Container::builder().version("2.0.0").build();

    container.instance(Settings {
        database_url: "postgres://localhost/app".into(),
        pool_size: 8,
    })?;

    // Registered before its dependency; resolution happens at build time
    container.register(|c| {
        println!("  [App] Building mailer");
        Ok(Mailer {
            pool: c.resolve::<Pool>()?,
        })
    })?;

    container.register(|c| {
        let settings = c.resolve::<Settings>()?;
        println!("  [App] Opening pool to {}", settings.database_url);
        Ok(Pool {
            url: settings.database_url.clone(),
            size: settings.pool_size,
            open: AtomicUsize::new(settings.pool_size),
        })
    })?;

    let jobs = Arc::new(AtomicUsize::new(0));
    let next = Arc::clone(&jobs);
    container.register_deferred(move |_| {
        Ok(ReportJob {
            id: next.fetch_add(1, Ordering::SeqCst),
        })
    })?;

    // Two pools under explicit names
    container.register_named("replica", |_| {
        Ok(Pool {
            url: "postgres://replica/app".into(),
            size: 2,
            open: AtomicUsize::new(2),
        })
    })?;

    container.register_setup(|c| {
        let pool = c.resolve::<Pool>()?;
        println!("  [Setup] Running migrations on {} ({} connections)", pool.url, pool.size);
        Ok(())
    });

    container.register_shutdown(|c| {
        let pool = c.resolve::<Pool>()?;
        pool.open.store(0, Ordering::SeqCst);
        println!("  [Shutdown] Closed primary pool");
        Ok(())
    });

    container.bootstrap()?;
    println!("\nBootstrapped: {}", container.is_bootstrapped());
    println!("Version: {:?}", container.version().map(|v| v.to_string()));
    println!("Registered: {:?}\n", container.identities());

    let mailer = container.resolve::<Mailer>()?;
    let pool = container.resolve::<Pool>()?;
    assert!(Arc::ptr_eq(&mailer.pool, &pool));

    let replica = container.resolve_named::<Pool>("replica")?;
    println!("Replica pool: {} ({} connections)", replica.url, replica.size);

    // Wrong type under a known name
    match container.resolve_named::<Mailer>("replica") {
        Err(err @ DiError::TypeMismatch { .. }) => println!("Expected error: {err}"),
        other => println!("Unexpected: {:?}", other.map(|_| ())),
    }

    // Deferred: cached on first resolve, fresh() always builds anew
    let first = container.resolve::<ReportJob>()?;
    let second = container.resolve::<ReportJob>()?;
    let fresh = container.fresh::<ReportJob>()?;
    println!(
        "\nReport jobs: cached {} / {}, fresh {}",
        first.id, second.id, fresh.id
    );

    container.shutdown()?;
    println!("\nOpen connections after shutdown: {}", pool.open.load(Ordering::SeqCst));

    println!("\n=== Demo Complete ===");
    Ok(())
}
