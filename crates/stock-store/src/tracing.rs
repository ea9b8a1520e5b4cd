//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter that writes to
//! stderr, hides the module prefix (`with_target(false)`) and honours `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info stockroom list     # committed changes
//! RUST_LOG=debug stockroom shell   # full request payloads
//! ```
//!
//! The store emits one event per operation with an `entity_type` field and the ID:
//!
//! ```text
//! INFO Created entity_type="Product" id=P-001 size=1
//! WARN Update failed entity_type="Product" id=P-001 error=Invalid price: must not be negative
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// `default_directive` is used when `RUST_LOG` is unset or unparsable. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
pub fn setup_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
