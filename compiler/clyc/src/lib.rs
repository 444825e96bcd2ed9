//! Cly driver.
//!
//! Thin I/O around the front-end crates: read input, cut it into units,
//! parse them (in parallel when there is more than one) and render the
//! results. The `cly` binary in `main.rs` is only argument dispatch.

pub mod commands;
pub mod config;
mod error;
pub mod input;
pub mod pipeline;

pub use config::{DriverConfig, OutputFormat, ParseInvocation, UnitMode};
pub use error::DriverError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, once.
///
/// Does nothing unless `CLY_LOG` or `RUST_LOG` is set; `CLY_LOG` wins when
/// both are. The value is an `EnvFilter` directive such as
/// `cly_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let directives = std::env::var("CLY_LOG").or_else(|_| std::env::var("RUST_LOG"));
        if let Ok(directives) = directives {
            let filter = EnvFilter::new(directives);
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
