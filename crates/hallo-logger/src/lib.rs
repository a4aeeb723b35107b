//! Leveled, colored console logging.
//!
//! ```no_run
//! use hallo_logger::{Logger, LoggerConfig};
//!
//! let logger = Logger::new(LoggerConfig::default().with_prefix("worker"));
//! logger.info("listening on :8080");
//! logger.warn(serde_json::json!({ "queue": "mail", "backlog": 120 }));
//! ```

pub mod banner;
pub mod clock;
pub mod error;
pub mod format;
pub mod logger;
pub mod logging;
pub mod models;
pub mod process;

pub use banner::{app_ready, spawn_app_ready, BannerPrinter, PackageMetadata};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{HalloError, Result};
pub use format::{Colorizer, Inspector, LineFormatter};
pub use logger::Logger;
pub use logging::{init, init_default, init_from_args};
pub use models::{LogLevel, LogMessage, LoggerConfig, StartupOptions};
pub use process::{CurrentProcess, FixedProcess, ProcessIdentity};
