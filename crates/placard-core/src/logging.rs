//! Logging facilities for Placard.
//!
//! Placard instruments with the `tracing` crate. To see logs, install a
//! tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Container mutations are logged at `trace` level, resolver hops at `trace`,
//! and suppressed visibility requests at `debug`. Use the constants in
//! [`targets`] with `tracing` filter directives to narrow output to one
//! subsystem, e.g. `RUST_LOG=placard::resolve=trace`.

/// Span names used throughout Placard for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Resource-text resolution span.
    pub const RESOLVE: &str = "placard::resolve";
    /// Container lifecycle span.
    pub const CONTAINER: &str = "placard::container";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "placard_core";
    /// Container tree target.
    pub const CONTAINER: &str = "placard_core::container";
    /// Resource catalog target.
    pub const CATALOG: &str = "placard_i18n::catalog";
    /// Catalog store target.
    pub const STORE: &str = "placard_i18n::store";
    /// Resource-text resolver target.
    pub const RESOLVE: &str = "placard::resolve";
    /// Status message control target.
    pub const MESSAGE: &str = "placard::message";
}
