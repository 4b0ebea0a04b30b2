//! Declarative shape-based pattern matching over dynamic values
//!
//! This library wraps a runtime value, classifies its shape once, and exposes
//! a small uniform set of inspection and dispatch operations over it. Calling
//! code replaces chains of `if let`/type checks with a handler map keyed by
//! value, variant tag or discriminant field.
//!
//! Five shapes are recognised:
//!
//! - `empty`: absent values (`None`, JSON `null`)
//! - `enum`: strings, numbers and booleans, keyed by their value
//! - `variant`: single-field records like `{"Circle": {"r": 2}}`, keyed by the field name
//! - `object`: any other record
//! - `discriminated`: a record viewed through a named field, e.g. `kind`
//!
//! # Example
//!
//! ```
//! use shape_match::{classify_json, Handlers};
//! use serde_json::json;
//!
//! # fn main() -> shape_match::Result<()> {
//! let shape = classify_json(json!({"Circle": {"r": 2}}))?;
//! let doubled = shape.match_with(
//!     Handlers::new()
//!         .on("Circle", |p| p["r"].as_i64().unwrap_or(0) * 2)
//!         .otherwise(|_| 0),
//! )?;
//! assert_eq!(doubled, 4);
//!
//! let event = classify_json(json!({"kind": "click", "x": 1, "y": 2}))?;
//! let label = event.match_on(
//!     "kind",
//!     Handlers::new()
//!         .on("click", |p| format!("click at {},{}", p["x"], p["y"]))
//!         .otherwise(|full| format!("unhandled {}", full["kind"])),
//! )?;
//! assert_eq!(label, "click at 1,2");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

// Re-export commonly used items
pub use classifier::{classify, classify_json, classify_serialize, Classifier, ClassifierBuilder};
pub use config::{ClassifierConfig, VariantTagPolicy};
pub use error::{MatchError, Result};
pub use pattern::{
    is_empty_payload, DiscriminatedMatcher, Dispatch, EmptyMatcher, EnumMatcher, Handlers, MatchReport,
    Matcher, ObjectMatcher, Shape, TagMatcher, VariantMatcher, DEFAULT_KEY,
};
pub use value::{RawValue, Record, Scalar};

/// Value classification
pub mod classifier;

/// Classifier configuration
pub mod config;

/// Error types
pub mod error;

/// Shape matchers and dispatch
pub mod pattern;

/// Raw input values and scalar tags
pub mod value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber with default settings
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}
