//! Core engine for randomized, schema-shaped document generation.
//!
//! This crate provides everything needed to declare a document shape once
//! and mass-produce varied instances of it, including:
//!
//! - [`Field`] - A value generator with presence, null and blank modifiers
//! - [`Schema`] / [`SchemaMap`] - Named, nestable document shapes
//! - [`Overrides`] - Literal values pinned at `__`-separated paths
//! - [`DocumentSink`] - Where generated documents go ([`MemorySink`] built in)
//! - [`Seeder`] - Batched generate-and-insert runs with metrics
//!
//! # Architecture
//!
//! ```text
//! Schema (YAML or builder)      Overrides (test-controlled)
//!        │                             │
//!        ▼                             ▼
//!   Field::generate  ──────────► deep merge ──► Document
//!   (caller-seeded RNG)                            │
//!                                                  ▼
//!                                          DocumentSink (impl per store)
//! ```
//!
//! All randomness flows through a caller-supplied [`rand::Rng`], so seeding
//! the RNG makes whole runs reproducible.
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{Field, Overrides, Schema, SchemaMap};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let schema = Schema::new(
//!     "users",
//!     SchemaMap::new()
//!         .field("age", Field::integer_in(18, 80))
//!         .field("nickname", Field::string().optional(0.5))
//!         .group("profile", SchemaMap::new().field("bio", Field::string())),
//! );
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let overrides = Overrides::new().set("profile__bio", "hello");
//! let document = schema.generate_with(&mut rng, &overrides).unwrap();
//!
//! assert!((18..=80).contains(&document["age"].as_i64().unwrap()));
//! assert_eq!(
//!     document["profile"].as_object().unwrap()["bio"].as_str(),
//!     Some("hello"),
//! );
//! ```

pub mod error;
pub mod facade;
pub mod fields;
pub mod overrides;
pub mod schema;
pub mod seeder;
pub mod sink;
pub mod value;

// Re-exports for convenience
pub use error::{GenerateError, SchemaError, SeedError, SinkError};
pub use facade::{generate, generate_and_persist};
pub use fields::{Field, FieldKind, DEFAULT_CHARSET};
pub use overrides::{Overrides, PATH_SEPARATOR};
pub use schema::{Schema, SchemaEntry, SchemaMap, SchemaNode};
pub use seeder::{SeedMetrics, Seeder, DEFAULT_BATCH_SIZE};
pub use sink::{DocumentSink, Fixture, MemorySink};
pub use value::{Document, Value};
