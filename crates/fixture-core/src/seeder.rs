//! Batch seeding: generating documents and handing them to a sink.

use crate::error::SeedError;
use crate::overrides::Overrides;
use crate::schema::Schema;
use crate::sink::DocumentSink;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default number of documents per insert batch.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Metrics from a seeding run.
#[derive(Debug, Clone, Default)]
pub struct SeedMetrics {
    /// Number of documents handed to the sink.
    pub documents_inserted: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating documents.
    pub generation_duration: Duration,
    /// Time spent inside the sink.
    pub insert_duration: Duration,
    /// Number of batches executed.
    pub batch_count: u64,
}

impl SeedMetrics {
    /// Calculate documents per second.
    pub fn docs_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.documents_inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Seeds a sink with documents generated from one schema.
///
/// The seeder owns a seeded RNG, so a run is reproducible: the same seed,
/// schema and overrides produce the same documents in the same order.
pub struct Seeder<S> {
    sink: S,
    schema: Schema,
    rng: StdRng,
    batch_size: usize,
}

impl<S: DocumentSink> Seeder<S> {
    /// Create a seeder over `sink` for `schema`.
    ///
    /// # Arguments
    ///
    /// * `sink` - Where generated documents go
    /// * `schema` - Document shape to generate
    /// * `seed` - Random seed for deterministic generation
    pub fn new(sink: S, schema: Schema, seed: u64) -> Self {
        Self {
            sink,
            schema,
            rng: StdRng::seed_from_u64(seed),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Set the batch size for insert operations.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Get a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Generate `count` documents and insert them in batches.
    pub async fn seed(&mut self, count: u64) -> Result<SeedMetrics, SeedError> {
        self.seed_with(count, &Overrides::new()).await
    }

    /// Like [`seed`](Seeder::seed), merging the same overrides into every
    /// document.
    pub async fn seed_with(
        &mut self,
        count: u64,
        overrides: &Overrides,
    ) -> Result<SeedMetrics, SeedError> {
        let start_time = Instant::now();
        let mut metrics = SeedMetrics::default();

        info!(
            "Seeding '{}' with {} documents (batch size: {})",
            self.schema.name(),
            count,
            self.batch_size
        );

        let mut remaining = count;
        let mut generation_time = Duration::ZERO;
        let mut insert_time = Duration::ZERO;

        while remaining > 0 {
            let batch_count = std::cmp::min(remaining, self.batch_size as u64);

            // Generate documents
            let gen_start = Instant::now();
            let mut batch = Vec::with_capacity(batch_count as usize);
            for _ in 0..batch_count {
                batch.push(self.schema.generate_with(&mut self.rng, overrides)?);
            }
            generation_time += gen_start.elapsed();

            // Insert documents
            let insert_start = Instant::now();
            self.sink.insert_many(&batch).await?;
            insert_time += insert_start.elapsed();

            metrics.documents_inserted += batch_count;
            metrics.batch_count += 1;
            remaining -= batch_count;

            debug!(
                "Batch {} complete: {} documents inserted, {} remaining",
                metrics.batch_count, batch_count, remaining
            );
        }

        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.insert_duration = insert_time;

        info!(
            "Seeding complete: {} documents in {:?} ({:.2} docs/sec)",
            metrics.documents_inserted,
            metrics.total_duration,
            metrics.docs_per_second()
        );

        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Field;
    use crate::schema::SchemaMap;
    use crate::sink::MemorySink;
    use crate::value::Value;

    fn users_schema() -> Schema {
        Schema::new(
            "users",
            SchemaMap::new()
                .field("age", Field::integer_in(18, 80))
                .field("name", Field::string()),
        )
    }

    #[tokio::test]
    async fn test_seed_inserts_requested_count() {
        let mut seeder = Seeder::new(MemorySink::new(), users_schema(), 42);

        let metrics = seeder.seed(25).await.unwrap();
        assert_eq!(metrics.documents_inserted, 25);
        assert_eq!(seeder.sink().len(), 25);
    }

    #[tokio::test]
    async fn test_seed_batches() {
        let mut seeder = Seeder::new(MemorySink::new(), users_schema(), 42).with_batch_size(10);

        let metrics = seeder.seed(25).await.unwrap();
        assert_eq!(metrics.batch_count, 3);
        assert_eq!(metrics.documents_inserted, 25);
    }

    #[tokio::test]
    async fn test_seed_zero_documents() {
        let mut seeder = Seeder::new(MemorySink::new(), users_schema(), 42);

        let metrics = seeder.seed(0).await.unwrap();
        assert_eq!(metrics.documents_inserted, 0);
        assert_eq!(metrics.batch_count, 0);
        assert!(seeder.sink().is_empty());
    }

    #[tokio::test]
    async fn test_seed_is_deterministic_per_seed() {
        let mut a = Seeder::new(MemorySink::new(), users_schema(), 7);
        let mut b = Seeder::new(MemorySink::new(), users_schema(), 7);

        a.seed(10).await.unwrap();
        b.seed(10).await.unwrap();

        assert_eq!(a.sink().documents(), b.sink().documents());
    }

    #[tokio::test]
    async fn test_seed_with_overrides_pins_every_document() {
        let mut seeder = Seeder::new(MemorySink::new(), users_schema(), 42);
        let overrides = Overrides::new().set("age", 99i64);

        seeder.seed_with(10, &overrides).await.unwrap();

        for document in seeder.sink().documents() {
            assert_eq!(document["age"], Value::Int(99));
        }
    }

    #[tokio::test]
    async fn test_generate_error_stops_run() {
        let schema = Schema::new(
            "broken",
            SchemaMap::new().field("age", Field::integer_in(10, 5)),
        );
        let mut seeder = Seeder::new(MemorySink::new(), schema, 42);

        let err = seeder.seed(5).await.unwrap_err();
        assert!(matches!(err, SeedError::Generate(_)));
        assert!(seeder.sink().is_empty());
    }
}
