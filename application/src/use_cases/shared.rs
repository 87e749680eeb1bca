//! Shared helpers for the subgraph tool use cases.

use std::time::Instant;

use crate::ports::subgraph::SubgraphPort;
use lens_domain::{Dataset, FailureCategory, GraphQuery, ResponseSchema};
use tracing::{debug, warn};

/// Post `query` and validate the reply against `T`.
///
/// Every transport or schema failure is classified into a
/// [`FailureCategory`]; callers decide what emptiness means.
pub(crate) async fn fetch_validated<T: ResponseSchema>(
    subgraph: &dyn SubgraphPort,
    dataset: Dataset,
    query: &GraphQuery,
) -> Result<T, FailureCategory> {
    let start = Instant::now();

    let raw = subgraph.query(dataset, query).await.map_err(|e| {
        warn!("Subgraph query on {} failed: {}", dataset, e);
        e.category()
    })?;

    let validated = T::validate(raw).map_err(|e| {
        warn!("{}", e);
        FailureCategory::SchemaMismatch(format!("Invalid data format: {}", e.reason))
    })?;

    debug!(
        "Validated {} from {} in {}ms",
        T::NAME,
        dataset,
        start.elapsed().as_millis()
    );
    Ok(validated)
}

/// Current unix time in seconds, for stamping fallback records
pub(crate) fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use lens_domain::{Dataset, GraphQuery};

    use crate::ports::subgraph::{SubgraphError, SubgraphPort};

    /// In-memory subgraph returning one canned reply for every query.
    pub struct MockSubgraph {
        reply: Result<serde_json::Value, SubgraphError>,
        calls: AtomicUsize,
        queries: Mutex<Vec<(Dataset, String)>>,
    }

    impl MockSubgraph {
        pub fn replying(body: serde_json::Value) -> Self {
            Self::with_reply(Ok(body))
        }

        pub fn failing(error: SubgraphError) -> Self {
            Self::with_reply(Err(error))
        }

        fn with_reply(reply: Result<serde_json::Value, SubgraphError>) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                queries: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_query(&self) -> Option<(Dataset, String)> {
            self.queries.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl SubgraphPort for MockSubgraph {
        async fn query(
            &self,
            dataset: Dataset,
            query: &GraphQuery,
        ) -> Result<serde_json::Value, SubgraphError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.queries
                .lock()
                .unwrap()
                .push((dataset, query.query.clone()));
            self.reply.clone()
        }
    }

    /// Key set of a JSON value, recursively, with leaf types.
    ///
    /// Two payloads with equal shapes have the same fields of the same types.
    pub fn shape(value: &serde_json::Value) -> serde_json::Value {
        use serde_json::Value;
        match value {
            Value::Object(map) => {
                Value::Object(map.iter().map(|(k, v)| (k.clone(), shape(v))).collect())
            }
            Value::Array(items) => match items.first() {
                Some(first) => Value::Array(vec![shape(first)]),
                None => Value::Array(Vec::new()),
            },
            Value::String(_) => Value::String("string".into()),
            Value::Number(_) => Value::String("number".into()),
            Value::Bool(_) => Value::String("bool".into()),
            Value::Null => Value::String("null".into()),
        }
    }
}
