//! SQS partial batch responses.
//!
//! With `ReportBatchItemFailures` enabled, a queue handler returns the ids of
//! the records it could not process; the runtime retries only those.

use serde::Serialize;

mod builder;
pub use builder::SqsResponseBuilder;

/// One failed record in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchItemFailure {
    #[serde(rename = "itemIdentifier")]
    pub item_identifier: String,
}

/// The batch failure report handed back to the invocation runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SqsResponse {
    #[serde(rename = "batchItemFailures")]
    pub batch_item_failures: Vec<BatchItemFailure>,
}
