use smallvec::SmallVec;

use crate::sqs::{BatchItemFailure, SqsResponse};

/// Accumulates failed message ids for an SQS partial batch response.
///
/// Ids are reported in the order they were first added; adding an id twice
/// has no effect. [`build`](Self::build) can be called repeatedly.
#[derive(Debug, Clone, Default)]
pub struct SqsResponseBuilder {
    // SQS caps a batch at 10 records
    failed: SmallVec<[String; 10]>,
}

impl SqsResponseBuilder {
    pub fn new() -> Self {
        Self {
            failed: SmallVec::new(),
        }
    }

    /// Record a failed batch item id. Exact duplicates are ignored.
    pub fn add_failure(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.failed.contains(&id) {
            log::trace!("duplicate failed item {id:?} ignored");
            return;
        }
        self.failed.push(id);
    }

    /// Produce the failure report, one entry per unique id, in first-failure
    /// order.
    pub fn build(&self) -> SqsResponse {
        SqsResponse {
            batch_item_failures: self
                .failed
                .iter()
                .map(|id| BatchItemFailure {
                    item_identifier: id.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch() {
        let builder = SqsResponseBuilder::new();
        assert_eq!(builder.build(), SqsResponse::default());
        assert_eq!(
            serde_json::to_string(&builder.build()).unwrap(),
            r#"{"batchItemFailures":[]}"#
        );
    }

    #[test]
    fn test_order_and_dedup() {
        let mut builder = SqsResponseBuilder::new();
        builder.add_failure("B");
        builder.add_failure("A");
        builder.add_failure("B");

        let ids: Vec<String> = builder
            .build()
            .batch_item_failures
            .into_iter()
            .map(|f| f.item_identifier)
            .collect();
        assert_eq!(ids, ["B", "A"]);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let mut builder = SqsResponseBuilder::new();
        builder.add_failure("msg");
        builder.add_failure("MSG");
        assert_eq!(builder.build().batch_item_failures.len(), 2);
    }

    #[test]
    fn test_build_is_idempotent() {
        let mut builder = SqsResponseBuilder::new();
        builder.add_failure("123");

        assert_eq!(builder.build(), builder.build());
        assert_eq!(
            serde_json::to_string(&builder.build()).unwrap(),
            r#"{"batchItemFailures":[{"itemIdentifier":"123"}]}"#
        );
    }
}
