//! TextModel trait definition

use async_trait::async_trait;

use super::LlmError;

/// Opaque text-in/text-out generative model.
///
/// This is the only non-deterministic dependency in the generation
/// pipeline, so it lives behind a trait: production code talks to a real
/// service, tests substitute a deterministic fake. One call per
/// generation; implementations do not retry, and callers see nothing
/// beyond the returned text.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Send a single prompt and wait for the complete response text.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[cfg(test)]
pub mod mock {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Deterministic fake model for unit tests.
    ///
    /// Returns canned responses in order and records every prompt it was
    /// handed, so tests can assert on both sides of the call.
    pub struct MockModel {
        responses: Vec<String>,
        call_count: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl MockModel {
        pub fn new(responses: Vec<String>) -> Self {
            Self {
                responses,
                call_count: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextModel for MockModel {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            let idx = self.call_count.fetch_add(1, Ordering::SeqCst);
            self.responses
                .get(idx)
                .cloned()
                .ok_or_else(|| LlmError::InvalidResponse("No more mock responses".to_string()))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_model_returns_responses_in_order() {
            let model = MockModel::new(vec!["first".to_string(), "second".to_string()]);

            assert_eq!(model.generate("p1").await.unwrap(), "first");
            assert_eq!(model.generate("p2").await.unwrap(), "second");
            assert_eq!(model.call_count(), 2);
            assert_eq!(model.prompts(), vec!["p1", "p2"]);
        }

        #[tokio::test]
        async fn test_mock_model_errors_when_exhausted() {
            let model = MockModel::new(vec![]);
            assert!(model.generate("anything").await.is_err());
        }
    }
}
