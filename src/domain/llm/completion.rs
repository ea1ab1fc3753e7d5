use async_trait::async_trait;
use std::fmt::Debug;

use super::Message;
use crate::domain::DomainError;

/// Text-in, text-out view of the generative service used by the assistant
/// handlers. Model and sampling parameters are fixed by the implementation.
#[async_trait]
pub trait CompletionClient: Send + Sync + Debug {
    async fn complete(&self, messages: Vec<Message>) -> Result<String, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Scripted completion client; replies are consumed in order and every
    /// call is recorded
    #[derive(Debug, Default)]
    pub struct MockCompletionClient {
        replies: Mutex<VecDeque<Result<String, String>>>,
        calls: Mutex<Vec<Vec<Message>>>,
    }

    impl MockCompletionClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_reply(self, reply: impl Into<String>) -> Self {
            self.replies.lock().unwrap().push_back(Ok(reply.into()));
            self
        }

        pub fn with_failure(self, error: impl Into<String>) -> Self {
            self.replies.lock().unwrap().push_back(Err(error.into()));
            self
        }

        pub fn calls(&self) -> Vec<Vec<Message>> {
            self.calls.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionClient for MockCompletionClient {
        async fn complete(&self, messages: Vec<Message>) -> Result<String, DomainError> {
            self.calls.lock().unwrap().push(messages);

            match self.replies.lock().unwrap().pop_front() {
                Some(Ok(reply)) => Ok(reply),
                Some(Err(error)) => Err(DomainError::provider("mock", error)),
                None => Err(DomainError::provider("mock", "No scripted reply left")),
            }
        }
    }
}
