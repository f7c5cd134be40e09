// Request Generator - creates one request per call and enqueues it

use crate::domain::{Priority, Request, RequestId, RequestPayload, Source};
use crate::port::{IdProvider, RandomSource, RequestQueue, TimeProvider};
use std::sync::Arc;
use tracing::info;

/// Request Generator
///
/// Random draws per call: priority, then source.
pub struct RequestGenerator {
    queue: Arc<dyn RequestQueue>,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
    random: Arc<dyn RandomSource>,
}

impl RequestGenerator {
    pub fn new(
        queue: Arc<dyn RequestQueue>,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            queue,
            id_provider,
            time_provider,
            random,
        }
    }

    /// Create a request and append it to the queue tail
    pub fn generate(&self) -> RequestId {
        let payload = RequestPayload::new(
            Priority::from_unit(self.random.next_unit()),
            Source::from_unit(self.random.next_unit()),
        );
        let request = Request::new(
            self.id_provider.next_id(),
            self.time_provider.now_millis(),
            payload,
        );
        let id = request.id();

        info!(
            request_id = id,
            priority = %payload.priority,
            source = %payload.source,
            "ADDED: {}",
            request
        );
        self.queue.push(request);
        id
    }
}
