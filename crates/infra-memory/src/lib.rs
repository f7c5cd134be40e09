// Queuesim Infrastructure - In-Memory Adapter
// Implements: RequestQueue

mod request_queue;

pub use request_queue::InMemoryRequestQueue;
