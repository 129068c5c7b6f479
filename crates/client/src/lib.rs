pub mod api;
pub mod config;
pub mod http;
pub mod pagination;
pub mod payment;
pub mod storage;
pub mod workflow;

pub use config::{ClientConfig, PaymentSettings};
pub use http::ApiClient;
pub use pagination::PageCursor;
pub use payment::{is_checkout_return, DonationFlow, PaymentOutcome};
pub use storage::{FileStore, KeyValueStore, MemoryStore, CURRENT_PAYMENT_KEY};
pub use workflow::SummonWorkflow;
