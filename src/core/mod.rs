pub mod service;

pub use service::{SendingRequestParams, ShippingService};
