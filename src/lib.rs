pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{SerialIdGenerator, SystemClock};
pub use config::BranchProfile;
pub use core::{SendingRequestParams, ShippingService};
pub use domain::model::{
    RequestId, ShippingRequest, ShippingStatus, StatusId, StatusLabel,
};
pub use domain::ports::{Clock, IdGenerator};
pub use utils::error::{Result, ShippingError};
