//! Dns Survey Application Layer
pub mod ports;
pub mod use_cases;

pub use ports::{HostLookup, NameserverDirectory};
pub use use_cases::SurveyRegionUseCase;
