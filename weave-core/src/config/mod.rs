pub mod clock_config;
pub mod defaults;
pub mod weave_config;

pub use clock_config::{ClockConfig, LoadOrderPolicy};
pub use weave_config::WeaveConfig;
