mod logs;
mod metrics;
mod otel;
mod parse_datetime;

pub use self::logs::init_logger;
pub use self::metrics::{Labels, Method, Metrics, Status, encode_metrics};
pub use self::otel::{Telemetry, TracingContext};
pub use self::parse_datetime::{display_date, parse_datetime};
