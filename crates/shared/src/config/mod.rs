mod env;
mod redis;

pub use self::env::{env_flag, env_or, env_parse_or};
pub use self::redis::{RedisClient, RedisConfig};
