mod storage;

pub use self::storage::{DynKeyValueStore, KeyValueStoreTrait};
