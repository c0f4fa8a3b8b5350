pub mod gateway;

pub use gateway::{FileGateway, StorageError, LAST_MODE_KEY, TASK_STATES_KEY};
