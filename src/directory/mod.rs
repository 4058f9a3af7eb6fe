pub mod controller;
pub mod store;

pub use controller::{DirectoryController, LOAD_ERROR_MESSAGE, LoadState, count_label};
pub use store::{DirectoryStore, SharedController, lock, mount, retry};
