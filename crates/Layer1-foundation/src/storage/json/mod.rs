mod store;

pub use store::{JsonStore, PROJECT_DIR_NAME};
