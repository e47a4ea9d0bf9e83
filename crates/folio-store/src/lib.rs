pub mod error;
pub mod profile;
pub mod schema;
pub mod store;

pub use error::{Result, StoreError};
pub use profile::{Profile, default_base_dir};
pub use store::Store;
