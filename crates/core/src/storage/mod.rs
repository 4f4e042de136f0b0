mod error;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use traits::ScanStore;
pub use types::{Item, ItemValue, ScanRequest};
