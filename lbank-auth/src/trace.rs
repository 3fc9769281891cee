#[allow(unused_imports)]
pub use tracing::{debug, error, info, warn};
