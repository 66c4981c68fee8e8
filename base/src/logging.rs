pub use tracing::{debug, info};
