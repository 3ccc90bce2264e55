mod loader;

pub use loader::{DEFAULT_ENDPOINTS_FILE, load_endpoints};
