pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use std::path::{Path, PathBuf};
