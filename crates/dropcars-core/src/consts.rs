/// Smallest zoom factor. At this scale the image exactly fills its box.
pub const MIN_SCALE: f32 = 1.0;

/// Largest zoom factor reachable by pinching.
pub const MAX_SCALE: f32 = 4.0;

/// Default width (px) of the box a document image is rendered into.
pub const DEFAULT_VIEWER_WIDTH: f32 = 300.0;

/// Default height (px) of the box a document image is rendered into.
pub const DEFAULT_VIEWER_HEIGHT: f32 = 400.0;

/// Backend used when no config file overrides it.
pub const DEFAULT_API_BASE_URL: &str = "https://api.dropcars.in";

/// Per-request timeout for API calls, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Token type assumed when the login response omits one.
pub const DEFAULT_TOKEN_TYPE: &str = "bearer";

/// Directory (under the platform config dir) holding config and session files.
pub const APP_DIR_NAME: &str = "dropcars";

pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const SESSION_FILE_NAME: &str = "session.toml";
