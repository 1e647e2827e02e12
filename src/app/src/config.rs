//! Compile-time configuration of the form core.
//!
//! Everything the page supplies at run time arrives through
//! [`PageLayout`](crate::types::PageLayout) instead.

/// Endpoint rendering the generated configuration as JSON for the preview pane
pub const PREVIEW_ENDPOINT: &str = "/preview";

/// Endpoint returning the generated configuration as a file
pub const DOWNLOAD_ENDPOINT: &str = "/download";

/// File name offered to the browser's save dialog
pub const DOWNLOAD_FILENAME: &str = "userPrefs.jsonc";

/// Browser-local storage key holding the theme preference
pub const THEME_STORAGE_KEY: &str = "theme";

/// Text placed in the preview pane when the preview request fails
pub const PREVIEW_ERROR_MESSAGE: &str = "An error occurred during preview generation.";

/// Alert shown when the download request fails
pub const DOWNLOAD_ERROR_MESSAGE: &str = "An error occurred while downloading the file.";

/// Label of the empty entry heading the timezone dropdown
pub const TIMEZONE_PLACEHOLDER: &str = "Select a timezone...";

/// Number of channel slots a device offers, and therefore the most tabs a page may declare
pub const MAX_CHANNEL_TABS: usize = 8;

/// Number of random bytes in a generated pre-shared key
pub const PSK_LEN: usize = 32;
