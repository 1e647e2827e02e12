//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - channels: Channel tab visibility
//! - form: Form controls, payload and optional sections
//! - layout: Page facts reported by the shell at start-up
//! - theme: Color scheme preference
//! - timezone: Timezone dropdown state

pub mod channels;
pub mod form;
pub mod layout;
pub mod theme;
pub mod timezone;

pub use channels::*;
pub use form::*;
pub use layout::*;
pub use theme::*;
pub use timezone::*;
