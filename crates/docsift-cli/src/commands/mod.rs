//! Command implementations.

pub mod analyze;
pub mod configure;
pub mod text;

pub use self::analyze::execute_analyze;
pub use self::configure::execute_config;
pub use self::text::execute_text;
