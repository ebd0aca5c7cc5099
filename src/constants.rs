//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const WINDOW_TITLE: &str = "Counter";

/// Default window size, matching the classic counter demo geometry
pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (250.0, 150.0);
pub const MIN_WINDOW_SIZE: (f32, f32) = (200.0, 120.0);
