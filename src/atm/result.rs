/// Convenience alias for the application-level plumbing; the selector itself returns typed errors
pub type Result<T = ()> = anyhow::Result<T>;
