//! Application constants

/// Default backend base URL. Override at build time with `PORTAL_API_BASE`.
pub const DEFAULT_API_BASE: &str = "http://backendContainer:8080";

// Client-side routes
pub const ROUTE_LOGIN: &str = "/login";
pub const ROUTE_REGISTER: &str = "/register";
pub const ROUTE_DASHBOARD: &str = "/dashboard";

/// localStorage key holding the session token
pub const TOKEN_STORAGE_KEY: &str = "genbank.session.token";
