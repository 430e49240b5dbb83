pub mod auth;
pub mod endpoints;
pub mod http;
