/// API client performing CSRF and token aware requests
pub mod client;
/// Application configuration module
pub mod config;
