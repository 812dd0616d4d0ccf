// HTTP Server modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

// LINE Messaging API channel
pub mod channel;

// Model gateway
pub mod llm;
