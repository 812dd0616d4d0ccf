// Request/response bodies of the chat endpoint

use serde::{Deserialize, Serialize};

// Request Types
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

// Response Types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub response: String,
}
