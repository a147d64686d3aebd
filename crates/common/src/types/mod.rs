use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Health {
    pub status: String,
    pub service: String,
}

impl Health {
    pub fn healthy(service: &str) -> Self {
        Self { status: "healthy".into(), service: service.into() }
    }
}

/// Plain `{"message": ...}` body used by liveness and landing endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
