//! Application layer - Use cases and port interfaces
//!
//! Contains the notification gateway and the trait definitions
//! for external system interactions.

pub mod gateway;
pub mod ports;

// Re-export use cases
pub use gateway::NotificationGateway;
