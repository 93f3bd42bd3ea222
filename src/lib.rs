//! notigate - permission-aware desktop notifications
//!
//! This crate tracks whether the application may show desktop notifications,
//! asks for that permission lazily, and sends notifications once it is
//! confirmed. Collaborator failures never surface as errors: they resolve to
//! "not permitted" or "not sent".
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Permission state, notification requests, config, and errors
//! - **Application**: The notification gateway and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust, notify-send, XDG config)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
