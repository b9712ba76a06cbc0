//! Typed Rust client for the Elibom SMS HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format details, and a small client layer orchestrating requests.
//! Validation happens in the domain constructors, so by the time a request
//! reaches the client it is known to be well-formed and nothing is sent for
//! invalid input.
//!
//! ```rust,no_run
//! use elibom::{ApiPassword, Destinations, ElibomClient, MessageText, SendMessage, Username};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), elibom::ElibomError> {
//!     let client = ElibomClient::new(
//!         Username::new("user@example.com")?,
//!         ApiPassword::new("api-password")?,
//!     );
//!     let request = SendMessage::new(
//!         Destinations::new("573002175604")?,
//!         MessageText::new("hello")?,
//!     );
//!     let delivery_token = client.send_message(request).await?;
//!     println!("queued: {delivery_token}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{ElibomClient, ElibomClientBuilder, ElibomError};
pub use domain::{
    Account, ApiHost, ApiPassword, Campaign, Delivery, DeliveryId, Destinations, LastMessages,
    Message, MessageText, PerPage, Schedule, ScheduleMessage, SchedulePayload, SendMessage, User,
    Username, ValidationError,
};
