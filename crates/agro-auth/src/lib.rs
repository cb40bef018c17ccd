//! # agro-auth
//!
//! Authentication state for AgroSalud.
//!
//! - [`AuthProvider`]: the contract an external identity service fulfils
//! - [`RestAuthProvider`]: that contract over a GoTrue-compatible REST API,
//!   with the session persisted by [`TokenStore`] (OS keychain or file)
//! - [`SessionStore`]: observable "who is signed in" state with a `resolved` flag
//! - [`Gate`] and [`Route`]: guards deciding render, redirect, or loading

pub mod error;
pub mod expiry;
pub mod gate;
pub mod provider;
pub mod remote;
pub mod routes;
pub mod session;
pub mod store;
pub mod token_store;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::AuthError;
pub use gate::{Gate, GateDecision, GatePhase};
pub use provider::AuthProvider;
pub use remote::RestAuthProvider;
pub use routes::Route;
pub use session::{AuthChange, AuthEvent, AuthSession, Credentials, SignUpOutcome, SignUpRequest};
pub use store::{SessionState, SessionStore};
pub use token_store::{TokenSource, TokenStore};
