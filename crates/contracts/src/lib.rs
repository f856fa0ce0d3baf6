//! Wire contracts shared between the admin console and the platform backend.
//!
//! Every type here mirrors a JSON payload of a REST endpoint. The backend owns
//! the semantics of these records; the console only displays and edits the
//! fields it is given.

pub mod billing;
pub mod shared;
pub mod system;
pub mod telephony;
