//! Graph resource models.
//!
//! Read models keep unrecognised properties in an `additional` map, so
//! nothing the server sends is lost. Request bodies skip unset fields.

mod calendar;
mod chat;
mod common;
mod presence;
mod teamwork;
mod user;
mod virtual_event;

pub use calendar::*;
pub use chat::*;
pub use common::*;
pub use presence::*;
pub use teamwork::*;
pub use user::*;
pub use virtual_event::*;
