//! Microsoft Graph REST client.
//!
//! Each REST path is represented by a small client struct holding a shared
//! [`HttpClient`](crate::http::HttpClient) and the path values captured while
//! navigating to it. Top-level clients are built from
//! [`ClientOptions`](crate::http::ClientOptions); nested clients come from
//! accessor methods and share their parent's HTTP client.
//!
//! ```ignore
//! use graph_cards::graph::{EventResponse, MeClient};
//!
//! let me = MeClient::new(&config)?;
//! me.calendar()
//!     .calendar_view()
//!     .accept(event_id)
//!     .create(Some(&EventResponse::new().with_send_response(true)), None)
//!     .await?;
//! ```
//!
//! Nothing here retries, paginates or caches; Graph errors come back as
//! [`GraphError::HttpStatus`](crate::error::GraphError::HttpStatus) with the
//! response body, which [`ODataError::parse`](models::ODataError::parse)
//! can decode.

mod calendar;
mod chats;
mod me;
pub mod models;
mod presence;
pub mod query;
pub mod resource;
mod teamwork;
mod virtual_events;

pub use calendar::{
    CalendarViewClient, CalendarViewEventClient, EventActionClient, EventClient, EventsClient, MeCalendarClient,
};
pub use chats::{ChatClient, ChatMessageClient, ChatMessagesClient, ChatsClient, CARD_ATTACHMENT_ID};
pub use me::MeClient;
pub use models::*;
pub use presence::{CommunicationsClient, PresenceActionClient, PresenceClient, UserClient, UsersClient};
pub use query::{CalendarViewQuery, GetQuery, IfMatch, ODataQuery};
pub use resource::{ActionClient, Endpoint, ResourceClient};
pub use teamwork::{InstalledAppClient, InstalledAppsClient, TeamworkClient};
pub use virtual_events::{
    RegistrationClient, RegistrationsClient, SessionClient, SessionsClient, TownhallClient, TownhallsClient,
    VirtualEventsClient, WebinarClient, WebinarsClient,
};
