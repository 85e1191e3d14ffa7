//! Calendar, calendar view and event clients.
//!
//! Event actions (`accept`, `decline`, `tentativelyAccept`, `cancel`) are
//! POST-only paths below an event and are exposed as [`EventActionClient`]s
//! from both the calendar view and the events collection.

use reqwest::Method;

use super::models::{Calendar, CancelEvent, Collection, Event, EventResponse};
use super::query::{
    CalendarViewQuery, GetQuery, IfMatch, ODataQuery, CALENDAR_VIEW_PARAMS, GET_PARAMS, IF_MATCH_PARAMS,
    LIST_PARAMS, NO_PARAMS,
};
use super::resource::{ActionClient, Endpoint, ResourceClient};
use crate::error::GraphError;
use crate::http::{HttpClient, RequestConfig};
use crate::url_template::ParamDescriptor;

const EVENT_ID: &str = "event-id";
const EVENT_PATH: &[ParamDescriptor] = &[ParamDescriptor::path(EVENT_ID)];

const CALENDAR: Endpoint = Endpoint::new("/me/calendar", NO_PARAMS, GET_PARAMS);
const CALENDAR_UPDATE: Endpoint = Endpoint::new("/me/calendar", NO_PARAMS, NO_PARAMS);

const CALENDAR_VIEW: Endpoint = Endpoint::new("/me/calendar/calendarView", NO_PARAMS, CALENDAR_VIEW_PARAMS);
const CALENDAR_VIEW_EVENT: Endpoint =
    Endpoint::new("/me/calendar/calendarView/{event-id}", EVENT_PATH, GET_PARAMS);
const CALENDAR_VIEW_ACCEPT: Endpoint =
    Endpoint::new("/me/calendar/calendarView/{event-id}/accept", EVENT_PATH, NO_PARAMS);
const CALENDAR_VIEW_DECLINE: Endpoint =
    Endpoint::new("/me/calendar/calendarView/{event-id}/decline", EVENT_PATH, NO_PARAMS);
const CALENDAR_VIEW_TENTATIVE: Endpoint = Endpoint::new(
    "/me/calendar/calendarView/{event-id}/tentativelyAccept",
    EVENT_PATH,
    NO_PARAMS,
);
const CALENDAR_VIEW_CANCEL: Endpoint =
    Endpoint::new("/me/calendar/calendarView/{event-id}/cancel", EVENT_PATH, NO_PARAMS);

const EVENTS: Endpoint = Endpoint::new("/me/events", NO_PARAMS, LIST_PARAMS);
const EVENTS_CREATE: Endpoint = Endpoint::new("/me/events", NO_PARAMS, NO_PARAMS);
const EVENT: Endpoint = Endpoint::new("/me/events/{event-id}", EVENT_PATH, GET_PARAMS);
const EVENT_WRITE: Endpoint = Endpoint::new("/me/events/{event-id}", EVENT_PATH, IF_MATCH_PARAMS);
const EVENT_ACCEPT: Endpoint = Endpoint::new("/me/events/{event-id}/accept", EVENT_PATH, NO_PARAMS);
const EVENT_DECLINE: Endpoint = Endpoint::new("/me/events/{event-id}/decline", EVENT_PATH, NO_PARAMS);
const EVENT_TENTATIVE: Endpoint =
    Endpoint::new("/me/events/{event-id}/tentativelyAccept", EVENT_PATH, NO_PARAMS);
const EVENT_CANCEL: Endpoint = Endpoint::new("/me/events/{event-id}/cancel", EVENT_PATH, NO_PARAMS);

/// Client for an event action path. `cancel` takes [`CancelEvent`].
pub type EventActionClient<B = EventResponse> = ActionClient<B>;

/// Client for `/me/calendar`.
#[derive(Debug, Clone)]
pub struct MeCalendarClient {
    resource: ResourceClient,
}

impl MeCalendarClient {
    pub(crate) fn from_resource(resource: ResourceClient) -> Self {
        Self { resource }
    }

    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET /me/calendar`
    pub async fn get(&self, params: Option<&GetQuery>, config: Option<RequestConfig>) -> Result<Calendar, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &CALENDAR, params, None, config)
            .await
    }

    /// `PATCH /me/calendar`
    pub async fn update(&self, body: &Calendar, config: Option<RequestConfig>) -> Result<Calendar, GraphError> {
        self.resource
            .send::<(), _, _>(Method::PATCH, &CALENDAR_UPDATE, None, Some(body), config)
            .await
    }

    /// `/me/calendar/calendarView`
    pub fn calendar_view(&self) -> CalendarViewClient {
        CalendarViewClient {
            resource: self.resource.clone(),
        }
    }
}

/// Client for `/me/calendar/calendarView`.
#[derive(Debug, Clone)]
pub struct CalendarViewClient {
    resource: ResourceClient,
}

impl CalendarViewClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET /me/calendar/calendarView?startDateTime=..&endDateTime=..`
    ///
    /// Returns occurrences, exceptions and single instances in the window.
    pub async fn list(
        &self,
        params: &CalendarViewQuery,
        config: Option<RequestConfig>,
    ) -> Result<Collection<Event>, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &CALENDAR_VIEW, Some(params), None, config)
            .await
    }

    /// `/me/calendar/calendarView/{event-id}`
    pub fn event(&self, event_id: impl Into<String>) -> CalendarViewEventClient {
        CalendarViewEventClient {
            resource: self.resource.child(EVENT_ID, event_id),
        }
    }

    /// `/me/calendar/calendarView/{event-id}/accept`
    pub fn accept(&self, event_id: impl Into<String>) -> EventActionClient {
        self.event(event_id).accept()
    }

    /// `/me/calendar/calendarView/{event-id}/decline`
    pub fn decline(&self, event_id: impl Into<String>) -> EventActionClient {
        self.event(event_id).decline()
    }

    /// `/me/calendar/calendarView/{event-id}/tentativelyAccept`
    pub fn tentatively_accept(&self, event_id: impl Into<String>) -> EventActionClient {
        self.event(event_id).tentatively_accept()
    }

    /// `/me/calendar/calendarView/{event-id}/cancel`
    pub fn cancel(&self, event_id: impl Into<String>) -> EventActionClient<CancelEvent> {
        self.event(event_id).cancel()
    }
}

/// Client for `/me/calendar/calendarView/{event-id}`.
#[derive(Debug, Clone)]
pub struct CalendarViewEventClient {
    resource: ResourceClient,
}

impl CalendarViewEventClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET /me/calendar/calendarView/{event-id}`
    pub async fn get(&self, params: Option<&GetQuery>, config: Option<RequestConfig>) -> Result<Event, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &CALENDAR_VIEW_EVENT, params, None, config)
            .await
    }

    /// `.../accept`
    pub fn accept(&self) -> EventActionClient {
        ActionClient::new(self.resource.clone(), &CALENDAR_VIEW_ACCEPT)
    }

    /// `.../decline`
    pub fn decline(&self) -> EventActionClient {
        ActionClient::new(self.resource.clone(), &CALENDAR_VIEW_DECLINE)
    }

    /// `.../tentativelyAccept`
    pub fn tentatively_accept(&self) -> EventActionClient {
        ActionClient::new(self.resource.clone(), &CALENDAR_VIEW_TENTATIVE)
    }

    /// `.../cancel`
    pub fn cancel(&self) -> EventActionClient<CancelEvent> {
        ActionClient::new(self.resource.clone(), &CALENDAR_VIEW_CANCEL)
    }
}

/// Client for `/me/events`.
#[derive(Debug, Clone)]
pub struct EventsClient {
    resource: ResourceClient,
}

impl EventsClient {
    pub(crate) fn from_resource(resource: ResourceClient) -> Self {
        Self { resource }
    }

    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET /me/events`
    pub async fn list(
        &self,
        params: Option<&ODataQuery>,
        config: Option<RequestConfig>,
    ) -> Result<Collection<Event>, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &EVENTS, params, None, config)
            .await
    }

    /// `POST /me/events`
    pub async fn create(&self, body: &Event, config: Option<RequestConfig>) -> Result<Event, GraphError> {
        self.resource
            .send::<(), _, _>(Method::POST, &EVENTS_CREATE, None, Some(body), config)
            .await
    }

    /// `/me/events/{event-id}`
    pub fn event(&self, event_id: impl Into<String>) -> EventClient {
        EventClient {
            resource: self.resource.child(EVENT_ID, event_id),
        }
    }
}

/// Client for `/me/events/{event-id}`.
#[derive(Debug, Clone)]
pub struct EventClient {
    resource: ResourceClient,
}

impl EventClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET /me/events/{event-id}`
    pub async fn get(&self, params: Option<&GetQuery>, config: Option<RequestConfig>) -> Result<Event, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &EVENT, params, None, config)
            .await
    }

    /// `PATCH /me/events/{event-id}`, optionally guarded by `If-Match`.
    pub async fn update(
        &self,
        body: &Event,
        params: Option<&IfMatch>,
        config: Option<RequestConfig>,
    ) -> Result<Event, GraphError> {
        self.resource
            .send(Method::PATCH, &EVENT_WRITE, params, Some(body), config)
            .await
    }

    /// `DELETE /me/events/{event-id}`, optionally guarded by `If-Match`.
    pub async fn delete(&self, params: Option<&IfMatch>, config: Option<RequestConfig>) -> Result<(), GraphError> {
        self.resource
            .send::<_, (), _>(Method::DELETE, &EVENT_WRITE, params, None, config)
            .await
    }

    /// `.../accept`
    pub fn accept(&self) -> EventActionClient {
        ActionClient::new(self.resource.clone(), &EVENT_ACCEPT)
    }

    /// `.../decline`
    pub fn decline(&self) -> EventActionClient {
        ActionClient::new(self.resource.clone(), &EVENT_DECLINE)
    }

    /// `.../tentativelyAccept`
    pub fn tentatively_accept(&self) -> EventActionClient {
        ActionClient::new(self.resource.clone(), &EVENT_TENTATIVE)
    }

    /// `.../cancel`
    pub fn cancel(&self) -> EventActionClient<CancelEvent> {
        ActionClient::new(self.resource.clone(), &EVENT_CANCEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource() -> ResourceClient {
        ResourceClient::new(HttpClient::graph_default().unwrap())
    }

    #[test]
    fn test_calendar_view_list_url() {
        let query = CalendarViewQuery::new("2024-01-15T00:00:00Z", "2024-01-16T00:00:00Z")
            .with_odata(ODataQuery::new().with_top(10).add_orderby(["start/dateTime"]));
        let resolved = resource().resolve(&CALENDAR_VIEW, Some(&query)).unwrap();
        assert_eq!(
            resolved.url,
            "/me/calendar/calendarView?startDateTime=2024-01-15T00%3A00%3A00Z\
             &endDateTime=2024-01-16T00%3A00%3A00Z&$top=10&$orderby=start%2FdateTime"
        );
    }

    #[test]
    fn test_calendar_view_actions() {
        let view = MeCalendarClient::from_resource(resource()).calendar_view();
        assert_eq!(view.accept("e1").path().unwrap(), "/me/calendar/calendarView/e1/accept");
        assert_eq!(view.decline("e1").path().unwrap(), "/me/calendar/calendarView/e1/decline");
        assert_eq!(
            view.tentatively_accept("e1").path().unwrap(),
            "/me/calendar/calendarView/e1/tentativelyAccept"
        );
        assert_eq!(view.cancel("e1").path().unwrap(), "/me/calendar/calendarView/e1/cancel");
    }

    #[test]
    fn test_event_actions() {
        let event = EventsClient::from_resource(resource()).event("e2");
        assert_eq!(event.accept().path().unwrap(), "/me/events/e2/accept");
        assert_eq!(event.cancel().template(), "/me/events/{event-id}/cancel");
    }

    #[test]
    fn test_event_write_sends_if_match_header() {
        let event = EventsClient::from_resource(resource()).event("e3");
        let resolved = event
            .resource
            .resolve(&EVENT_WRITE, Some(&IfMatch::new("W/\"abc\"")))
            .unwrap();
        assert_eq!(resolved.url, "/me/events/e3");
        assert_eq!(resolved.headers, vec![("If-Match", "W/\"abc\"".to_string())]);
    }

    #[test]
    fn test_event_ids_do_not_leak_between_children() {
        let events = EventsClient::from_resource(resource());
        let first = events.event("one");
        let second = events.event("two");
        assert_eq!(first.accept().path().unwrap(), "/me/events/one/accept");
        assert_eq!(second.accept().path().unwrap(), "/me/events/two/accept");
        assert!(events.resource.captured().is_empty());
    }
}
