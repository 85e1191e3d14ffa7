//! End-to-end tests of the Graph resource clients against a fake server.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use graph_cards::cards::{AdaptiveCard, TextBlock};
use graph_cards::error::GraphError;
use graph_cards::graph::{
    CalendarViewQuery, Chat, ChatsClient, CommunicationsClient, EventResponse, GetPresencesByUserId, GetQuery, IfMatch,
    InstallApp, MeClient, ODataError, ODataQuery, SetPresence, UsersClient, VirtualEventRegistration,
    VirtualEventsClient,
};
use graph_cards::http::{user_agent, HttpClient, HttpConfig, RequestConfig, DEFAULT_PRODUCT};

const TOKEN: &str = "test-token-abc123";

fn config_for(server: &MockServer) -> HttpConfig {
    HttpConfig::new()
        .with_base_url(server.uri())
        .with_bearer_token(TOKEN)
}

#[tokio::test]
async fn test_get_me_sends_default_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(header("user-agent", user_agent(DEFAULT_PRODUCT).as_str()))
        .and(header("accept", "application/json"))
        .and(query_param("$select", "displayName,mail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "displayName": "Ada Lovelace",
            "mail": "ada@example.com",
            "businessPhones": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let me = MeClient::new(config_for(&server)).unwrap();
    let user = me
        .get(Some(&GetQuery::new().add_select(["displayName", "mail"])), None)
        .await
        .unwrap();

    assert_eq!(user.id.as_deref(), Some("u1"));
    assert_eq!(user.display(), "Ada Lovelace");
}

#[tokio::test]
async fn test_custom_product_in_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("user-agent", user_agent("mybot").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u1"})))
        .expect(1)
        .mount(&server)
        .await;

    let me = MeClient::new(config_for(&server).with_product("mybot")).unwrap();
    me.get(None, None).await.unwrap();
}

#[tokio::test]
async fn test_calendar_view_list_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me/calendar/calendarView"))
        .and(query_param("startDateTime", "2024-01-15T00:00:00Z"))
        .and(query_param("endDateTime", "2024-01-16T00:00:00Z"))
        .and(query_param("$top", "5"))
        .and(query_param("$orderby", "start/dateTime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@odata.nextLink": "https://graph.microsoft.com/v1.0/me/calendar/calendarView?$skip=5",
            "value": [
                {"id": "e1", "subject": "Standup"},
                {"id": "e2", "subject": "Review"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let me = MeClient::new(config_for(&server)).unwrap();
    let window = CalendarViewQuery::new("2024-01-15T00:00:00Z", "2024-01-16T00:00:00Z")
        .with_odata(ODataQuery::new().with_top(5).add_orderby(["start/dateTime"]));
    let events = me.calendar().calendar_view().list(&window, None).await.unwrap();

    assert_eq!(events.len(), 2);
    assert!(events.has_more());
    let subjects: Vec<_> = events.into_iter().map(|e| e.display_subject().to_string()).collect();
    assert_eq!(subjects, ["Standup", "Review"]);
}

#[tokio::test]
async fn test_accept_event_posts_body_and_handles_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/me/calendar/calendarView/AAMkAGI1/accept"))
        .and(body_json(json!({"comment": "See you there", "sendResponse": true})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let me = MeClient::new(config_for(&server)).unwrap();
    let response = EventResponse::new()
        .with_comment("See you there")
        .with_send_response(true);

    me.calendar()
        .calendar_view()
        .accept("AAMkAGI1")
        .create(Some(&response), None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_event_with_if_match() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/me/events/e1"))
        .and(header("if-match", "W/\"etag-1\""))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let me = MeClient::new(config_for(&server)).unwrap();
    me.events()
        .event("e1")
        .delete(Some(&IfMatch::new("W/\"etag-1\"")), None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_request_config_header_wins_over_if_match_param() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/me/events/e1"))
        .and(header("if-match", "from-config"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = RequestConfig::new();
    config.insert_header("If-Match", "from-config").unwrap();

    let me = MeClient::new(config_for(&server)).unwrap();
    me.events()
        .event("e1")
        .delete(Some(&IfMatch::new("from-param")), Some(config))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_error_status_is_returned_with_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me/events/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": "ErrorItemNotFound", "message": "The specified object was not found in the store."}
        })))
        .mount(&server)
        .await;

    let me = MeClient::new(config_for(&server)).unwrap();
    let err = me.events().event("missing").get(None, None).await.unwrap_err();

    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    match err {
        GraphError::HttpStatus { body, .. } => {
            let parsed = ODataError::parse(&body).unwrap();
            assert_eq!(parsed.error.code, "ErrorItemNotFound");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_body_redacts_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(401).set_body_string(format!("bad token {}", TOKEN)))
        .mount(&server)
        .await;

    let me = MeClient::new(config_for(&server)).unwrap();
    let err = me.get(None, None).await.unwrap_err();

    let message = err.to_string();
    assert!(!message.contains(TOKEN));
    assert!(message.contains("[REDACTED]"));
}

#[tokio::test]
async fn test_send_card_posts_attachment() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chats/19:abc@thread.v2/messages"))
        .and(body_partial_json(json!({
            "body": {"contentType": "html", "content": "<attachment id=\"adaptive-card\"></attachment>"},
            "attachments": [{
                "id": "adaptive-card",
                "contentType": "application/vnd.microsoft.card.adaptive"
            }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "m1",
            "messageType": "message"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let chats = ChatsClient::new(config_for(&server)).unwrap();
    let card = AdaptiveCard::new().add_body([TextBlock::new("Build passed").into()]);
    let sent = chats
        .chat("19:abc@thread.v2")
        .messages()
        .send_card(&card, None)
        .await
        .unwrap();

    assert_eq!(sent.id.as_deref(), Some("m1"));
}

#[tokio::test]
async fn test_chat_topic_update_accepts_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/chats/c1"))
        .and(body_json(json!({"topic": "Release 1.2"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let chats = ChatsClient::new(config_for(&server)).unwrap();
    let body = Chat {
        topic: Some("Release 1.2".to_string()),
        ..Default::default()
    };
    chats.chat("c1").update(&body, None).await.unwrap();
}

#[tokio::test]
async fn test_set_presence_and_read_user_presence() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/me/presence/setPresence"))
        .and(body_json(json!({
            "sessionId": "app-1",
            "availability": "Busy",
            "activity": "InACall",
            "expirationDuration": "PT1H"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/u2/presence"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u2",
            "availability": "Away",
            "activity": "Away"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let http = HttpClient::new(config_for(&server)).unwrap();

    let me = MeClient::new(&http).unwrap();
    me.presence()
        .set_presence()
        .create(
            Some(&SetPresence::new("app-1", "Busy", "InACall").with_expiration_duration("PT1H")),
            None,
        )
        .await
        .unwrap();

    let users = UsersClient::new(&http).unwrap();
    let presence = users.user("u2").presence().get(None).await.unwrap();
    assert_eq!(presence.display_availability(), "Away");
}

#[tokio::test]
async fn test_get_presences_by_user_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/communications/getPresencesByUserId"))
        .and(body_json(json!({"ids": ["u1", "u2"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [
                {"id": "u1", "availability": "Available"},
                {"id": "u2", "availability": "Busy"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let communications = CommunicationsClient::new(config_for(&server)).unwrap();
    let presences = communications
        .get_presences_by_user_id()
        .create(Some(&GetPresencesByUserId::new(["u1", "u2"])), None)
        .await
        .unwrap();

    let availability: Vec<_> = presences.into_iter().map(|p| p.display_availability().to_string()).collect();
    assert_eq!(availability, ["Available", "Busy"]);
}

#[tokio::test]
async fn test_install_app_returns_unit_on_created() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/me/teamwork/installedApps"))
        .and(body_json(json!({
            "teamsApp@odata.bind": "https://graph.microsoft.com/v1.0/appCatalogs/teamsApps/app-42"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let me = MeClient::new(config_for(&server)).unwrap();
    me.teamwork()
        .installed_apps()
        .create(&InstallApp::for_app("app-42"), None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_webinar_registration_flow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/solutions/virtualEvents/webinars/w1/registrations"))
        .and(body_partial_json(json!({"firstName": "Ada", "email": "ada@example.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "r1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "status": "registered"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/solutions/virtualEvents/webinars/w1/registrations/r1/cancel"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let events = VirtualEventsClient::new(config_for(&server)).unwrap();
    let webinar = events.webinar("w1");

    let registration = webinar
        .registrations()
        .create(&VirtualEventRegistration::external("Ada", "Lovelace", "ada@example.com"), None)
        .await
        .unwrap();
    assert_eq!(registration.id.as_deref(), Some("r1"));

    webinar
        .registration("r1")
        .cancel()
        .create(None, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_per_request_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("prefer", "outlook.timezone=\"UTC\""))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u1"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = RequestConfig::new();
    config.insert_header("Prefer", "outlook.timezone=\"UTC\"").unwrap();

    let me = MeClient::new(config_for(&server)).unwrap();
    me.get(None, Some(config)).await.unwrap();
}

#[test]
fn test_blocking_call_with_tokio_test() {
    let server = tokio_test::block_on(MockServer::start());

    tokio_test::block_on(
        Mock::given(method("GET"))
            .and(path("/chats"))
            .and(query_param("$top", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "@odata.count": 2,
                "value": [{"id": "c1", "chatType": "oneOnOne"}, {"id": "c2", "chatType": "group"}]
            })))
            .mount(&server),
    );

    let chats = ChatsClient::new(config_for(&server)).unwrap();
    let result = tokio_test::block_on(chats.list(Some(&ODataQuery::new().with_top(2)), None));
    let page = tokio_test::assert_ok!(result);
    assert_eq!(page.len(), 2);
    assert!(!page.has_more());
}
