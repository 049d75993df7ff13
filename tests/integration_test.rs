// Integration tests for nodeview: a real HTTP client against a local graph store fixture
use actix_web::{web, App, HttpResponse, HttpServer};
use nodeview_client::{ClientConfig, HttpResourceClient};
use nodeview_core::{
    DirectHrefs, Endpoint, Error, NavigationController, Notifications, Outcome, ViewerConfig,
};
use serde_json::json;
use std::net::TcpListener;
use std::sync::Arc;

struct Fixture {
    base: String,
}

async fn node(fixture: web::Data<Fixture>, id: web::Path<String>) -> HttpResponse {
    let base = &fixture.base;
    let url = format!("{}/node/{}", base, id);
    let all_relationships = format!("{}/relationships/all", url);
    match id.as_str() {
        "5" => HttpResponse::Ok().json(json!({
            "data": {"name": "Alice"},
            "all_relationships": all_relationships,
        })),
        "9" => HttpResponse::Ok().json(json!({
            "data": {"name": "Bob", "age": 41},
            "all_relationships": all_relationships,
        })),
        "42" => HttpResponse::Ok().json(json!({
            "data": {"tags": ["a", "b"]},
            "all_relationships": all_relationships,
        })),
        "13" => HttpResponse::Ok().json(json!({
            "data": {"name": "Carol"},
            "all_relationships": all_relationships,
        })),
        "7" => HttpResponse::Ok().content_type("application/json").body("<html>oops</html>"),
        _ => HttpResponse::NotFound().finish(),
    }
}

async fn relationships(fixture: web::Data<Fixture>, id: web::Path<String>) -> HttpResponse {
    let base = &fixture.base;
    match id.as_str() {
        "5" | "9" => HttpResponse::Ok().json(json!([{
            "start": format!("{}/node/5", base),
            "end": format!("{}/node/9", base),
            "type": "KNOWS",
        }])),
        "42" => HttpResponse::Ok().json(json!([])),
        _ => HttpResponse::InternalServerError().finish(),
    }
}

/// Starts the fixture graph store and returns its REST root.
fn start_graph_store() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}/db/data", listener.local_addr().unwrap());
    let fixture = web::Data::new(Fixture { base: base.clone() });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(fixture.clone())
            .route("/db/data/node/{id}", web::get().to(node))
            .route("/db/data/node/{id}/relationships/all", web::get().to(relationships))
    })
    .workers(1)
    .listen(listener)
    .unwrap()
    .run();
    actix_web::rt::spawn(server);
    base
}

fn create_controller(base: &str) -> (NavigationController<HttpResourceClient>, Arc<Notifications>) {
    let client = HttpResourceClient::new(ClientConfig::default()).unwrap();
    let notifications = Arc::new(Notifications::new());
    let controller =
        NavigationController::new(client, ViewerConfig::new(base), notifications.clone());
    (controller, notifications)
}

#[actix_web::test]
async fn test_node_with_outgoing_relationship() {
    let base = start_graph_store();
    let (controller, notifications) = create_controller(&base);

    let outcome = controller.update_view(&format!("{}/node/5", base)).await.unwrap();
    assert_eq!(outcome, Outcome::Rendered);
    assert_eq!(controller.current_id().as_deref(), Some("5"));
    assert_eq!(controller.controls().input(), "5");
    assert!(notifications.is_empty());

    let surface = controller.surface();
    let props: Vec<_> = surface.property_tables().collect();
    assert_eq!(props.len(), 1);
    assert_eq!(props[0].rows[0].name, "name");
    assert_eq!(props[0].rows[0].value, "Alice");

    let table = surface.relationships().unwrap();
    assert_eq!(table.rows.len(), 1);
    assert!(!table.rows[0].start.is_link());
    assert_eq!(table.rows[0].rel_type, "KNOWS");
    assert!(matches!(&table.rows[0].end, Endpoint::Link { id, .. } if id == "9"));

    let html = controller.render_html(&DirectHrefs);
    assert!(html.contains(&format!("<a class='nodeLink' href='{}/node/9'>9</a>", base)));
}

#[actix_web::test]
async fn test_link_navigation_and_inline_expansion() {
    let base = start_graph_store();
    let (controller, _notifications) = create_controller(&base);

    controller.update_view(&format!("{}/node/5", base)).await.unwrap();
    assert_eq!(controller.expand_inline(0).await.unwrap(), Outcome::Rendered);

    let surface = controller.surface();
    let container = surface.inline_container(0).unwrap();
    let html = nodeview_core::render_blocks(container.blocks(), &DirectHrefs);
    assert!(html.starts_with("<h2>Node 9</h2>"));
    assert!(html.contains("<td>Bob</td>"));

    let navigate = controller
        .bindings()
        .into_iter()
        .find(|b| b.kind == nodeview_core::LinkKind::Navigate)
        .unwrap();
    controller.activate(&navigate).await.unwrap();
    assert_eq!(controller.current_id().as_deref(), Some("9"));
    assert!(controller.surface().inline_container(0).unwrap().is_empty());
}

#[actix_web::test]
async fn test_missing_node_is_notified() {
    let base = start_graph_store();
    let (controller, notifications) = create_controller(&base);

    let err = controller.submit_id("404").await.unwrap_err();
    match &err {
        Error::FetchFailure { url, status } => {
            assert_eq!(url, &format!("{}/node/404", base));
            assert!(status.starts_with("404"));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let pending = notifications.drain();
    assert_eq!(pending.len(), 1);
    assert!(pending[0].message.contains("/node/404"));
    assert!(controller.surface().property_tables().next().is_none());
}

#[actix_web::test]
async fn test_malformed_node_is_notified() {
    let base = start_graph_store();
    let (controller, notifications) = create_controller(&base);

    let err = controller.submit_id("7").await.unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
    assert_eq!(notifications.drain().len(), 1);
}

#[actix_web::test]
async fn test_relationship_failure_keeps_properties() {
    let base = start_graph_store();
    let (controller, notifications) = create_controller(&base);

    // node 13 has no fixture relationship list; the store answers 500
    let err = controller.submit_id("13").await.unwrap_err();
    assert!(matches!(err, Error::FetchFailure { .. }));
    assert_eq!(notifications.drain().len(), 1);

    let html = controller.render_html(&DirectHrefs);
    assert!(html.contains("<td>Carol</td>"));
    assert!(!html.contains("class='relationships'"));
}

#[actix_web::test]
async fn test_control_submits_typed_id() {
    let base = start_graph_store();
    let (controller, notifications) = create_controller(&base);

    let outcome = controller.submit_id(" 42 ").await.unwrap();
    assert_eq!(outcome, Outcome::Rendered);
    assert_eq!(controller.current_id().as_deref(), Some("42"));
    assert!(notifications.is_empty());

    let html = controller.render_html(&DirectHrefs);
    assert!(html.contains("<h2>Node 42</h2>"));
    assert!(html.contains("<tr><td>tags</td><td>[&quot;a&quot;,&quot;b&quot;]</td></tr>"));
    assert!(html.contains("<h2>Relationships (0)</h2>"));
}
