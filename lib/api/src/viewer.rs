use crate::page::{render_page, ViewerHrefs};
use actix_web::{http::header, web, App, HttpResponse, HttpServer, Result as ActixResult};
use nodeview_core::{
    Error, LinkBinding, NavigationController, Notification, Notifications, Outcome, ResourceClient,
    ViewerConfig,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Controller plus the notification queue the page drains.
pub struct Viewer<C> {
    controller: NavigationController<C>,
    notifications: Arc<Notifications>,
}

impl<C: ResourceClient> Viewer<C> {
    pub fn new(client: C, config: ViewerConfig) -> Self {
        let notifications = Arc::new(Notifications::new());
        let controller = NavigationController::new(client, config, notifications.clone());
        Self {
            controller,
            notifications,
        }
    }

    #[inline]
    pub fn controller(&self) -> &NavigationController<C> {
        &self.controller
    }

    #[inline]
    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}

#[derive(Deserialize)]
struct GoQuery {
    id: String,
}

#[derive(Deserialize)]
struct NavigateQuery {
    url: String,
}

#[derive(Deserialize)]
struct ExpandQuery {
    row: usize,
}

#[derive(Serialize)]
struct ViewStateResponse {
    current_id: Option<String>,
    loading: bool,
    generation: u64,
    bindings: Vec<LinkBinding>,
    /// Queued alerts, left in place for the next page render.
    notifications: Vec<Notification>,
}

pub struct ViewerApi;

impl ViewerApi {
    pub async fn start<C: ResourceClient + 'static>(
        viewer: Arc<Viewer<C>>,
        port: u16,
    ) -> std::io::Result<()> {
        let viewer = web::Data::from(viewer);
        // one worker: navigation events are handled on a single thread
        HttpServer::new(move || App::new().configure(|cfg| configure(cfg, viewer.clone())))
            .workers(1)
            .bind(("127.0.0.1", port))?
            .run()
            .await
    }
}

/// Registers the viewer routes on `cfg`.
pub fn configure<C: ResourceClient + 'static>(
    cfg: &mut web::ServiceConfig,
    viewer: web::Data<Viewer<C>>,
) {
    cfg.app_data(viewer)
        .route("/", web::get().to(index::<C>))
        .route("/go", web::get().to(go::<C>))
        .route("/navigate", web::get().to(navigate::<C>))
        .route("/expand", web::get().to(expand::<C>))
        .route("/state", web::get().to(state::<C>));
}

fn back_to_page() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

fn log_outcome(action: &str, outcome: Result<Outcome, Error>) {
    match outcome {
        Ok(outcome) => debug!("{} finished: {:?}", action, outcome),
        // already queued as a notification by the controller
        Err(e) => debug!("{} failed: {}", action, e),
    }
}

async fn index<C: ResourceClient + 'static>(
    viewer: web::Data<Viewer<C>>,
) -> ActixResult<HttpResponse> {
    let controller = viewer.controller();
    let result_html = controller.render_html(&ViewerHrefs);
    let notifications = viewer.notifications().drain();
    let page = render_page(&controller.controls(), &notifications, &result_html);
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(page))
}

async fn go<C: ResourceClient + 'static>(
    viewer: web::Data<Viewer<C>>,
    query: web::Query<GoQuery>,
) -> ActixResult<HttpResponse> {
    info!("Go: node id '{}'", query.id);
    log_outcome("go", viewer.controller().submit_id(&query.id).await);
    Ok(back_to_page())
}

async fn navigate<C: ResourceClient + 'static>(
    viewer: web::Data<Viewer<C>>,
    query: web::Query<NavigateQuery>,
) -> ActixResult<HttpResponse> {
    info!("Navigate: {}", query.url);
    log_outcome("navigate", viewer.controller().update_view(&query.url).await);
    Ok(back_to_page())
}

async fn expand<C: ResourceClient + 'static>(
    viewer: web::Data<Viewer<C>>,
    query: web::Query<ExpandQuery>,
) -> ActixResult<HttpResponse> {
    match viewer.controller().expand_inline(query.row).await {
        Err(Error::UnknownBinding(row)) => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("No expandable relationship at row {}", row)
        }))),
        outcome => {
            log_outcome("expand", outcome);
            Ok(back_to_page())
        }
    }
}

async fn state<C: ResourceClient + 'static>(
    viewer: web::Data<Viewer<C>>,
) -> ActixResult<HttpResponse> {
    let controller = viewer.controller();
    Ok(HttpResponse::Ok().json(ViewStateResponse {
        current_id: controller.current_id(),
        loading: controller.is_loading(),
        generation: controller.generation(),
        bindings: controller.bindings(),
        notifications: viewer.notifications().snapshot(),
    }))
}
