// Navigation controller
//
// Drives node loads and inline expansions against a ResourceClient and renders
// into the shared result surface. Every primary load stamps a generation token;
// a continuation whose token is no longer the latest discards its output.
// Inline expansions additionally carry a per-row token so only the newest
// click on a row renders.
//
// The state mutex is never held across an await.

use crate::client::ResourceClient;
use crate::config::ViewerConfig;
use crate::controls::{ControlsWidget, Key};
use crate::html::{render_surface, Hrefs};
use crate::model::{NodeResource, RelationshipResource};
use crate::notify::Notifier;
use crate::render::{node_heading, render_properties, render_relationships, LinkBinding, LinkKind};
use crate::state::{Generation, ViewState};
use crate::surface::{RenderTarget, Surface};
use crate::url::extract_id;
use crate::{Error, Result};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// How a navigation or expansion request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// All output was written to the surface.
    Rendered,
    /// A newer request took over; this one's output was dropped.
    Superseded,
    /// Nothing to do (empty controls input).
    Ignored,
}

#[derive(Debug, Default)]
struct ViewInner {
    view: ViewState,
    controls: ControlsWidget,
    surface: Surface,
    bindings: Vec<LinkBinding>,
    expansions: HashMap<usize, u64>,
    next_expansion: u64,
    loading: bool,
}

pub struct NavigationController<C> {
    client: C,
    config: ViewerConfig,
    notifier: Arc<dyn Notifier>,
    generation: Generation,
    inner: Mutex<ViewInner>,
}

impl<C: ResourceClient> NavigationController<C> {
    pub fn new(client: C, config: ViewerConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            config,
            notifier,
            generation: Generation::new(),
            inner: Mutex::new(ViewInner::default()),
        }
    }

    #[inline]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn current_id(&self) -> Option<String> {
        self.inner.lock().view.current_id().map(str::to_string)
    }

    pub fn controls(&self) -> ControlsWidget {
        self.inner.lock().controls.clone()
    }

    pub fn surface(&self) -> Surface {
        self.inner.lock().surface.clone()
    }

    /// Link bindings installed by the latest relationship render pass.
    pub fn bindings(&self) -> Vec<LinkBinding> {
        self.inner.lock().bindings.clone()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation.latest()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().loading
    }

    pub fn render_html(&self, hrefs: &dyn Hrefs) -> String {
        render_surface(&self.inner.lock().surface, hrefs)
    }

    /// Loads the configured initial node into the (empty) surface.
    pub async fn load_initial(&self) -> Result<Outcome> {
        let url = self.config.initial_node_url();
        self.load_node(&url).await
    }

    /// Appends the node at `url` to the result surface: heading, properties,
    /// then relationships.
    pub async fn load_node(&self, url: &str) -> Result<Outcome> {
        let token = self.generation.advance();
        self.load_node_with(token, url, extract_id(url)).await
    }

    /// Clears the result surface and loads the node at `url`.
    pub async fn update_view(&self, url: &str) -> Result<Outcome> {
        self.replace_view(url, extract_id(url)).await
    }

    async fn replace_view(&self, url: &str, id: &str) -> Result<Outcome> {
        let token = {
            let mut inner = self.inner.lock();
            let token = self.generation.advance();
            inner.surface.clear();
            inner.bindings.clear();
            inner.expansions.clear();
            token
        };
        self.load_node_with(token, url, id).await
    }

    /// Takes `input` as typed into the controls and navigates to that node.
    /// The trimmed input is used as the id even when it is empty.
    pub async fn submit_id(&self, input: &str) -> Result<Outcome> {
        let (url, id) = {
            let mut inner = self.inner.lock();
            inner.controls.set_input(input);
            let url = inner.controls.submit(&self.config.base_url);
            (url, inner.controls.id().to_string())
        };
        self.replace_view(&url, &id).await
    }

    /// Key press in the controls input. Enter navigates to the typed id.
    pub async fn key_press(&self, key: Key) -> Result<Outcome> {
        let target = {
            let inner = self.inner.lock();
            inner
                .controls
                .key_press(key, &self.config.base_url)
                .map(|url| (url, inner.controls.id().to_string()))
        };
        match target {
            Some((url, id)) => self.replace_view(&url, &id).await,
            None => Ok(Outcome::Ignored),
        }
    }

    /// Dispatches a binding from the latest render pass.
    pub async fn activate(&self, binding: &LinkBinding) -> Result<Outcome> {
        match binding.kind {
            LinkKind::Navigate => self.update_view(&binding.target_url).await,
            LinkKind::Expand => self.expand_inline(binding.row).await,
        }
    }

    /// Fetches the expand target of `row` and renders its properties into the
    /// row's inline container, replacing whatever it held.
    pub async fn expand_inline(&self, row: usize) -> Result<Outcome> {
        let (view_token, expansion_token, url) = {
            let mut guard = self.inner.lock();
            let inner = &mut *guard;
            let url = inner
                .bindings
                .iter()
                .find(|b| b.row == row && b.kind == LinkKind::Expand)
                .map(|b| b.target_url.clone())
                .ok_or(Error::UnknownBinding(row))?;

            let container = inner
                .surface
                .inline_container_mut(row)
                .ok_or(Error::UnknownBinding(row))?;
            container.clear();
            container.append(node_heading(extract_id(&url)));

            inner.next_expansion += 1;
            let expansion_token = inner.next_expansion;
            inner.expansions.insert(row, expansion_token);
            (self.generation.latest(), expansion_token, url)
        };

        debug!("Expanding row {} inline with {}", row, url);
        let fetched = self
            .client
            .fetch(&url)
            .await
            .and_then(|body| NodeResource::from_json(&url, body));

        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        let current = self.generation.is_current(view_token)
            && inner.expansions.get(&row) == Some(&expansion_token);
        if !current {
            debug!("Discarding stale expansion of row {}", row);
            return Ok(Outcome::Superseded);
        }

        match fetched {
            Ok(node) => {
                let container = inner
                    .surface
                    .inline_container_mut(row)
                    .ok_or(Error::UnknownBinding(row))?;
                render_properties(container, &node.properties);
                Ok(Outcome::Rendered)
            }
            Err(e) => {
                drop(guard);
                self.notifier.notify(&e);
                Err(e)
            }
        }
    }

    async fn load_node_with(&self, token: u64, url: &str, id: &str) -> Result<Outcome> {
        let id = id.trim().to_string();
        {
            let mut inner = self.inner.lock();
            if !self.generation.is_current(token) {
                return Ok(Outcome::Superseded);
            }
            inner.view.set_id(&id);
            inner.controls.set_input_if_changed(&id);
            inner.surface.append(node_heading(&id));
            inner.loading = true;
        }
        info!("Loading node {} from {}", id, url);

        let node = match self
            .client
            .fetch(url)
            .await
            .and_then(|body| NodeResource::from_json(url, body))
        {
            Ok(node) => node,
            Err(e) => return self.fail(token, e),
        };

        {
            let mut inner = self.inner.lock();
            if !self.generation.is_current(token) {
                debug!("Discarding stale node {}", id);
                return Ok(Outcome::Superseded);
            }
            render_properties(&mut inner.surface, &node.properties);
        }

        let relationships_url = node.all_relationships;
        let relationships = match self
            .client
            .fetch(&relationships_url)
            .await
            .and_then(|body| RelationshipResource::list_from_json(&relationships_url, body))
        {
            Ok(relationships) => relationships,
            Err(e) => return self.fail(token, e),
        };

        let mut guard = self.inner.lock();
        if !self.generation.is_current(token) {
            debug!("Discarding stale relationships of node {}", id);
            return Ok(Outcome::Superseded);
        }
        let inner = &mut *guard;
        let current_id = inner.view.current_id().unwrap_or(&id);
        let rendered = render_relationships(&relationships, current_id, self.config.render_mode());
        inner.bindings = rendered.append_to(&mut inner.surface);
        inner.expansions.clear();
        inner.loading = false;
        info!("Rendered node {} with {} relationships", id, relationships.len());
        Ok(Outcome::Rendered)
    }

    fn fail(&self, token: u64, error: Error) -> Result<Outcome> {
        {
            let mut inner = self.inner.lock();
            if !self.generation.is_current(token) {
                debug!("Dropping failure of superseded load: {}", error);
                return Ok(Outcome::Superseded);
            }
            inner.loading = false;
        }
        self.notifier.notify(&error);
        Err(error)
    }
}
