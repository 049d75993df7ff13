//! # nodeview
//!
//! A small viewer for graph database REST node and relationship resources
//! (the Neo4j `/db/data/node/<id>` layout).
//!
//! It fetches a node, renders its properties as a table and its relationships
//! as a table of links. Links either replace the view with the linked node or
//! expand that node's properties inline beneath the relationship row.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! nodeview serve --base-url http://localhost:7474/db/data --initial-node 0 --port 7475
//! ```
//!
//! ### One-shot render
//!
//! ```bash
//! nodeview render 42 > node-42.html
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use nodeview::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<()> {
//! let client = HttpResourceClient::new(ClientConfig::default())?;
//! let notifications = Arc::new(Notifications::new());
//! let controller = NavigationController::new(client, ViewerConfig::default(), notifications);
//!
//! controller.update_view("http://localhost:7474/db/data/node/5").await?;
//! println!("{}", controller.render_html(&DirectHrefs));
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - `nodeview-core` - resource model, id extraction, rendering, navigation controller
//! - `nodeview-client` - reqwest resource client
//! - `nodeview-api` - actix-web viewer host

// Re-export core types
pub use nodeview_core::{
    extract_id, node_url, render_properties, render_relationships, DirectHrefs, Error, Hrefs,
    LinkBinding, LinkKind, NavigationController, NodeResource, Notifications, Outcome, PropertyMap,
    PropertyValue, RelationshipResource, RenderMode, ResourceClient, Result, Surface, ViewState,
    ViewerConfig,
};

// Re-export client
pub use nodeview_client::{ClientConfig, HttpResourceClient};

// Re-export API
pub use nodeview_api::{Viewer, ViewerApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClientConfig, DirectHrefs, Error, HttpResourceClient, NavigationController, Notifications,
        Outcome, RelationshipResource, RenderMode, ResourceClient, Result, Surface, ViewerConfig,
    };
}
