//! # nodeview Core
//!
//! Core library for the nodeview graph store viewer.
//!
//! This crate holds everything that does not touch the network or a server:
//!
//! - [`extract_id`] - node id from a resource URL
//! - [`NodeResource`] / [`RelationshipResource`] - decoded REST representations
//! - [`render_properties`] / [`render_relationships`] - table rendering into a [`Surface`]
//! - [`NavigationController`] - node loads, full-view navigation and inline expansion
//! - [`ResourceClient`] - the seam the HTTP client plugs into
//!
//! ## Example
//!
//! ```rust
//! use nodeview_core::{render_relationships, Endpoint, RelationshipResource, RenderMode};
//!
//! let rels = vec![RelationshipResource::new(
//!     "http://localhost:7474/db/data/node/5",
//!     "http://localhost:7474/db/data/node/9",
//!     "KNOWS",
//! )];
//! let rendered = render_relationships(&rels, "5", RenderMode::Plain);
//!
//! let row = &rendered.table.rows[0];
//! assert!(!row.start.is_link());
//! assert!(matches!(&row.end, Endpoint::Link { id, .. } if id == "9"));
//! ```

pub mod client;
pub mod config;
pub mod controller;
pub mod controls;
pub mod error;
pub mod html;
pub mod model;
pub mod notify;
pub mod render;
pub mod state;
pub mod surface;
pub mod url;

pub use client::ResourceClient;
pub use config::{ViewerConfig, DEFAULT_BASE_URL, DEFAULT_INITIAL_NODE};
pub use controller::{NavigationController, Outcome};
pub use controls::{ControlsWidget, Key};
pub use error::{Error, Result};
pub use html::{escape, render_blocks, render_surface, DirectHrefs, Hrefs};
pub use model::{NodeResource, PropertyMap, PropertyValue, RelationshipResource, Scalar};
pub use notify::{Notification, Notifications, Notifier};
pub use render::{
    render_properties, render_relationships, LinkBinding, LinkKind, LinkSlot,
    RenderedRelationships,
};
pub use state::{Generation, ViewState};
pub use surface::{
    Block, Endpoint, InlineContainer, PropertyTable, RelationshipRow, RelationshipTable, RenderMode,
    RenderTarget, Surface,
};
pub use url::{extract_id, node_url};
