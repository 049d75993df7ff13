//! # nodeview API
//!
//! Viewer host: serves the controls and result regions as an HTML page and
//! routes link clicks back into the navigation controller.
//!
//! | Route | Action |
//! |---|---|
//! | `GET /` | page with controls, pending alerts and the result region |
//! | `GET /go?id=<id>` | navigate to `<base>/node/<id>` |
//! | `GET /navigate?url=<url>` | replace the view with the node at `url` |
//! | `GET /expand?row=<n>` | expand relationship row `n` inline |
//! | `GET /state` | view state as JSON |

pub mod page;
pub mod viewer;

pub use page::{render_page, ViewerHrefs};
pub use viewer::{configure, Viewer, ViewerApi};
