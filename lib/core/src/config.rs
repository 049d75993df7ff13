use crate::surface::RenderMode;
use crate::url::node_url;
use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:7474/db/data";
pub const DEFAULT_INITIAL_NODE: &str = "0";

/// Viewer configuration
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Graph store REST root; node URLs are `<base_url>/node/<id>`.
    pub base_url: String,
    pub initial_node_id: String,
    /// Relationship rows get an inline expand control.
    pub inline_expansion: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            initial_node_id: DEFAULT_INITIAL_NODE.to_string(),
            inline_expansion: true,
        }
    }
}

impl ViewerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(Error::InvalidConfig(format!(
                "base url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.initial_node_id.trim().is_empty() {
            return Err(Error::InvalidConfig("initial node id is empty".to_string()));
        }
        Ok(())
    }

    #[inline]
    pub fn render_mode(&self) -> RenderMode {
        if self.inline_expansion {
            RenderMode::Expanding
        } else {
            RenderMode::Plain
        }
    }

    pub fn node_url(&self, id: &str) -> String {
        node_url(&self.base_url, id)
    }

    pub fn initial_node_url(&self) -> String {
        self.node_url(&self.initial_node_id)
    }
}
