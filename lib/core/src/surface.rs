// Display surfaces: the result region and the inline containers nested in it
use serde::Serialize;

/// Anything rendered output can be appended to.
pub trait RenderTarget {
    fn append(&mut self, block: Block);
    fn clear(&mut self);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { text: String },
    Properties(PropertyTable),
    Relationships(RelationshipTable),
}

impl Block {
    pub fn heading(text: impl Into<String>) -> Self {
        Block::Heading { text: text.into() }
    }
}

pub const PROPERTY_HEADERS: [&str; 2] = ["Name", "Value"];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertyTable {
    pub rows: Vec<PropertyRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyRow {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Endpoints are navigation links only.
    Plain,
    /// Each row additionally gets an expand control and an inline container.
    Expanding,
}

impl RenderMode {
    /// Text shown in place of a link for the current node.
    pub fn this_node_label(self) -> &'static str {
        match self {
            RenderMode::Plain => "this node",
            RenderMode::Expanding => "thisNode",
        }
    }

    pub fn headers(self) -> &'static [&'static str] {
        match self {
            RenderMode::Plain => &["Start", "Type", "End"],
            RenderMode::Expanding => &["Start", "Type", "End", ""],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipTable {
    pub mode: RenderMode,
    pub rows: Vec<RelationshipRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipRow {
    pub start: Endpoint,
    pub rel_type: String,
    pub end: Endpoint,
    pub expand: Option<ExpandControl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Endpoint {
    ThisNode { label: String },
    Link { id: String, url: String },
}

impl Endpoint {
    #[inline]
    pub fn is_link(&self) -> bool {
        matches!(self, Endpoint::Link { .. })
    }
}

pub const EXPAND_LABEL: &str = "+ expand";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandControl {
    pub target_url: String,
    pub container: InlineContainer,
}

/// Row-scoped container an inline expansion renders into.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InlineContainer {
    blocks: Vec<Block>,
}

impl InlineContainer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl RenderTarget for InlineContainer {
    fn append(&mut self, block: Block) {
        self.blocks.push(block);
    }

    fn clear(&mut self) {
        self.blocks.clear();
    }
}

/// The result region.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Surface {
    blocks: Vec<Block>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The most recently rendered relationship table, if any.
    pub fn relationships(&self) -> Option<&RelationshipTable> {
        self.blocks.iter().rev().find_map(|block| match block {
            Block::Relationships(table) => Some(table),
            _ => None,
        })
    }

    pub fn property_tables(&self) -> impl Iterator<Item = &PropertyTable> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Properties(table) => Some(table),
            _ => None,
        })
    }

    /// Inline container of `row` in the most recent relationship table.
    pub fn inline_container(&self, row: usize) -> Option<&InlineContainer> {
        self.relationships()?
            .rows
            .get(row)?
            .expand
            .as_ref()
            .map(|expand| &expand.container)
    }

    pub fn inline_container_mut(&mut self, row: usize) -> Option<&mut InlineContainer> {
        let table = self.blocks.iter_mut().rev().find_map(|block| match block {
            Block::Relationships(table) => Some(table),
            _ => None,
        })?;
        table
            .rows
            .get_mut(row)?
            .expand
            .as_mut()
            .map(|expand| &mut expand.container)
    }
}

impl RenderTarget for Surface {
    fn append(&mut self, block: Block) {
        self.blocks.push(block);
    }

    fn clear(&mut self) {
        self.blocks.clear();
    }
}
