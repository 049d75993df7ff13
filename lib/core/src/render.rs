// Node property and relationship rendering
//
// Renderers only build blocks; they never fetch. Relationship rendering also
// returns the link bindings the controller installs for the render pass.

use crate::model::{PropertyMap, RelationshipResource};
use crate::surface::{
    Block, Endpoint, ExpandControl, InlineContainer, PropertyRow, PropertyTable, RelationshipRow,
    RelationshipTable, RenderMode, RenderTarget,
};
use serde::Serialize;

pub const PROPERTIES_HEADING: &str = "Properties";

/// Appends a `Properties` heading and a Name/Value table to `target`.
///
/// Used for both the result surface and inline containers.
pub fn render_properties<T: RenderTarget + ?Sized>(target: &mut T, properties: &PropertyMap) {
    target.append(Block::heading(PROPERTIES_HEADING));
    target.append(Block::Properties(property_table(properties)));
}

pub fn property_table(properties: &PropertyMap) -> PropertyTable {
    PropertyTable {
        rows: properties
            .iter()
            .map(|(name, value)| PropertyRow {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect(),
    }
}

/// Heading rendered above a node's properties.
pub fn node_heading(id: &str) -> Block {
    Block::heading(format!("Node {}", id))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Replace the whole view with the target node.
    Navigate,
    /// Render the target node's properties beneath the row.
    Expand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkSlot {
    Start,
    End,
    Expand,
}

/// One clickable element produced by a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkBinding {
    pub row: usize,
    pub slot: LinkSlot,
    pub target_url: String,
    pub kind: LinkKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRelationships {
    pub table: RelationshipTable,
    pub bindings: Vec<LinkBinding>,
}

impl RenderedRelationships {
    /// Appends the `Relationships (n)` heading and the table, handing back the
    /// bindings for the caller to install.
    pub fn append_to<T: RenderTarget + ?Sized>(self, target: &mut T) -> Vec<LinkBinding> {
        target.append(Block::heading(format!("Relationships ({})", self.table.rows.len())));
        target.append(Block::Relationships(self.table));
        self.bindings
    }
}

/// Builds the relationship table for the node `current_id`.
///
/// Rows keep input order. An endpoint equal to `current_id` is rendered as
/// plain text, every other endpoint as a navigation link to its resource URL.
pub fn render_relationships(
    relationships: &[RelationshipResource],
    current_id: &str,
    mode: RenderMode,
) -> RenderedRelationships {
    let current_id = current_id.trim();
    let mut rows = Vec::with_capacity(relationships.len());
    let mut bindings = Vec::new();

    for (row, rel) in relationships.iter().enumerate() {
        let start_is_current = rel.start_id() == current_id;

        let start = endpoint(&rel.start, rel.start_id(), start_is_current, mode);
        if start.is_link() {
            bindings.push(LinkBinding {
                row,
                slot: LinkSlot::Start,
                target_url: rel.start.clone(),
                kind: LinkKind::Navigate,
            });
        }

        let end = endpoint(&rel.end, rel.end_id(), rel.end_id() == current_id, mode);
        if end.is_link() {
            bindings.push(LinkBinding {
                row,
                slot: LinkSlot::End,
                target_url: rel.end.clone(),
                kind: LinkKind::Navigate,
            });
        }

        let expand = match mode {
            RenderMode::Plain => None,
            RenderMode::Expanding => {
                let target_url = if start_is_current { &rel.end } else { &rel.start };
                bindings.push(LinkBinding {
                    row,
                    slot: LinkSlot::Expand,
                    target_url: target_url.clone(),
                    kind: LinkKind::Expand,
                });
                Some(ExpandControl {
                    target_url: target_url.clone(),
                    container: InlineContainer::new(),
                })
            }
        };

        rows.push(RelationshipRow {
            start,
            rel_type: rel.rel_type.clone(),
            end,
            expand,
        });
    }

    RenderedRelationships {
        table: RelationshipTable { mode, rows },
        bindings,
    }
}

fn endpoint(url: &str, id: &str, is_current: bool, mode: RenderMode) -> Endpoint {
    if is_current {
        Endpoint::ThisNode {
            label: mode.this_node_label().to_string(),
        }
    } else {
        Endpoint::Link {
            id: id.to_string(),
            url: url.to_string(),
        }
    }
}
