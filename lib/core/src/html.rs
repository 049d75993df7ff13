// HTML serialization of surfaces
use crate::surface::{
    Block, Endpoint, PropertyTable, RelationshipTable, Surface, EXPAND_LABEL, PROPERTY_HEADERS,
};

/// Maps link targets to `href` values.
pub trait Hrefs {
    fn node_link(&self, url: &str) -> String;
    fn expand_link(&self, row: usize, url: &str) -> String;
}

/// Links point straight at the graph store resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectHrefs;

impl Hrefs for DirectHrefs {
    fn node_link(&self, url: &str) -> String {
        url.to_string()
    }

    fn expand_link(&self, _row: usize, url: &str) -> String {
        url.to_string()
    }
}

pub fn render_surface(surface: &Surface, hrefs: &dyn Hrefs) -> String {
    render_blocks(surface.blocks(), hrefs)
}

pub fn render_blocks(blocks: &[Block], hrefs: &dyn Hrefs) -> String {
    let mut out = String::new();
    for block in blocks {
        write_block(&mut out, block, hrefs);
    }
    out
}

fn write_block(out: &mut String, block: &Block, hrefs: &dyn Hrefs) {
    match block {
        Block::Heading { text } => {
            out.push_str(&format!("<h2>{}</h2>\n", escape(text)));
        }
        Block::Properties(table) => write_properties(out, table),
        Block::Relationships(table) => write_relationships(out, table, hrefs),
    }
}

fn write_properties(out: &mut String, table: &PropertyTable) {
    out.push_str("<table class='properties'>\n");
    out.push_str(&format!(
        "<tr><th>{}</th><th>{}</th></tr>\n",
        PROPERTY_HEADERS[0], PROPERTY_HEADERS[1]
    ));
    for row in &table.rows {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape(&row.name),
            escape(&row.value)
        ));
    }
    out.push_str("</table>\n");
}

fn write_relationships(out: &mut String, table: &RelationshipTable, hrefs: &dyn Hrefs) {
    out.push_str("<table class='relationships'>\n<tr>");
    for header in table.mode.headers() {
        out.push_str(&format!("<th>{}</th>", header));
    }
    out.push_str("</tr>\n");

    for (index, row) in table.rows.iter().enumerate() {
        out.push_str("<tr><td>");
        write_endpoint(out, &row.start, hrefs);
        out.push_str(&format!("</td><td>{}</td><td>", escape(&row.rel_type)));
        write_endpoint(out, &row.end, hrefs);
        out.push_str("</td>");
        if let Some(expand) = &row.expand {
            out.push_str(&format!(
                "<td><a class='inlineExpandingNodeLink' href='{}'>{}</a><div class='inlineNode'>",
                escape(&hrefs.expand_link(index, &expand.target_url)),
                escape(EXPAND_LABEL)
            ));
            for block in expand.container.blocks() {
                write_block(out, block, hrefs);
            }
            out.push_str("</div></td>");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
}

fn write_endpoint(out: &mut String, endpoint: &Endpoint, hrefs: &dyn Hrefs) {
    match endpoint {
        Endpoint::ThisNode { label } => out.push_str(&escape(label)),
        Endpoint::Link { id, url } => out.push_str(&format!(
            "<a class='nodeLink' href='{}'>{}</a>",
            escape(&hrefs.node_link(url)),
            escape(id)
        )),
    }
}

/// Escapes text for use in element content and single- or double-quoted
/// attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropertyMap, PropertyValue, RelationshipResource};
    use crate::render::{render_properties, render_relationships};
    use crate::surface::{RenderMode, RenderTarget};
    use serde_json::json;

    struct RoutedHrefs;

    impl Hrefs for RoutedHrefs {
        fn node_link(&self, url: &str) -> String {
            format!("/navigate?url={}", url)
        }

        fn expand_link(&self, row: usize, _url: &str) -> String {
            format!("/expand?row={}", row)
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<b>\"x\" & 'y'</b>"),
            "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_properties_html() {
        let mut surface = Surface::new();
        surface.append(crate::render::node_heading("5"));
        let properties =
            PropertyMap::new().with_property("name", PropertyValue::from_json(&json!("<Alice>")));
        render_properties(&mut surface, &properties);

        let html = render_surface(&surface, &DirectHrefs);
        assert!(html.starts_with("<h2>Node 5</h2>\n<h2>Properties</h2>\n"));
        assert!(html.contains("<tr><th>Name</th><th>Value</th></tr>"));
        assert!(html.contains("<tr><td>name</td><td>&lt;Alice&gt;</td></tr>"));
    }

    #[test]
    fn test_relationships_html_direct_links() {
        let rels = vec![RelationshipResource::new(
            "http://host/db/data/node/5",
            "http://host/db/data/node/9",
            "KNOWS",
        )];
        let mut surface = Surface::new();
        render_relationships(&rels, "5", RenderMode::Plain).append_to(&mut surface);

        let html = render_surface(&surface, &DirectHrefs);
        assert!(html.contains("<h2>Relationships (1)</h2>"));
        assert!(html.contains("<tr><th>Start</th><th>Type</th><th>End</th></tr>"));
        assert!(html.contains(
            "<tr><td>this node</td><td>KNOWS</td><td><a class='nodeLink' href='http://host/db/data/node/9'>9</a></td></tr>"
        ));
        assert!(!html.contains("inlineExpandingNodeLink"));
    }

    #[test]
    fn test_relationships_html_expanding() {
        let rels = vec![RelationshipResource::new(
            "http://host/db/data/node/3",
            "http://host/db/data/node/5",
            "LIKES",
        )];
        let mut surface = Surface::new();
        render_relationships(&rels, "5", RenderMode::Expanding).append_to(&mut surface);

        let html = render_surface(&surface, &RoutedHrefs);
        assert!(html.contains("<th>End</th><th></th>"));
        assert!(html.contains(
            "<a class='nodeLink' href='/navigate?url=http://host/db/data/node/3'>3</a>"
        ));
        assert!(html.contains("<td>thisNode</td>"));
        assert!(html.contains(
            "<a class='inlineExpandingNodeLink' href='/expand?row=0'>+ expand</a><div class='inlineNode'></div>"
        ));
    }
}
