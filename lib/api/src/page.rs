// Page layout for the viewer host
use nodeview_core::{escape, ControlsWidget, Hrefs, Notification};
use nodeview_core::controls::{CONTROLS_LABEL, GO_LABEL};

/// Links on the served page route back into the viewer host.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewerHrefs;

impl Hrefs for ViewerHrefs {
    fn node_link(&self, url: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
        format!("/navigate?url={}", encoded)
    }

    fn expand_link(&self, row: usize, _url: &str) -> String {
        format!("/expand?row={}", row)
    }
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>nodeview</title>
<style>
  body { font-family: sans-serif; font-size: 14px; margin: 16px; }
  #controls { margin-bottom: 12px; }
  .alert { background: #fde8e8; border: 1px solid #e53935; padding: 6px 10px; margin: 6px 0; }
  table { border-collapse: collapse; margin-bottom: 8px; }
  th, td { border: 1px solid #ccc; padding: 3px 8px; text-align: left; vertical-align: top; }
  .inlineNode h2 { font-size: 14px; }
</style>
</head>
<body>
"#;

const PAGE_TAIL: &str = "</div>\n</body>\n</html>\n";

/// Full page: controls region, notifications, result region.
pub fn render_page(
    controls: &ControlsWidget,
    notifications: &[Notification],
    result_html: &str,
) -> String {
    let mut page = String::from(PAGE_HEAD);
    page.push_str(&format!(
        "<form id='controls' action='/go' method='get'>{} \n\
         <input type='text' name='id' value='{}' />\n\
         <button>{}</button>\n</form>\n",
        CONTROLS_LABEL,
        escape(controls.input()),
        GO_LABEL
    ));
    for notification in notifications {
        page.push_str(&format!("<div class='alert'>{}</div>\n", escape(&notification.message)));
    }
    page.push_str("<div id='result'>\n");
    page.push_str(result_html);
    page.push_str(PAGE_TAIL);
    page
}
