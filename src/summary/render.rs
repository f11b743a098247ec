//! HTML rendering of the summary panel.

use askama::Template;

use crate::error::Result;

use super::SummaryPanel;

/// Summary panel fragment
#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<aside class="booking-summary">
  <h3 class="summary-name">{{ name }}</h3>
  <p class="summary-location"><span>{{ location }}</span></p>
  <ul class="info-list">
  {%- for label in info_labels %}
    <li class="info-item"><span class="info-label">{{ label }}</span></li>
  {%- endfor %}
  </ul>
  <p class="total">Total: <span class="total-amount">{{ total }}</span></p>
</aside>"#
)]
struct SummaryTemplate<'a> {
    name: &'a str,
    location: &'a str,
    info_labels: &'a [String],
    total: &'a str,
}

/// Render the panel as an HTML fragment; user-entered text is escaped.
pub fn render_summary_html(panel: &SummaryPanel) -> Result<String> {
    let template = SummaryTemplate {
        name: &panel.name,
        location: &panel.location,
        info_labels: &panel.info_labels,
        total: &panel.total,
    };
    Ok(template.render()?)
}
