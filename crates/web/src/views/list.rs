//! Record table view.

use cobj_client::RecordRow;

use super::{LIST_TITLE, error_banner, escape_html, layout};

/// Render the record table with one row per record.
///
/// With no rows an empty-state line follows the table header.
pub fn render_list(labels: &[String; 3], rows: &[RecordRow], error: Option<&str>) -> String {
    let header: String = labels
        .iter()
        .map(|label| format!("<th>{}</th>", escape_html(label)))
        .collect();

    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .values
                .iter()
                .map(|v| format!("<td>{}</td>", escape_html(v)))
                .collect();
            format!(r#"<tr data-id="{}">{}</tr>"#, escape_html(&row.id), cells)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let empty = if rows.is_empty() {
        r#"<p class="empty">No records found.</p>"#
    } else {
        ""
    };

    let content = format!(
        r#"<h1>Custom Objects</h1>
<p class="actions"><a class="btn" href="/update-cobj">Add a new record</a></p>
{banner}<table>
<thead><tr>{header}</tr></thead>
<tbody>
{body}
</tbody>
</table>
{empty}"#,
        banner = error_banner(error),
    );

    layout(LIST_TITLE, &content)
}
