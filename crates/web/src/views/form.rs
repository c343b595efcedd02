//! Record creation form view.

use super::{FORM_TITLE, error_banner, escape_html, layout};

/// Render the creation form with one text input per configured property.
///
/// Inputs are named `prop1`..`prop3` and post to `/update-cobj`.
pub fn render_form(labels: &[String; 3], error: Option<&str>) -> String {
    let fields: String = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let name = format!("prop{}", i + 1);
            format!(
                r#"<div class="form-group">
<label for="{name}">{label}</label>
<input type="text" id="{name}" name="{name}">
</div>
"#,
                label = escape_html(label),
            )
        })
        .collect();

    let content = format!(
        r#"<h1>Add a custom object record</h1>
{banner}<form method="post" action="/update-cobj">
{fields}<button class="btn" type="submit">Submit</button>
</form>
<p class="actions"><a href="/">Return to the records table</a></p>"#,
        banner = error_banner(error),
    );

    layout(FORM_TITLE, &content)
}
