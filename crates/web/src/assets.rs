//! Embedded static assets.

use axum::http::header;
use axum::response::IntoResponse;

/// Stylesheet served at `/css/style.css`.
pub const STYLESHEET: &str = r#"*{margin:0;padding:0;box-sizing:border-box}
body{background:#f5f8fa;color:#33475b;font-family:'Lexend Deca',system-ui,sans-serif;line-height:1.5}
a{color:#0091ae;text-decoration:none}a:hover{text-decoration:underline}
.nav{background:#2d3e50;padding:0.75rem 2rem;display:flex;align-items:center;gap:1.5rem}
.nav .brand{color:#fff;font-weight:600}.nav a{color:#cbd6e2}.nav a:hover{color:#fff}
.container{max-width:960px;margin:0 auto;padding:2rem 1.5rem}
h1{font-size:1.6rem;margin-bottom:1rem}
.actions{margin-bottom:1.25rem}
.btn{display:inline-block;background:#ff7a59;color:#fff;border:none;padding:0.55rem 1.1rem;border-radius:4px;cursor:pointer;font-size:0.95rem}
.btn:hover{background:#ff8f73;text-decoration:none}
.error{background:#fde8e4;border:1px solid #f2545b;color:#b3222a;padding:0.75rem 1rem;border-radius:4px;margin-bottom:1.25rem}
table{width:100%;border-collapse:collapse;background:#fff;border:1px solid #cbd6e2}
th,td{padding:0.7rem 0.9rem;text-align:left;border-bottom:1px solid #eaf0f6}
th{background:#eaf0f6;font-weight:600;font-size:0.85rem;text-transform:uppercase;letter-spacing:0.03em}
.empty{color:#7c98b6;padding:1rem 0}
form{background:#fff;border:1px solid #cbd6e2;border-radius:4px;padding:1.5rem;max-width:520px}
.form-group{margin-bottom:1rem}
.form-group label{display:block;font-weight:600;font-size:0.9rem;margin-bottom:0.3rem}
input[type=text]{width:100%;padding:0.5rem;border:1px solid #cbd6e2;border-radius:3px;font-size:0.95rem}
input[type=text]:focus{outline:none;border-color:#0091ae}
"#;

/// `GET /css/style.css`
pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLESHEET,
    )
}
