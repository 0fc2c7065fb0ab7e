//! Server-rendered HTML views.
//!
//! Templates are compiled into the binary and parsed lazily on first use.

use std::sync::LazyLock;

use actix_web::{HttpResponse, http::header::ContentType};
use blogly_shared::ErrorResponse;
use minijinja::{Environment, Value, context, default_auto_escape_callback};

use crate::middleware::error::AppResult;

static ENV: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.set_auto_escape_callback(default_auto_escape_callback);
    env.set_loader(embedded_template_loader);
    env
});

/// Render a template to a string.
pub fn render(template_name: &str, ctx: Value) -> Result<String, minijinja::Error> {
    ENV.get_template(template_name)?.render(ctx)
}

/// Render a template as a `200 OK` HTML response.
pub fn page(template_name: &str, ctx: Value) -> AppResult<HttpResponse> {
    let body = render(template_name, ctx)?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

pub fn render_error(problem: &ErrorResponse) -> Result<String, minijinja::Error> {
    render("error.html", context! { problem })
}

fn embedded_template_loader(name: &str) -> Result<Option<String>, minijinja::Error> {
    let template_content = match name {
        "base.html" => Some(include_str!("../templates/base.html")),
        "error.html" => Some(include_str!("../templates/error.html")),

        // Users
        "users/list.html" => Some(include_str!("../templates/users/list.html")),
        "users/show.html" => Some(include_str!("../templates/users/show.html")),
        "users/new.html" => Some(include_str!("../templates/users/new.html")),
        "users/edit.html" => Some(include_str!("../templates/users/edit.html")),

        // Posts
        "posts/show.html" => Some(include_str!("../templates/posts/show.html")),
        "posts/new.html" => Some(include_str!("../templates/posts/new.html")),
        "posts/edit.html" => Some(include_str!("../templates/posts/edit.html")),

        // Tags
        "tags/list.html" => Some(include_str!("../templates/tags/list.html")),
        "tags/show.html" => Some(include_str!("../templates/tags/show.html")),
        "tags/new.html" => Some(include_str!("../templates/tags/new.html")),
        "tags/edit.html" => Some(include_str!("../templates/tags/edit.html")),

        _ => None,
    };

    Ok(template_content.map(|s| s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_page_renders_problem() {
        let html = render_error(&ErrorResponse::not_found("User with id 9 not found")).unwrap();
        assert!(html.contains("404"));
        assert!(html.contains("User with id 9 not found"));
    }

    #[test]
    fn test_output_is_escaped() {
        let html = render(
            "tags/list.html",
            context! { tags => vec![context! { id => 1, name => "<script>" }] },
        )
        .unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_unknown_template() {
        assert!(render("nope.html", context! {}).is_err());
    }
}
