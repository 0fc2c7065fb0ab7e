//! HTTP handlers and route configuration.

mod posts;
mod tags;
mod users;


use actix_web::{HttpResponse, http::header, web};
use blogly_core::DomainError;
use blogly_shared::FormFields;

use crate::middleware::error::{AppError, AppResult};

/// Urlencoded body as ordered pairs; repeated names (such as `tags`) survive.
type FormBody = web::Form<Vec<(String, String)>>;

/// Largest form body accepted. Post content is unbounded text, so the
/// extractor's 16 KiB default is far too small.
const FORM_LIMIT: usize = 1024 * 1024;

/// Form extractor settings: raised size limit, and extractor failures
/// rendered as HTML error pages like every other error.
fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(FORM_LIMIT)
        .error_handler(|err, _req| AppError::from(err).into())
}

/// Configure all application routes.
///
/// `/new` resources are registered before their `/{id}` siblings so the
/// literal segment wins.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .route("/", web::get().to(users::list_users))
        .service(
            web::scope("/users")
                .route("", web::get().to(users::list_users))
                .service(
                    web::resource("/new")
                        .route(web::get().to(users::new_user_form))
                        .route(web::post().to(users::create_user)),
                )
                .route("/{id}", web::get().to(users::show_user))
                .service(
                    web::resource("/{id}/edit")
                        .route(web::get().to(users::edit_user_form))
                        .route(web::post().to(users::update_user)),
                )
                .route("/{id}/delete", web::post().to(users::delete_user))
                .service(
                    web::resource("/{id}/posts/new")
                        .route(web::get().to(posts::new_post_form))
                        .route(web::post().to(posts::create_post)),
                ),
        )
        .service(
            web::scope("/posts")
                .route("/{id}", web::get().to(posts::show_post))
                .service(
                    web::resource("/{id}/edit")
                        .route(web::get().to(posts::edit_post_form))
                        .route(web::post().to(posts::update_post)),
                )
                .route("/{id}/delete", web::post().to(posts::delete_post)),
        )
        .service(
            web::scope("/tags")
                .route("", web::get().to(tags::list_tags))
                .service(
                    web::resource("/new")
                        .route(web::get().to(tags::new_tag_form))
                        .route(web::post().to(tags::create_tag)),
                )
                .route("/{id}", web::get().to(tags::show_tag))
                .service(
                    web::resource("/{id}/edit")
                        .route(web::get().to(tags::edit_tag_form))
                        .route(web::post().to(tags::rename_tag)),
                )
                .route("/{id}/delete", web::post().to(tags::delete_tag)),
        );
}

/// Turn an optional lookup result into a 404 when the row is absent.
fn or_404<T>(found: Option<T>, entity_type: &'static str, id: i32) -> AppResult<T> {
    found.ok_or_else(|| DomainError::not_found(entity_type, id).into())
}

/// `303 See Other` back to a listing or detail page after a submission.
fn redirect(location: impl Into<String>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.into()))
        .finish()
}

fn form_fields(form: FormBody) -> FormFields {
    FormFields::new(form.into_inner())
}
