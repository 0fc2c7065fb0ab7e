//! Tag pages.

use actix_web::{HttpResponse, web};
use blogly_core::error::RepoError;
use blogly_shared::TagForm;
use minijinja::context;

use super::{FormBody, form_fields, or_404, redirect};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// Report a taken name by name instead of as a bare constraint failure.
fn name_taken(name: &str) -> impl FnOnce(RepoError) -> AppError + '_ {
    move |err| match err {
        RepoError::Duplicate(_) => AppError::Conflict(format!("A tag named \"{}\" already exists", name)),
        other => other.into(),
    }
}

/// GET /tags
pub async fn list_tags(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state.tags.find_all().await?;
    views::page("tags/list.html", context! { tags })
}

/// GET /tags/{id}
pub async fn show_tag(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let tag = or_404(state.tags.find_by_id(id).await?, "Tag", id)?;
    let posts = state.posts.find_by_tag_id(id).await?;

    views::page("tags/show.html", context! { tag, posts })
}

/// GET /tags/new
pub async fn new_tag_form() -> AppResult<HttpResponse> {
    views::page("tags/new.html", context! {})
}

/// POST /tags/new
pub async fn create_tag(state: web::Data<AppState>, form: FormBody) -> AppResult<HttpResponse> {
    let form = TagForm::try_from(&form_fields(form))?;

    let tag = state
        .tags
        .create(form.name.clone())
        .await
        .map_err(name_taken(&form.name))?;
    tracing::info!(tag_id = tag.id, name = %tag.name, "Tag created");

    Ok(redirect("/tags"))
}

/// GET /tags/{id}/edit
pub async fn edit_tag_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let tag = or_404(state.tags.find_by_id(id).await?, "Tag", id)?;

    views::page("tags/edit.html", context! { tag })
}

/// POST /tags/{id}/edit
pub async fn rename_tag(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: FormBody,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let form = TagForm::try_from(&form_fields(form))?;

    state
        .tags
        .rename(id, form.name.clone())
        .await
        .map_err(name_taken(&form.name))?;

    Ok(redirect("/tags"))
}

/// POST /tags/{id}/delete
pub async fn delete_tag(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.tags.delete(id).await?;

    Ok(redirect("/tags"))
}
