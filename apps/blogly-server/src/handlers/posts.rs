//! Post pages, including the "add post" form nested under a user.

use actix_web::{HttpResponse, web};
use blogly_core::domain::NewPost;
use blogly_shared::PostForm;
use minijinja::context;

use super::{FormBody, form_fields, or_404, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views;

/// GET /users/{id}/posts/new
pub async fn new_post_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let user = or_404(state.users.find_by_id(user_id).await?, "User", user_id)?;
    let tags = state.tags.find_all().await?;

    views::page("posts/new.html", context! { user, tags })
}

/// POST /users/{id}/posts/new
pub async fn create_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: FormBody,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let user = or_404(state.users.find_by_id(user_id).await?, "User", user_id)?;
    let form = PostForm::try_from(&form_fields(form))?;

    let post = state
        .posts
        .create(NewPost::new(user.id, form.title, form.content), &form.tag_ids)
        .await?;
    tracing::info!(
        post_id = post.id,
        user_id,
        tags = form.tag_ids.len(),
        "Post created"
    );

    Ok(redirect(format!("/users/{}", user_id)))
}

/// GET /posts/{id}
pub async fn show_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = or_404(state.posts.find_by_id(id).await?, "Post", id)?;
    let tags = state.tags.find_by_post_id(id).await?;
    let author_name = state
        .users
        .find_by_id(post.user_id)
        .await?
        .map(|user| user.full_name())
        .unwrap_or_else(|| "unknown author".to_string());
    let created = post
        .created_at
        .format("%a %b %-d %Y, %-I:%M %p")
        .to_string();

    views::page(
        "posts/show.html",
        context! { post, tags, author_name, created },
    )
}

/// GET /posts/{id}/edit
pub async fn edit_post_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = or_404(state.posts.find_by_id(id).await?, "Post", id)?;
    let tags = state.tags.find_all().await?;
    let post_tag_ids: Vec<i32> = state
        .tags
        .find_by_post_id(id)
        .await?
        .into_iter()
        .map(|tag| tag.id)
        .collect();

    views::page(
        "posts/edit.html",
        context! { post, tags, post_tag_ids },
    )
}

/// POST /posts/{id}/edit
///
/// Only title and content change; tags chosen at creation stay as they are.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: FormBody,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let form = PostForm::try_from(&form_fields(form))?;

    state.posts.update(id, form.title, form.content).await?;

    Ok(redirect(format!("/posts/{}", id)))
}

/// POST /posts/{id}/delete
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;

    Ok(redirect("/users"))
}
