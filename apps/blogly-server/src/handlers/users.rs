//! User pages.

use actix_web::{HttpResponse, web};
use blogly_core::domain::NewUser;
use blogly_shared::UserForm;
use minijinja::context;

use super::{FormBody, form_fields, or_404, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views;

/// GET / and GET /users
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users: Vec<_> = state
        .users
        .find_all()
        .await?
        .iter()
        .map(|user| context! { id => user.id, full_name => user.full_name() })
        .collect();
    views::page("users/list.html", context! { users })
}

/// GET /users/new
pub async fn new_user_form() -> AppResult<HttpResponse> {
    views::page("users/new.html", context! {})
}

/// POST /users/new
pub async fn create_user(state: web::Data<AppState>, form: FormBody) -> AppResult<HttpResponse> {
    let form = UserForm::try_from(&form_fields(form))?;

    let user = state
        .users
        .create(NewUser::new(form.first_name, form.last_name, form.image_url))
        .await?;
    tracing::info!(user_id = user.id, name = %user.full_name(), "User created");

    Ok(redirect("/users"))
}

/// GET /users/{id}
pub async fn show_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let user = or_404(state.users.find_by_id(id).await?, "User", id)?;
    let posts = state.posts.find_by_user_id(id).await?;

    views::page(
        "users/show.html",
        context! { full_name => user.full_name(), user, posts },
    )
}

/// GET /users/{id}/edit
pub async fn edit_user_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let user = or_404(state.users.find_by_id(id).await?, "User", id)?;

    views::page("users/edit.html", context! { user })
}

/// POST /users/{id}/edit
///
/// Redirects to the user list rather than the user's own page.
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: FormBody,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let form = UserForm::try_from(&form_fields(form))?;

    state
        .users
        .update(id, NewUser::new(form.first_name, form.last_name, form.image_url))
        .await?;

    Ok(redirect("/users"))
}

/// POST /users/{id}/delete
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.users.delete(id, state.user_delete_policy).await?;

    Ok(redirect("/users"))
}
