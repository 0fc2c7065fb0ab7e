use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::{NewPost, NewUser, Post, Tag, User, UserDeletePolicy};
use crate::error::RepoError;

/// Generic repository trait defining the shared read operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// List every entity, ordered by primary key.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    ///
    /// Absence is not an error here; callers decide whether a missing row
    /// means "not found" or simply "nothing to show".
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;
}

/// User repository.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i32> {
    async fn create(&self, user: NewUser) -> Result<User, RepoError>;

    /// Overwrite first name, last name and image URL of an existing user.
    async fn update(&self, id: i32, user: NewUser) -> Result<User, RepoError>;

    /// Delete a user. Returns [`RepoError::NotFound`] when no such user exists
    /// and [`RepoError::Constraint`] when `policy` forbids removing a user
    /// who still has posts.
    async fn delete(&self, id: i32, policy: UserDeletePolicy) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;

    async fn find_by_tag_id(&self, tag_id: i32) -> Result<Vec<Post>, RepoError>;

    /// Insert the post and one association row per tag, as a single unit of
    /// work.
    async fn create(&self, post: NewPost, tag_ids: &BTreeSet<i32>) -> Result<Post, RepoError>;

    /// Change title and content. Tag associations are left untouched.
    async fn update(&self, id: i32, title: String, content: String) -> Result<Post, RepoError>;

    /// Remove the post's tag associations, then the post, atomically.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}

/// Tag repository.
#[async_trait]
pub trait TagRepository: BaseRepository<Tag, i32> {
    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Tag>, RepoError>;

    /// Fails with [`RepoError::Duplicate`] when the name is taken.
    async fn create(&self, name: String) -> Result<Tag, RepoError>;

    async fn rename(&self, id: i32, name: String) -> Result<Tag, RepoError>;

    /// Remove the tag's post associations, then the tag, atomically.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}
