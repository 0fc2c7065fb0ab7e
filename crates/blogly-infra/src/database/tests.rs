#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use blogly_core::domain::{DEFAULT_IMAGE_URL, NewPost, NewUser, Post, Tag, User, UserDeletePolicy};
    use blogly_core::error::RepoError;
    use blogly_core::ports::{BaseRepository, PostRepository, TagRepository, UserRepository};
    use sea_orm::{ConnectionTrait, DatabaseBackend, DbConn, EntityTrait};

    use crate::database::entity::post_tag;
    use crate::database::{
        DatabaseConfig, SeaPostRepository, SeaTagRepository, SeaUserRepository, connect,
        create_tables,
    };

    struct Repos {
        db: DbConn,
        users: SeaUserRepository,
        posts: SeaPostRepository,
        tags: SeaTagRepository,
    }

    /// Fresh in-memory SQLite store with the full schema.
    async fn setup() -> Repos {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_owned(),
            max_connections: 1,
            min_connections: 1,
            sql_logging: false,
        };
        let db = connect(&config).await.unwrap();
        create_tables(&db).await.unwrap();

        Repos {
            users: SeaUserRepository::new(db.clone()),
            posts: SeaPostRepository::new(db.clone()),
            tags: SeaTagRepository::new(db.clone()),
            db,
        }
    }

    async fn billy(repos: &Repos) -> User {
        repos
            .users
            .create(NewUser::new("Billy".into(), "Bob".into(), None))
            .await
            .unwrap()
    }

    fn ids(tags: &[Tag]) -> BTreeSet<i32> {
        tags.iter().map(|t| t.id).collect()
    }

    #[tokio::test]
    async fn test_connect_sqlite_memory() {
        let repos = setup().await;
        assert_eq!(repos.db.get_database_backend(), DatabaseBackend::Sqlite);
    }

    #[tokio::test]
    async fn test_repositories_share_one_store() {
        let repos = setup().await;
        let user = billy(&repos).await;
        let post = repos
            .posts
            .create(NewPost::new(user.id, "Shared".into(), "Pool".into()), &BTreeSet::new())
            .await
            .unwrap();

        let by_user = repos.posts.find_by_user_id(user.id).await.unwrap();
        assert_eq!(by_user, vec![post]);
    }

    #[tokio::test]
    async fn test_create_user_default_image() {
        let repos = setup().await;

        let plain = billy(&repos).await;
        assert_eq!(plain.image_url, DEFAULT_IMAGE_URL);

        let custom = repos
            .users
            .create(NewUser::new(
                "Jane".into(),
                "Doe".into(),
                Some("https://example.com/jane.png".into()),
            ))
            .await
            .unwrap();
        assert_eq!(custom.image_url, "https://example.com/jane.png");

        let stored: Option<User> = repos.users.find_by_id(custom.id).await.unwrap();
        assert_eq!(stored, Some(custom));
    }

    #[tokio::test]
    async fn test_update_user_overwrites_fields() {
        let repos = setup().await;
        let user = billy(&repos).await;

        let updated = repos
            .users
            .update(
                user.id,
                NewUser::new("William".into(), "Robert".into(), Some("https://example.com/w.png".into())),
            )
            .await
            .unwrap();
        assert_eq!(updated.id, user.id);
        assert_eq!(updated.full_name(), "William Robert");

        let all: Vec<User> = repos.users.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let repos = setup().await;

        let err = repos
            .users
            .update(42, NewUser::new("No".into(), "One".into(), None))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_post_tags_match_created_set() {
        let repos = setup().await;
        let user = billy(&repos).await;
        let rust = repos.tags.create("rust".into()).await.unwrap();
        let web = repos.tags.create("web".into()).await.unwrap();
        let _unused = repos.tags.create("cooking".into()).await.unwrap();

        let wanted: BTreeSet<i32> = [web.id, rust.id].into_iter().collect();
        let post = repos
            .posts
            .create(NewPost::new(user.id, "Hello".into(), "World".into()), &wanted)
            .await
            .unwrap();

        let tags = repos.tags.find_by_post_id(post.id).await.unwrap();
        assert_eq!(ids(&tags), wanted);

        let by_user = repos.posts.find_by_user_id(user.id).await.unwrap();
        assert_eq!(by_user, vec![post]);
    }

    #[tokio::test]
    async fn test_create_post_with_unknown_tag_rolls_back() {
        let repos = setup().await;
        let user = billy(&repos).await;
        let tag = repos.tags.create("rust".into()).await.unwrap();

        let wanted: BTreeSet<i32> = [tag.id, 999].into_iter().collect();
        let err = repos
            .posts
            .create(NewPost::new(user.id, "Hello".into(), "World".into()), &wanted)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));

        let posts: Vec<Post> = repos.posts.find_all().await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_update_post_keeps_tags() {
        let repos = setup().await;
        let user = billy(&repos).await;
        let tag = repos.tags.create("rust".into()).await.unwrap();
        let post = repos
            .posts
            .create(
                NewPost::new(user.id, "Draft".into(), "Text".into()),
                &BTreeSet::from([tag.id]),
            )
            .await
            .unwrap();

        let updated = repos
            .posts
            .update(post.id, "Final".into(), "Better text".into())
            .await
            .unwrap();
        assert_eq!(updated.title, "Final");
        assert_eq!(updated.content, "Better text");
        assert_eq!(updated.created_at, post.created_at);
        assert_eq!(updated.user_id, user.id);

        let tags = repos.tags.find_by_post_id(post.id).await.unwrap();
        assert_eq!(tags, vec![tag]);
    }

    #[tokio::test]
    async fn test_delete_post_removes_links() {
        let repos = setup().await;
        let user = billy(&repos).await;
        let tag = repos.tags.create("rust".into()).await.unwrap();
        let post = repos
            .posts
            .create(
                NewPost::new(user.id, "Doomed".into(), "Bye".into()),
                &BTreeSet::from([tag.id]),
            )
            .await
            .unwrap();

        repos.posts.delete(post.id).await.unwrap();

        let gone: Option<Post> = repos.posts.find_by_id(post.id).await.unwrap();
        assert!(gone.is_none());
        assert!(repos.posts.find_by_tag_id(tag.id).await.unwrap().is_empty());
        let links = post_tag::Entity::find().all(&repos.db).await.unwrap();
        assert!(links.is_empty());

        let again = repos.posts.delete(post.id).await.unwrap_err();
        assert!(matches!(again, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_tag_removes_links() {
        let repos = setup().await;
        let user = billy(&repos).await;
        let rust = repos.tags.create("rust".into()).await.unwrap();
        let web = repos.tags.create("web".into()).await.unwrap();
        let post = repos
            .posts
            .create(
                NewPost::new(user.id, "Tagged".into(), "Twice".into()),
                &BTreeSet::from([rust.id, web.id]),
            )
            .await
            .unwrap();

        repos.tags.delete(rust.id).await.unwrap();

        let tags = repos.tags.find_by_post_id(post.id).await.unwrap();
        assert_eq!(tags, vec![web]);
        let remaining: Option<Tag> = repos.tags.find_by_id(rust.id).await.unwrap();
        assert!(remaining.is_none());
        let still_there: Option<Post> = repos.posts.find_by_id(post.id).await.unwrap();
        assert!(still_there.is_some());
    }

    #[tokio::test]
    async fn test_duplicate_tag_name_fails() {
        let repos = setup().await;
        repos.tags.create("rust".into()).await.unwrap();

        let err = repos.tags.create("rust".into()).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));

        let all: Vec<Tag> = repos.tags.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_rename_tag() {
        let repos = setup().await;
        let tag = repos.tags.create("Test".into()).await.unwrap();
        repos.tags.create("Taken".into()).await.unwrap();

        let renamed = repos.tags.rename(tag.id, "Edited Tag".into()).await.unwrap();
        assert_eq!(renamed.name, "Edited Tag");

        let clash = repos.tags.rename(tag.id, "Taken".into()).await.unwrap_err();
        assert!(matches!(clash, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_delete_user_restrict_blocks_when_posts_exist() {
        let repos = setup().await;
        let user = billy(&repos).await;
        repos
            .posts
            .create(NewPost::new(user.id, "Mine".into(), "Text".into()), &BTreeSet::new())
            .await
            .unwrap();

        let err = repos
            .users
            .delete(user.id, UserDeletePolicy::Restrict)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));

        let still: Option<User> = repos.users.find_by_id(user.id).await.unwrap();
        assert!(still.is_some());
    }

    #[tokio::test]
    async fn test_delete_user_cascade_removes_posts() {
        let repos = setup().await;
        let user = billy(&repos).await;
        let tag = repos.tags.create("rust".into()).await.unwrap();
        repos
            .posts
            .create(
                NewPost::new(user.id, "Mine".into(), "Text".into()),
                &BTreeSet::from([tag.id]),
            )
            .await
            .unwrap();

        repos
            .users
            .delete(user.id, UserDeletePolicy::Cascade)
            .await
            .unwrap();

        let users: Vec<User> = repos.users.find_all().await.unwrap();
        assert!(users.is_empty());
        let posts: Vec<Post> = repos.posts.find_all().await.unwrap();
        assert!(posts.is_empty());
        assert!(repos.posts.find_by_tag_id(tag.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let repos = setup().await;

        let err = repos
            .users
            .delete(5, UserDeletePolicy::Restrict)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }
}
