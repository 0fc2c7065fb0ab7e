//! SeaORM repository implementations.

use std::collections::BTreeSet;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait, Unchanged,
};

use blogly_core::domain::{NewPost, NewUser, Post, Tag, User, UserDeletePolicy};
use blogly_core::error::RepoError;
use blogly_core::ports::{PostRepository, TagRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_tag::{self, Entity as PostTagEntity};
use super::entity::tag::{self, Entity as TagEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::errors::{map_db_err, map_txn_err};
use super::sea_base::SeaRepository;

/// SeaORM user repository.
pub type SeaUserRepository = SeaRepository<UserEntity>;

/// SeaORM post repository.
pub type SeaPostRepository = SeaRepository<PostEntity>;

/// SeaORM tag repository.
pub type SeaTagRepository = SeaRepository<TagEntity>;

#[async_trait]
impl UserRepository for SeaUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, RepoError> {
        let model = user::ActiveModel::from(new_user)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(user_id = model.id, "Created user");
        Ok(model.into())
    }

    async fn update(&self, id: i32, new_user: NewUser) -> Result<User, RepoError> {
        let mut active = user::ActiveModel::from(new_user);
        active.id = Unchanged(id);

        let model = active.update(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(user_id = id, "Updated user");
        Ok(model.into())
    }

    async fn delete(&self, id: i32, policy: UserDeletePolicy) -> Result<(), RepoError> {
        self.db
            .transaction::<_, (), RepoError>(move |txn| {
                Box::pin(async move {
                    let found = UserEntity::find_by_id(id)
                        .one(txn)
                        .await
                        .map_err(map_db_err)?;
                    if found.is_none() {
                        return Err(RepoError::NotFound);
                    }

                    let post_ids: Vec<i32> = PostEntity::find()
                        .select_only()
                        .column(post::Column::Id)
                        .filter(post::Column::UserId.eq(id))
                        .into_tuple()
                        .all(txn)
                        .await
                        .map_err(map_db_err)?;

                    if !post_ids.is_empty() {
                        match policy {
                            UserDeletePolicy::Restrict => {
                                return Err(RepoError::Constraint(format!(
                                    "user {} still has {} post(s)",
                                    id,
                                    post_ids.len()
                                )));
                            }
                            UserDeletePolicy::Cascade => {
                                PostTagEntity::delete_many()
                                    .filter(post_tag::Column::PostId.is_in(post_ids.clone()))
                                    .exec(txn)
                                    .await
                                    .map_err(map_db_err)?;
                                PostEntity::delete_many()
                                    .filter(post::Column::UserId.eq(id))
                                    .exec(txn)
                                    .await
                                    .map_err(map_db_err)?;
                                tracing::info!(
                                    user_id = id,
                                    posts = post_ids.len(),
                                    "Cascading user delete to posts"
                                );
                            }
                        }
                    }

                    UserEntity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(map_db_err)?;
                    Ok(())
                })
            })
            .await
            .map_err(map_txn_err)?;

        tracing::info!(user_id = id, %policy, "Deleted user");
        Ok(())
    }
}

#[async_trait]
impl PostRepository for SeaPostRepository {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_tag_id(&self, tag_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .join(JoinType::InnerJoin, post::Relation::PostTag.def())
            .filter(post_tag::Column::TagId.eq(tag_id))
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(&self, new_post: NewPost, tag_ids: &BTreeSet<i32>) -> Result<Post, RepoError> {
        let tag_ids: Vec<i32> = tag_ids.iter().copied().collect();

        let model = self
            .db
            .transaction::<_, post::Model, RepoError>(move |txn| {
                Box::pin(async move {
                    if !tag_ids.is_empty() {
                        let known = TagEntity::find()
                            .filter(tag::Column::Id.is_in(tag_ids.clone()))
                            .count(txn)
                            .await
                            .map_err(map_db_err)?;
                        if known != tag_ids.len() as u64 {
                            return Err(RepoError::Constraint(format!(
                                "unknown tag id in {:?}",
                                tag_ids
                            )));
                        }
                    }

                    let model = post::ActiveModel::from(new_post)
                        .insert(txn)
                        .await
                        .map_err(map_db_err)?;

                    if !tag_ids.is_empty() {
                        let links = tag_ids.iter().map(|tag_id| post_tag::ActiveModel {
                            post_id: Set(model.id),
                            tag_id: Set(*tag_id),
                        });
                        PostTagEntity::insert_many(links)
                            .exec_without_returning(txn)
                            .await
                            .map_err(map_db_err)?;
                    }

                    Ok(model)
                })
            })
            .await
            .map_err(map_txn_err)?;

        tracing::debug!(post_id = model.id, user_id = model.user_id, "Created post");
        Ok(model.into())
    }

    async fn update(&self, id: i32, title: String, content: String) -> Result<Post, RepoError> {
        let active = post::ActiveModel {
            id: Unchanged(id),
            title: Set(title),
            content: Set(content),
            ..Default::default()
        };

        let model = active.update(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(post_id = id, "Updated post");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        self.db
            .transaction::<_, (), RepoError>(move |txn| {
                Box::pin(async move {
                    PostTagEntity::delete_many()
                        .filter(post_tag::Column::PostId.eq(id))
                        .exec(txn)
                        .await
                        .map_err(map_db_err)?;

                    let result = PostEntity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(map_db_err)?;
                    if result.rows_affected == 0 {
                        return Err(RepoError::NotFound);
                    }
                    Ok(())
                })
            })
            .await
            .map_err(map_txn_err)?;

        tracing::info!(post_id = id, "Deleted post");
        Ok(())
    }
}

#[async_trait]
impl TagRepository for SeaTagRepository {
    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Tag>, RepoError> {
        let result = TagEntity::find()
            .join(JoinType::InnerJoin, tag::Relation::PostTag.def())
            .filter(post_tag::Column::PostId.eq(post_id))
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(&self, name: String) -> Result<Tag, RepoError> {
        let model = tag::ActiveModel {
            name: Set(name),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(map_db_err)?;

        tracing::debug!(tag_id = model.id, "Created tag");
        Ok(model.into())
    }

    async fn rename(&self, id: i32, name: String) -> Result<Tag, RepoError> {
        let active = tag::ActiveModel {
            id: Unchanged(id),
            name: Set(name),
        };

        let model = active.update(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(tag_id = id, "Renamed tag");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        self.db
            .transaction::<_, (), RepoError>(move |txn| {
                Box::pin(async move {
                    PostTagEntity::delete_many()
                        .filter(post_tag::Column::TagId.eq(id))
                        .exec(txn)
                        .await
                        .map_err(map_db_err)?;

                    let result = TagEntity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(map_db_err)?;
                    if result.rows_affected == 0 {
                        return Err(RepoError::NotFound);
                    }
                    Ok(())
                })
            })
            .await
            .map_err(map_txn_err)?;

        tracing::info!(tag_id = id, "Deleted tag");
        Ok(())
    }
}
