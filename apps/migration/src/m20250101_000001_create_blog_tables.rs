//! Users, posts, tags and the post/tag association table.

use blogly_infra::database::schema::{drop_statements, table_statements};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for statement in table_statements(manager.get_database_backend()) {
            manager.create_table(statement).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for statement in drop_statements() {
            manager.drop_table(statement).await?;
        }
        Ok(())
    }
}
