//! Table definitions derived from the entities.

use sea_orm::sea_query::{Table, TableCreateStatement, TableDropStatement};
use sea_orm::{ConnectionTrait, DbBackend, DbConn, DbErr, Schema};

use super::entity::{post, post_tag, tag, user};

/// `CREATE TABLE IF NOT EXISTS` statements for every table, parents first.
pub fn table_statements(backend: DbBackend) -> Vec<TableCreateStatement> {
    let schema = Schema::new(backend);
    vec![
        schema
            .create_table_from_entity(user::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(post::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(tag::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(post_tag::Entity)
            .if_not_exists()
            .to_owned(),
    ]
}

/// `DROP TABLE IF EXISTS` statements, children first.
pub fn drop_statements() -> Vec<TableDropStatement> {
    vec![
        Table::drop().table(post_tag::Entity).if_exists().to_owned(),
        Table::drop().table(tag::Entity).if_exists().to_owned(),
        Table::drop().table(post::Entity).if_exists().to_owned(),
        Table::drop().table(user::Entity).if_exists().to_owned(),
    ]
}

/// Create any missing tables on the given connection.
pub async fn create_tables(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    for statement in table_statements(backend) {
        db.execute(backend.build(&statement)).await?;
    }
    tracing::info!("Database schema ready");
    Ok(())
}
