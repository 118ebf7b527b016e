use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pools::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pools::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pools::Title).string().not_null())
                    .col(ColumnDef::new(Pools::Description).string().not_null())
                    .col(
                        ColumnDef::new(Pools::ShareSlug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Pools::GroupKey).string().not_null())
                    .col(
                        ColumnDef::new(Pools::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pools::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Pools {
    Table,
    Id,
    Title,
    Description,
    ShareSlug,
    GroupKey,
    CreatedAt,
}
