use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teacher::Table)
                    .if_not_exists()
                    .col(pk_auto(Teacher::Id))
                    .col(string(Teacher::FirstName))
                    .col(string(Teacher::LastName))
                    .col(string(Teacher::Email))
                    .col(string(Teacher::Subject).default(""))
                    .col(string(Teacher::Phone).default(""))
                    .col(timestamp_with_time_zone(Teacher::CreatedAt))
                    .col(timestamp_with_time_zone(Teacher::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Teacher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Teacher {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Subject,
    Phone,
    CreatedAt,
    UpdatedAt,
}
