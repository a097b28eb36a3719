use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_teacher_table::Teacher;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendance::Id))
                    .col(integer(Attendance::TeacherId))
                    .col(date(Attendance::Date))
                    .col(string(Attendance::Status))
                    .col(timestamp_with_time_zone_null(Attendance::CheckIn))
                    .col(timestamp_with_time_zone_null(Attendance::CheckOut))
                    .col(timestamp_with_time_zone(Attendance::CreatedAt))
                    .col(timestamp_with_time_zone(Attendance::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendances_teacher_id")
                            .from(Attendance::Table, Attendance::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One record per teacher per day
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx_attendances_teacher_date")
                    .table(Attendance::Table)
                    .col(Attendance::TeacherId)
                    .col(Attendance::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attendance {
    #[sea_orm(iden = "attendances")]
    Table,
    Id,
    TeacherId,
    Date,
    Status,
    CheckIn,
    CheckOut,
    CreatedAt,
    UpdatedAt,
}
