use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250101_000001_create_user_table::User, m20250101_000002_create_bootcamp_table::Bootcamp,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string(Course::Title))
                    .col(text(Course::Description))
                    .col(integer(Course::Weeks))
                    .col(integer(Course::Tuition))
                    .col(string(Course::MinimumSkill))
                    .col(boolean(Course::ScholarshipAvailable).default(false))
                    .col(integer(Course::BootcampId))
                    .col(integer(Course::UserId))
                    .col(
                        timestamp(Course::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_bootcamp_id")
                            .from(Course::Table, Course::BootcampId)
                            .to(Bootcamp::Table, Bootcamp::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_user_id")
                            .from(Course::Table, Course::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    Title,
    Description,
    Weeks,
    Tuition,
    MinimumSkill,
    ScholarshipAvailable,
    BootcampId,
    UserId,
    CreatedAt,
}
