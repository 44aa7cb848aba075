use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Periods table
        manager
            .create_table(
                Table::create()
                    .table(Periods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Periods::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Periods::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Periods::StartYear).integer().not_null())
                    .col(ColumnDef::new(Periods::EndYear).integer().not_null())
                    .col(
                        ColumnDef::new(Periods::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Periods::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Periods::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Divisions table
        manager
            .create_table(
                Table::create()
                    .table(Divisions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Divisions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Divisions::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Divisions::IsOversight)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Divisions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Divisions::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Nim).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::PeriodId).big_integer().not_null())
                    .col(ColumnDef::new(Users::DivisionId).big_integer().null())
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Users::Table, Users::PeriodId)
                            .to(Periods::Table, Periods::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Users::Table, Users::DivisionId)
                            .to(Divisions::Table, Divisions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Prokers table
        manager
            .create_table(
                Table::create()
                    .table(Prokers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Prokers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Prokers::Name).string().not_null())
                    .col(ColumnDef::new(Prokers::DivisionId).big_integer().not_null())
                    .col(ColumnDef::new(Prokers::PeriodId).big_integer().not_null())
                    .col(ColumnDef::new(Prokers::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Prokers::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Prokers::Table, Prokers::DivisionId)
                            .to(Divisions::Table, Divisions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Prokers::Table, Prokers::PeriodId)
                            .to(Periods::Table, Periods::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Panitia (proker committee membership) table
        manager
            .create_table(
                Table::create()
                    .table(Panitia::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Panitia::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Panitia::ProkerId).big_integer().not_null())
                    .col(ColumnDef::new(Panitia::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Panitia::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Panitia::Table, Panitia::ProkerId)
                            .to(Prokers::Table, Prokers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Panitia::Table, Panitia::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_panitia_proker_user")
                    .table(Panitia::Table)
                    .col(Panitia::ProkerId)
                    .col(Panitia::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Indicators table
        manager
            .create_table(
                Table::create()
                    .table(Indicators::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Indicators::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Indicators::Name).string().not_null())
                    .col(ColumnDef::new(Indicators::Category).string().not_null())
                    .col(
                        ColumnDef::new(Indicators::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Indicators::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Indicators::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Events table
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Events::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Events::Name).string().not_null())
                    .col(ColumnDef::new(Events::EventType).string().not_null())
                    .col(ColumnDef::new(Events::PeriodId).big_integer().not_null())
                    .col(ColumnDef::new(Events::ProkerId).big_integer().null())
                    .col(ColumnDef::new(Events::StartDate).big_integer().not_null())
                    .col(ColumnDef::new(Events::EndDate).big_integer().not_null())
                    .col(
                        ColumnDef::new(Events::IsOpen)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Events::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Events::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Events::Table, Events::PeriodId)
                            .to(Periods::Table, Periods::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Events::Table, Events::ProkerId)
                            .to(Prokers::Table, Prokers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Indicator snapshots: immutable copy of the indicator set per event
        manager
            .create_table(
                Table::create()
                    .table(IndicatorSnapshots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IndicatorSnapshots::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(IndicatorSnapshots::EventId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IndicatorSnapshots::IndicatorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IndicatorSnapshots::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(IndicatorSnapshots::Table, IndicatorSnapshots::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(IndicatorSnapshots::Table, IndicatorSnapshots::IndicatorId)
                            .to(Indicators::Table, Indicators::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_indicator_snapshots_event_indicator")
                    .table(IndicatorSnapshots::Table)
                    .col(IndicatorSnapshots::EventId)
                    .col(IndicatorSnapshots::IndicatorId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Evaluations: one directed (evaluator, evaluatee) assignment per event
        manager
            .create_table(
                Table::create()
                    .table(Evaluations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Evaluations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Evaluations::EvaluatorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Evaluations::EvaluateeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Evaluations::EventId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Evaluations::Feedback).text().null())
                    .col(
                        ColumnDef::new(Evaluations::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Evaluations::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Evaluations::Table, Evaluations::EvaluatorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Evaluations::Table, Evaluations::EvaluateeId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Evaluations::Table, Evaluations::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_evaluations_evaluator_evaluatee_event")
                    .table(Evaluations::Table)
                    .col(Evaluations::EvaluatorId)
                    .col(Evaluations::EvaluateeId)
                    .col(Evaluations::EventId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Evaluation scores: one row per (evaluation, snapshot)
        manager
            .create_table(
                Table::create()
                    .table(EvaluationScores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EvaluationScores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EvaluationScores::EvaluationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationScores::IndicatorSnapshotId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EvaluationScores::Score).integer().not_null())
                    .col(
                        ColumnDef::new(EvaluationScores::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EvaluationScores::Table, EvaluationScores::EvaluationId)
                            .to(Evaluations::Table, Evaluations::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                EvaluationScores::Table,
                                EvaluationScores::IndicatorSnapshotId,
                            )
                            .to(IndicatorSnapshots::Table, IndicatorSnapshots::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Double submissions lose here instead of racing the emptiness check
        manager
            .create_index(
                Index::create()
                    .name("idx_evaluation_scores_evaluation_snapshot")
                    .table(EvaluationScores::Table)
                    .col(EvaluationScores::EvaluationId)
                    .col(EvaluationScores::IndicatorSnapshotId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EvaluationScores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Evaluations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IndicatorSnapshots::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Indicators::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Panitia::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Prokers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Divisions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Periods::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Periods {
    #[sea_orm(iden = "periods")]
    Table,
    Id,
    Name,
    StartYear,
    EndYear,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Divisions {
    #[sea_orm(iden = "divisions")]
    Table,
    Id,
    Name,
    IsOversight,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Nim,
    Name,
    Email,
    PasswordHash,
    Role,
    PeriodId,
    DivisionId,
    IsActive,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Prokers {
    #[sea_orm(iden = "prokers")]
    Table,
    Id,
    Name,
    DivisionId,
    PeriodId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Panitia {
    #[sea_orm(iden = "panitia")]
    Table,
    Id,
    ProkerId,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Indicators {
    #[sea_orm(iden = "indicators")]
    Table,
    Id,
    Name,
    Category,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Events {
    #[sea_orm(iden = "events")]
    Table,
    Id,
    Name,
    EventType,
    PeriodId,
    ProkerId,
    StartDate,
    EndDate,
    IsOpen,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum IndicatorSnapshots {
    #[sea_orm(iden = "indicator_snapshots")]
    Table,
    Id,
    EventId,
    IndicatorId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Evaluations {
    #[sea_orm(iden = "evaluations")]
    Table,
    Id,
    EvaluatorId,
    EvaluateeId,
    EventId,
    Feedback,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EvaluationScores {
    #[sea_orm(iden = "evaluation_scores")]
    Table,
    Id,
    EvaluationId,
    IndicatorSnapshotId,
    Score,
    CreatedAt,
}
