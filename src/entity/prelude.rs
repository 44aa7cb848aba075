//! Convenience re-exports for the storage layer.

pub use super::audit_logs::{
    ActiveModel as AuditLogActiveModel, Entity as AuditLogs, Model as AuditLogModel,
};
pub use super::divisions::{
    ActiveModel as DivisionActiveModel, Entity as Divisions, Model as DivisionModel,
};
pub use super::evaluation_scores::{
    ActiveModel as EvaluationScoreActiveModel, Entity as EvaluationScores,
    Model as EvaluationScoreModel,
};
pub use super::evaluations::{
    ActiveModel as EvaluationActiveModel, Entity as Evaluations, Model as EvaluationModel,
};
pub use super::events::{ActiveModel as EventActiveModel, Entity as Events, Model as EventModel};
pub use super::indicator_snapshots::{
    ActiveModel as IndicatorSnapshotActiveModel, Entity as IndicatorSnapshots,
    Model as IndicatorSnapshotModel,
};
pub use super::indicators::{
    ActiveModel as IndicatorActiveModel, Entity as Indicators, Model as IndicatorModel,
};
pub use super::panitia::{
    ActiveModel as PanitiaActiveModel, Entity as Panitia, Model as PanitiaModel,
};
pub use super::periods::{
    ActiveModel as PeriodActiveModel, Entity as Periods, Model as PeriodModel,
};
pub use super::prokers::{
    ActiveModel as ProkerActiveModel, Entity as Prokers, Model as ProkerModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
