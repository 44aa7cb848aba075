use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportParams {
    pub division_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl<'de> Deserialize<'de> for ExportFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" => Ok(ExportFormat::Xlsx),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid export format: '{s}'. Supported formats: csv, xlsx"
            ))),
        }
    }
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ExportParams {
    pub format: Option<ExportFormat>,
    pub division_id: Option<i64>,
}
