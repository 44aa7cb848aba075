use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::error;

use super::ReportService;
use crate::middlewares::require_jwt::RequireJWT;
use crate::models::audit::AuditAction;
use crate::models::reports::requests::{ExportFormat, ExportParams};
use crate::models::reports::responses::UserReport;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::audit;

pub async fn export_event_report(
    service: &ReportService,
    event_id: i64,
    params: ExportParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let storage = service.get_storage(request);

    let event = match storage.get_event_by_id(event_id).await {
        Ok(Some(event)) => event,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EventNotFound,
                "Event not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Report export failed: {e}"),
                )),
            );
        }
    };

    let division_id =
        match super::get::resolve_division_scope(&user, params.division_id, &storage).await {
            Ok(division_id) => division_id,
            Err(response) => return Ok(response),
        };

    let source = match storage.fetch_report_source(event_id, division_id).await {
        Ok(source) => source,
        Err(e) => {
            error!("Report export failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Report export failed: {e}"),
                )),
            );
        }
    };
    let reports = super::aggregate::aggregate_reports(&source);

    audit::record(
        &storage,
        audit::entry_from_request(request, AuditAction::ReportExported, true)
            .user(user.id)
            .metadata(serde_json::json!({ "event_id": event_id })),
    );

    match params.format.unwrap_or(ExportFormat::Csv) {
        ExportFormat::Xlsx => export_xlsx(&event.name, &reports),
        ExportFormat::Csv => export_csv(&event.name, &reports),
    }
}

// Three sections: per-evaluatee summary, per-indicator averages, feedback.
fn export_csv(event_name: &str, reports: &[UserReport]) -> ActixResult<HttpResponse> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(vec![]);

    wtr.write_record([event_name]).map_err(csv_error)?;
    wtr.write_record([""]).map_err(csv_error)?;

    let mut summary_header = vec![
        "user_id".to_string(),
        "name".to_string(),
        "nim".to_string(),
        "division".to_string(),
        "rater_count".to_string(),
        "overall_average".to_string(),
    ];
    if let Some(first) = reports.first() {
        summary_header.extend(
            first
                .category_averages
                .iter()
                .map(|c| format!("avg_{}", c.category).to_lowercase()),
        );
    }
    wtr.write_record(&summary_header).map_err(csv_error)?;
    for report in reports {
        let mut row = vec![
            report.user_id.to_string(),
            report.name.clone(),
            report.nim.clone(),
            report.division_name.clone().unwrap_or_default(),
            report.rater_count.to_string(),
            report.overall_average.to_string(),
        ];
        row.extend(report.category_averages.iter().map(|c| c.average.to_string()));
        wtr.write_record(&row).map_err(csv_error)?;
    }

    wtr.write_record([""]).map_err(csv_error)?;
    wtr.write_record(["user_id", "name", "indicator", "category", "average"])
        .map_err(csv_error)?;
    for report in reports {
        for indicator in &report.indicator_averages {
            wtr.write_record([
                report.user_id.to_string(),
                report.name.clone(),
                indicator.indicator_name.clone(),
                indicator.category.to_string(),
                indicator.average.to_string(),
            ])
            .map_err(csv_error)?;
        }
    }

    wtr.write_record([""]).map_err(csv_error)?;
    wtr.write_record(["user_id", "name", "feedback"])
        .map_err(csv_error)?;
    for report in reports {
        for feedback in &report.feedback {
            wtr.write_record([
                report.user_id.to_string(),
                report.name.clone(),
                feedback.clone(),
            ])
            .map_err(csv_error)?;
        }
    }

    let data = wtr.into_inner().map_err(|e| {
        error!("CSV generation failed: {}", e);
        actix_web::error::ErrorInternalServerError(format!("CSV generation failed: {e}"))
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"report.csv\"",
        ))
        .body(data))
}

fn csv_error(e: csv::Error) -> actix_web::Error {
    error!("CSV write failed: {}", e);
    actix_web::error::ErrorInternalServerError(format!("CSV write failed: {e}"))
}

// One worksheet per section, Indonesian headers for the end users.
fn export_xlsx(event_name: &str, reports: &[UserReport]) -> ActixResult<HttpResponse> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Ringkasan").map_err(xlsx_error)?;
        worksheet
            .write_string_with_format(0, 0, event_name, &header_format)
            .map_err(xlsx_error)?;

        let headers = [
            "Nama",
            "NIM",
            "Divisi",
            "Jumlah Penilai",
            "Rata-rata Keseluruhan",
        ];
        write_header_row(worksheet, 1, &headers, &header_format)?;
        let category_names: Vec<String> = reports
            .first()
            .map(|r| {
                r.category_averages
                    .iter()
                    .map(|c| format!("Rata-rata {}", c.category))
                    .collect()
            })
            .unwrap_or_default();
        for (offset, name) in category_names.iter().enumerate() {
            worksheet
                .write_string_with_format(1, (headers.len() + offset) as u16, name, &header_format)
                .map_err(xlsx_error)?;
        }

        for (row, report) in reports.iter().enumerate() {
            let row = (row + 2) as u32;
            worksheet
                .write_string(row, 0, &report.name)
                .map_err(xlsx_error)?;
            worksheet
                .write_string(row, 1, &report.nim)
                .map_err(xlsx_error)?;
            worksheet
                .write_string(row, 2, report.division_name.as_deref().unwrap_or(""))
                .map_err(xlsx_error)?;
            worksheet
                .write_number(row, 3, report.rater_count as f64)
                .map_err(xlsx_error)?;
            worksheet
                .write_number(row, 4, report.overall_average)
                .map_err(xlsx_error)?;
            for (offset, category) in report.category_averages.iter().enumerate() {
                worksheet
                    .write_number(row, (headers.len() + offset) as u16, category.average)
                    .map_err(xlsx_error)?;
            }
        }
    }

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Indikator").map_err(xlsx_error)?;
        let headers = ["Nama", "NIM", "Indikator", "Kategori", "Rata-rata"];
        write_header_row(worksheet, 0, &headers, &header_format)?;

        let mut row = 1u32;
        for report in reports {
            for indicator in &report.indicator_averages {
                worksheet
                    .write_string(row, 0, &report.name)
                    .map_err(xlsx_error)?;
                worksheet
                    .write_string(row, 1, &report.nim)
                    .map_err(xlsx_error)?;
                worksheet
                    .write_string(row, 2, &indicator.indicator_name)
                    .map_err(xlsx_error)?;
                worksheet
                    .write_string(row, 3, indicator.category.to_string())
                    .map_err(xlsx_error)?;
                worksheet
                    .write_number(row, 4, indicator.average)
                    .map_err(xlsx_error)?;
                row += 1;
            }
        }
    }

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Feedback").map_err(xlsx_error)?;
        let headers = ["Nama", "NIM", "Feedback"];
        write_header_row(worksheet, 0, &headers, &header_format)?;

        let mut row = 1u32;
        for report in reports {
            for feedback in &report.feedback {
                worksheet
                    .write_string(row, 0, &report.name)
                    .map_err(xlsx_error)?;
                worksheet
                    .write_string(row, 1, &report.nim)
                    .map_err(xlsx_error)?;
                worksheet
                    .write_string(row, 2, feedback)
                    .map_err(xlsx_error)?;
                row += 1;
            }
        }
    }

    let buffer = workbook.save_to_buffer().map_err(xlsx_error)?;

    Ok(HttpResponse::Ok()
        .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"report.xlsx\"",
        ))
        .body(buffer))
}

fn write_header_row(
    worksheet: &mut Worksheet,
    row: u32,
    headers: &[&str],
    format: &Format,
) -> ActixResult<()> {
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(row, col as u16, *header, format)
            .map_err(xlsx_error)?;
    }
    Ok(())
}

fn xlsx_error(e: rust_xlsxwriter::XlsxError) -> actix_web::Error {
    error!("XLSX write failed: {}", e);
    actix_web::error::ErrorInternalServerError(format!("XLSX write failed: {e}"))
}
