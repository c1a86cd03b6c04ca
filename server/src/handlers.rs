use axum::{
    extract::Multipart,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use image_converter_core::{run_batch, Delivery, Quality, SourceFile, TargetFormat};

#[derive(Debug, Serialize)]
struct ApiError {
    success: bool,
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ApiError {
        success: false,
        error: message.into(),
    };
    (status, Json(body)).into_response()
}

/// POST /convert
///
/// Convert one or more uploaded files to a target raster format.
///
/// Form fields:
/// - file: binary file data with filename (repeatable)
/// - format: target format (png, jpg, jpeg, webp, or a MIME type)
/// - quality (optional): 0-100 for JPEG/WebP (default: 80)
///
/// Responds with the single converted file, or a ZIP archive when the batch
/// produced more than one artifact; the computed output name is carried in
/// Content-Disposition.
pub async fn convert(mut multipart: Multipart) -> Result<Response, StatusCode> {
    let mut sources: Vec<SourceFile> = Vec::new();
    let mut format: Option<String> = None;
    let mut quality_pct = 80u8;

    // Parse multipart form
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(_) => return Err(StatusCode::BAD_REQUEST),
        };

        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let file_name = field
                    .file_name()
                    .map(String::from)
                    .ok_or(StatusCode::BAD_REQUEST)?;
                let bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
                sources.push(SourceFile::new(file_name, bytes.to_vec()));
            }
            "format" => {
                let text = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
                format = Some(text);
            }
            "quality" => {
                if let Ok(text) = field.text().await {
                    quality_pct = text.parse::<u8>().unwrap_or(80).clamp(0, 100);
                }
            }
            _ => {}
        }
    }

    if sources.is_empty() {
        return Ok(error_response(StatusCode::BAD_REQUEST, "no files uploaded"));
    }

    let format_str = format.ok_or(StatusCode::BAD_REQUEST)?;
    let target = match TargetFormat::from_str(&format_str) {
        Some(t) => t,
        None => {
            return Ok(error_response(
                StatusCode::BAD_REQUEST,
                format!("invalid target format: {format_str}"),
            ))
        }
    };
    let quality = Quality::new(f32::from(quality_pct) / 100.0)
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    match run_batch(sources, target, quality).await {
        Ok(outcome) => {
            let (name, mime) = (
                outcome.delivery.name().to_string(),
                outcome.delivery.mime().to_string(),
            );
            let data = match outcome.delivery {
                Delivery::Single { data, .. } | Delivery::Archive { data, .. } => data,
            };
            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, mime),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{name}\""),
                    ),
                ],
                data,
            )
                .into_response())
        }
        Err(e) => {
            log::error!("conversion failed: {e}");
            Ok(error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))
        }
    }
}
