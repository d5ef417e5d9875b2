//! Request body extraction for incident submissions.
//!
//! `POST /api/incidents` accepts JSON, a urlencoded form, or a multipart
//! form carrying an optional `media` file. [`IncidentPayload`] picks the
//! shape from the `Content-Type` header and normalises all three into
//! [`IncidentFields`] plus an optional [`MediaUpload`].

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use relief_core::incident::IncidentFields;

use crate::error::AppError;

/// Multipart field carrying the optional attachment.
pub const MEDIA_FIELD: &str = "media";

/// A file part received with a multipart submission.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    /// Filename as sent by the client; not yet sanitised.
    pub filename: String,
    pub data: Bytes,
}

/// An incident submission in whichever shape the client sent it.
#[derive(Debug)]
pub enum IncidentPayload {
    Json(IncidentFields),
    Form(IncidentFields),
    Multipart {
        fields: IncidentFields,
        media: Option<MediaUpload>,
    },
}

impl IncidentPayload {
    /// Split into the submission fields and the attachment, if any.
    pub fn into_parts(self) -> (IncidentFields, Option<MediaUpload>) {
        match self {
            IncidentPayload::Json(fields) | IncidentPayload::Form(fields) => (fields, None),
            IncidentPayload::Multipart { fields, media } => (fields, media),
        }
    }
}

impl<S> FromRequest<S> for IncidentPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mime = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default();

        match mime.as_str() {
            m if m == "application/json" || m.ends_with("+json") => {
                let Json(fields) = Json::<IncidentFields>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                Ok(IncidentPayload::Json(fields))
            }
            "application/x-www-form-urlencoded" => {
                let Form(fields) = Form::<IncidentFields>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                Ok(IncidentPayload::Form(fields))
            }
            "multipart/form-data" => {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                read_multipart(multipart).await
            }
            other => Err(AppError::BadRequest(format!(
                "Unsupported content type '{other}'. Send JSON, a urlencoded form or a multipart form"
            ))),
        }
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<IncidentPayload, AppError> {
    let mut fields = IncidentFields::default();
    let mut media: Option<MediaUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            MEDIA_FIELD => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                // A file input left empty still sends a part with no filename.
                if !filename.is_empty() {
                    media = Some(MediaUpload { filename, data });
                }
            }
            "type" | "severity" | "location" | "description" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                let slot = match name.as_str() {
                    "type" => &mut fields.incident_type,
                    "severity" => &mut fields.severity,
                    "location" => &mut fields.location,
                    _ => &mut fields.description,
                };
                *slot = Some(text);
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(IncidentPayload::Multipart { fields, media })
}
