use axum::{
    Json,
    body::{Body, to_bytes},
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use scholaris_core::AppError;

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>();
    // field_errors() is a HashMap, keep the output stable
    messages.sort();
    messages.join(", ")
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::validation("Missing 'Content-Type: application/json' header");
    }

    let error_msg = rejection.body_text();

    if error_msg.contains("missing field") {
        let field = error_msg
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return AppError::validation(format!("{} is required", field));
    }

    if error_msg.contains("invalid type: null") {
        // axum reports the JSON path ahead of the serde message
        let field = error_msg
            .split("target type: ")
            .nth(1)
            .and_then(|s| s.split(": invalid type").next())
            .filter(|path| !path.is_empty() && *path != ".");
        return match field {
            Some(field) => AppError::validation(format!("{} is required", field)),
            None => AppError::validation("All fields are required"),
        };
    }

    if error_msg.contains("invalid type") {
        return AppError::validation("Invalid field type in request");
    }

    AppError::validation("Invalid request body")
}

/// JSON body extractor that also runs `validator` rules.
///
/// Every failure, from a missing content type to a rule violation, is a
/// `400` with a `{"message"}` body naming the offending field where possible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value
            .validate()
            .map_err(|errors| AppError::validation(format_errors(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Like [`ValidatedJson`], but an empty body yields `T::default()`.
///
/// Update routes use this so a request with no body still runs the update.
/// A non-empty body goes through the same checks as [`ValidatedJson`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJsonOrDefault<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJsonOrDefault<T>
where
    T: DeserializeOwned + Validate + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = to_bytes(body, BODY_LIMIT)
            .await
            .map_err(|_| AppError::validation("Invalid request body"))?;

        if bytes.is_empty() {
            return Ok(ValidatedJsonOrDefault(T::default()));
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        let ValidatedJson(value) = ValidatedJson::<T>::from_request(req, state).await?;
        Ok(ValidatedJsonOrDefault(value))
    }
}
