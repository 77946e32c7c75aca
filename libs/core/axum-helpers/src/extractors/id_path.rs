//! Numeric id path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extractor for unsigned integer `{id}` path parameters.
///
/// Rejects anything that is not a non-negative integer fitting in `i64`
/// with a 400 `INVALID_ID` error.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_task(IdPath(id): IdPath) -> String {
///     format!("Task ID: {}", id)
/// }
///
/// let app = Router::new().route("/tasks/{id}", get(get_task));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl IdPath {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        raw.parse::<u64>()
            .ok()
            .and_then(|id| i64::try_from(id).ok())
            .map(IdPath)
            .ok_or_else(|| AppError::InvalidId(format!("Invalid id: {}", raw)))
    }
}

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state).await?;
        Self::parse(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_unsigned_integers() {
        assert_eq!(IdPath::parse("1").unwrap(), IdPath(1));
        assert_eq!(IdPath::parse("0").unwrap(), IdPath(0));
        assert_eq!(
            IdPath::parse(&i64::MAX.to_string()).unwrap(),
            IdPath(i64::MAX)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for raw in ["abc", "-1", "1.5", "", "18446744073709551615"] {
            assert!(
                matches!(IdPath::parse(raw), Err(AppError::InvalidId(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
