//! Application error types.
//!
//! Error bodies follow the host REST convention:
//! `{"code": "...", "message": "...", "data": {"status": 404}}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::menu::MenuError;

/// Machine-readable error code, attached to error responses as an
/// extension so middleware can see which error was returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode(pub &'static str);

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error("no route matches the request")]
    NoRoute,
}

#[derive(Serialize)]
struct ErrorData {
    status: u16,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: &'static str,
    data: ErrorData,
}

impl AppError {
    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Menu(MenuError::MenuNotFound(_)) => "not_found",
            AppError::Menu(MenuError::LocationNotFound(_)) => "location_not_found",
            AppError::Menu(MenuError::NotAssigned(_)) => "not_assigned",
            AppError::Menu(MenuError::InvalidTree { .. }) => "invalid_menu_tree",
            AppError::Menu(MenuError::Store(_)) => "internal_error",
            AppError::NoRoute => "no_route",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Menu(MenuError::InvalidTree { .. } | MenuError::Store(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::Menu(MenuError::MenuNotFound(_)) => "Menu not found.",
            AppError::Menu(MenuError::LocationNotFound(_)) => "Menu location not found.",
            AppError::Menu(MenuError::NotAssigned(_)) => "No menu assigned to this location.",
            AppError::Menu(MenuError::InvalidTree { .. }) => "Menu items could not be nested.",
            AppError::Menu(MenuError::Store(_)) => "Internal server error.",
            AppError::NoRoute => "No route was found matching the URL and request method.",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        // Details stay in the log; clients get the stable message.
        match &self {
            AppError::Menu(e @ MenuError::Store(_)) => {
                tracing::error!(error = %e, "menu store failure");
            }
            AppError::Menu(e @ MenuError::InvalidTree { .. }) => {
                tracing::error!(error = %e, "invalid menu tree");
            }
            _ => {}
        }

        let body = ErrorBody {
            code,
            message: self.message(),
            data: ErrorData {
                status: status.as_u16(),
            },
        };

        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(ErrorCode(code));
        response
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
