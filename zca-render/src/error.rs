use plotters::drawing::DrawingAreaErrorKind;
use std::{fmt, io};
use thiserror::Error;
use zca_core::ZonalError;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Drawing(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Zonal(#[from] ZonalError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Formatting failed")]
    Format(#[from] fmt::Error),

    #[error("Not a PNG image: {0}")]
    NotPng(String),

    #[error("Panel {index} out of range, figure has {count} panels")]
    PanelOutOfRange { index: usize, count: usize },
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Drawing(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
