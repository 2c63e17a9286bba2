use std::{error, fmt::Display, rc::Rc};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("JSON {0}")]
    Json(String),
    #[error("Search endpoint answered with status {0}")]
    Status(u16),
    #[error("Search endpoint reported an unsuccessful search")]
    Rejected,
    #[error("System error {0}")]
    SystemError(#[from] SystemError),
}

/// This error type implements From's for the non cloneable transport errors and keeps them behind an Rc
#[derive(Clone, Debug)]
pub enum SystemError {
    Message(String),
    #[cfg(feature = "ssr")]
    ReqwestError(Rc<reqwest::Error>),
    #[cfg(feature = "csr")]
    GlooError(Rc<gloo_net::Error>),
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for SystemError {
    fn from(value: reqwest::Error) -> Self {
        Self::ReqwestError(Rc::new(value))
    }
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        Self::SystemError(value.into())
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::GlooError(Rc::new(value))
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        Self::SystemError(value.into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemError::Message(message) => write!(f, "{}", message),
            #[cfg(feature = "ssr")]
            SystemError::ReqwestError(reqwest) => write!(f, "{}", reqwest),
            #[cfg(feature = "csr")]
            SystemError::GlooError(g) => write!(f, "{}", g),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SystemError::Message(_) => None,
            #[cfg(feature = "ssr")]
            SystemError::ReqwestError(reqwest) => Some(reqwest.as_ref()),
            #[cfg(feature = "csr")]
            SystemError::GlooError(gloo) => Some(gloo.as_ref()),
        }
    }
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            AppError::Status(500).to_string(),
            "Search endpoint answered with status 500"
        );
        let err: AppError = SystemError::Message("offline".to_string()).into();
        assert_eq!(err.to_string(), "System error offline");
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, AppError::Json(_)));
    }
}
