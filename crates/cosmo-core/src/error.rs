use thiserror::Error;

pub type CosmoResult<T> = Result<T, CosmoError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CosmoError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
