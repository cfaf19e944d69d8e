use thiserror::Error;

pub type CieResult<T> = Result<T, CieError>;

#[derive(Error, Debug)]
pub enum CieError {
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid point id: {value}")]
    InvalidId { value: String },
}
