use thiserror::Error;

pub type TeResult<T> = Result<T, TeError>;

#[derive(Error, Debug)]
pub enum TeError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive numeric value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },
}
