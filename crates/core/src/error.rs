#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("failed to read records file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write records file: {0}")]
    FileWrite(std::io::Error),
    #[error("malformed record row {line}: {reason}")]
    MalformedRow { line: usize, reason: String },
    #[error("unknown treatment identifier: {0}")]
    UnknownTreatment(String),
    #[error("unknown row grouping mode: {0}")]
    UnknownGrouping(String),
    #[error("admin login required")]
    AdminRequired,
}

pub type ClinicResult<T> = std::result::Result<T, ClinicError>;
