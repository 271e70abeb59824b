//! Constants used throughout the clinic core crate.
//!
//! This module contains the file, format, and credential constants to ensure
//! consistency across the codebase and make maintenance easier.

/// Default records file when no explicit path is configured.
pub const DEFAULT_RECORDS_FILE: &str = "skinClinicRecords.csv";

/// Environment variable overriding the records file path.
pub const RECORDS_FILE_ENV: &str = "CLINIC_RECORDS_FILE";

/// Header row of the records file. The column order is the on-disk contract.
pub const RECORDS_HEADER: &str =
    "Name,Age,Address,Gender,ContactNumber,EmailAddress,TreatmentDisease,TreatmentPrice,Date,Time";

/// Number of columns in a well-formed record row.
pub const RECORD_COLUMNS: usize = 10;

/// Field delimiter of the records file. Embedded delimiters in free-text
/// fields are not escaped (see `store`).
pub const RECORD_DELIMITER: char = ',';

/// Hardcoded administrator username.
pub const ADMIN_USERNAME: &str = "admin";

/// Hardcoded administrator password.
pub const ADMIN_PASSWORD: &str = "admin123";
