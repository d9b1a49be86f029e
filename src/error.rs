use thiserror::Error;

#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required column(s): {}", missing.join(", "))]
    Format { missing: Vec<String> },

    #[error("Line {line}: cannot parse {field} from {value:?}")]
    Parse {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("Party {party:?} is listed under both {first} and {second}")]
    DuplicateParty {
        party: String,
        first: String,
        second: String,
    },

    #[error("Category {0} is defined more than once")]
    DuplicateCategory(String),

    #[error("Computation error: {0}")]
    Computation(String),

    #[error("Invalid date {0:?} (expected DD.MM.YYYY or YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, BudgetError>;
