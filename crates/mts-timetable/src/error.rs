use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimetableError {
    #[error("timetable line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TimetableResult<T> = Result<T, TimetableError>;
