use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failures while reading a puzzle layout into an initial configuration.
///
/// The solver is never handed an unparsed state; everything here is
/// surfaced to the caller as a load failure before any search starts.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout is missing its header line")]
    MissingHeader,
    #[error("bad dimension in header: {0}")]
    BadDimension(String),
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell symbol {0:?}")]
    UnknownCell(char),
    #[error("expected {expected} cars, found {found}")]
    CarCount { expected: usize, found: usize },
    #[error("bad car descriptor: {0}")]
    BadCar(String),
    #[error("car {name:?} does not fit on a {rows}x{cols} board")]
    CarOutOfBounds { name: char, rows: usize, cols: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<LayoutError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<LayoutError> for Error {
    fn from(inner: LayoutError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
