/// Failures of the REST boundary
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 401/403 from the backend
    Unauthorized,
    Http { status: u16, body: String },
    Network(String),
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Not authenticated"),
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Network(msg) => write!(f, "Network Error: {msg}"),
            ApiError::Decode(msg) => write!(f, "Decode Error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Failures of the standings push stream
#[derive(Debug, Clone, PartialEq)]
pub enum FeedError {
    Connect(String),
    Socket(String),
    Malformed(String),
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Connect(msg) => write!(f, "Failed to open feed: {msg}"),
            FeedError::Socket(msg) => write!(f, "Feed socket error: {msg}"),
            FeedError::Malformed(msg) => write!(f, "Malformed snapshot: {msg}"),
        }
    }
}

impl std::error::Error for FeedError {}

#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    Unavailable,
    Write(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Local storage is not available"),
            StorageError::Write(msg) => write!(f, "Storage write failed: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Top-level error used by the page controllers
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Api(ApiError),
    Feed(FeedError),
    Storage(StorageError),
    Dom(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "{e}"),
            AppError::Feed(e) => write!(f, "{e}"),
            AppError::Storage(e) => write!(f, "{e}"),
            AppError::Dom(msg) => write!(f, "DOM Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Api(e)
    }
}

impl From<FeedError> for AppError {
    fn from(e: FeedError) -> Self {
        AppError::Feed(e)
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        AppError::Storage(e)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
pub type AppResult<T> = Result<T, AppError>;
