use snafu::Snafu;

pub type CustomResult<T> = Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("invalid argument: {message}"))]
    InvalidArgumentError { message: String },

    #[snafu(display("malformed results page: {message}"))]
    StructuralParseError { message: String },

    #[snafu(display("failed to build http client: {source}"))]
    HttpClientError { source: reqwest::Error },

    #[snafu(display("failed to connect to database: {source}"))]
    ConnectionError { source: diesel::ConnectionError },

    #[snafu(display("database error: {source}"))]
    DatabaseError { source: diesel::result::Error },

    #[snafu(display("failed to serialize results: {source}"))]
    SerializationError { source: serde_json::Error },

    #[snafu(display("failed to read input: {source}"))]
    InputError { source: std::io::Error },
}
