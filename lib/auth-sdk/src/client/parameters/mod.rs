mod body;
pub use self::body::CallBody;

mod headers;
pub use self::headers::CallHeaders;

mod options;
pub use self::options::RequestOptions;

mod query;
pub use self::query::CallQuery;
