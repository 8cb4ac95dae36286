mod body;
mod headers;
mod record;
mod request;
mod response;

pub use body::BodyKind;
pub use headers::{header_lines, parse_header_lines};
pub use record::{record_request, record_response};
pub use request::FixtureRequest;
pub use response::FixtureResponse;
