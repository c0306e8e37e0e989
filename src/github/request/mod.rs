mod create_release_request;

pub use create_release_request::CreateReleaseRequest;

use crate::http::Error;
use serde::Serialize;

pub trait SerializeRequest {
    fn into_request(self) -> Result<String, Error>
    where
        Self: Serialize + Sized,
    {
        serde_json::to_string(&self).map_err(|cause| Error::SerializeRequestError { cause })
    }
}

impl SerializeRequest for CreateReleaseRequest {}
