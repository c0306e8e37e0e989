mod release_response;

#[cfg(test)]
pub use release_response::ReleaseId;
pub use release_response::ReleaseResponse;
