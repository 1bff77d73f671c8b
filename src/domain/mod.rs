pub mod branch;
pub mod issue;
pub mod pull_request;
