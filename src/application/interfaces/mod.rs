/// Interface of the kops group client
pub mod kops;
/// Interface of the REST transport
pub mod rest;
