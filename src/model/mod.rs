/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// REST transport with rate limiting and retry
pub mod http;
/// Resources of the kops group
pub mod kops;
/// Metadata, options and status shared by all resources
pub mod meta;
/// Request builder
pub mod request;
/// Retry configuration for HTTP requests
pub mod retry;
/// Group registry and codecs
pub mod scheme;
