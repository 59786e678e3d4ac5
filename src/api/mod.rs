//! DFS server API client and endpoint helpers.

pub mod client;
pub mod encode;

pub use client::{
    ApiClient, DOWNLOAD_PATH, FILE_PARAM, FILES_PATH, REPLICATE_PATH, UPLOAD_FIELD, UPLOAD_PATH,
};
pub use encode::{decode_component, encode_component};
