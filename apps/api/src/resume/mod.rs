// Resume parsing: multipart upload -> transient file -> text extraction -> skill matching.

pub mod handlers;
pub mod service;
pub mod upload;
