#![allow(clippy::unwrap_used)]

mod browsing;
mod support;
mod uploading;
