mod catalog_client;
pub(crate) use catalog_client::*;
