//! Platform adapters for the webhook binary
//!
//! - **`DirectorySecretReader`**: reads secrets mounted as files, one directory per
//!   namespace and secret, one file per key.

mod secret_reader;

pub use secret_reader::DirectorySecretReader;
