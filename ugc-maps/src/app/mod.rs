mod ugc_app;

pub use ugc_app::{DirectoryArgs, UgcApp, UgcOperation};
