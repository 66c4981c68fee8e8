pub type BuildInfoError = anyhow::Error;

pub use anyhow::anyhow as err;
pub use anyhow::{Context, bail};

pub type BuildInfoResult<T> = Result<T, BuildInfoError>;
