//! See [`Config`].

use std::{env::VarError, path::PathBuf};

use thiserror::Error;
use url::Url;

use crate::mirror::DEFAULT_ORIGIN;

/// The address the server listens on when `ADDRESS` isn't set.
const DEFAULT_ADDRESS: &str = "127.0.0.1:3000";

/// The static-asset directory when `ASSETS_DIR` isn't set.
const DEFAULT_ASSETS_DIR: &str = "public";

/// The server's configuration, read from environment variables (or a `.env` file).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    /// The address to listen on (`ADDRESS`).
    pub address: String,

    /// The directory served as static assets (`ASSETS_DIR`).
    pub assets_dir: PathBuf,

    /// The remote mirror's origin (`MIRROR_ORIGIN`).
    pub mirror_origin: Url,
}

/// An error reading the [`Config`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A variable was set but couldn't be read.
    #[error("environment variable `{name}` couldn't be read: {source}")]
    Var {
        /// The variable's name.
        name: &'static str,

        /// Why it couldn't be read.
        source: dotenvy::Error,
    },

    /// `MIRROR_ORIGIN` isn't a valid URL.
    #[error("environment variable `MIRROR_ORIGIN` should be a valid URL: {0}")]
    MirrorOrigin(#[from] url::ParseError),
}

impl Config {
    /// Reads the configuration, falling back to the defaults for unset variables.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(var)
    }

    /// Builds the configuration from a variable lookup returning `None` for unset variables.
    fn from_vars<F>(mut var: F) -> Result<Self, Error>
    where
        F: FnMut(&'static str) -> Result<Option<String>, Error>,
    {
        let address = var("ADDRESS")?.unwrap_or_else(|| DEFAULT_ADDRESS.into());
        let assets_dir = var("ASSETS_DIR")?.unwrap_or_else(|| DEFAULT_ASSETS_DIR.into());
        let mirror_origin = var("MIRROR_ORIGIN")?.unwrap_or_else(|| DEFAULT_ORIGIN.into());

        Ok(Self {
            address,
            assets_dir: assets_dir.into(),
            mirror_origin: mirror_origin.parse()?,
        })
    }
}

/// Reads a variable with `dotenvy`, returning `None` when it's unset.
fn var(name: &'static str) -> Result<Option<String>, Error> {
    match dotenvy::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(source) => Err(Error::Var { name, source }),
    }
}
