//! Navigation locations.

use std::fmt;

use url::Url;

/// Origin used to resolve relative locations. Never leaves this module.
const BASE: &str = "http://console.local/";

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("invalid location `{location}`: {source}")]
    Parse {
        location: String,
        #[source]
        source: url::ParseError,
    },

    #[error("location `{0}` points outside the console")]
    External(String),
}

/// A parsed in-app location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl Location {
    /// Parse a location, resolving it against the console root.
    ///
    /// Relative locations (`forget`) resolve from `/`; dot segments are
    /// normalized. Locations naming another origin are rejected.
    pub fn parse(location: &str) -> Result<Self, LocationError> {
        let parse_err = |source| LocationError::Parse {
            location: location.to_string(),
            source,
        };
        let base = Url::parse(BASE).map_err(parse_err)?;
        let url = base.join(location).map_err(parse_err)?;

        if url.origin() != base.origin() {
            return Err(LocationError::External(location.to_string()));
        }

        Ok(Self {
            path: url.path().to_string(),
            query: url.query().map(str::to_string),
            fragment: url.fragment().map(str::to_string),
        })
    }

    /// Path plus query and fragment.
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if let Some(query) = &self.query {
            full.push('?');
            full.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            full.push('#');
            full.push_str(fragment);
        }
        full
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}
