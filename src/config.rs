//! Document profile configuration

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::error::Result;
use crate::generator::DEFAULT_SYMBOL;

/// Identity written into every document's root and metadata
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// `creator` attribute of the root element
    pub creator: String,
    pub author_name: String,
    /// Left part of the author email
    pub email_id: String,
    /// Right part of the author email
    pub email_domain: String,
    pub copyright_holder: String,
    pub link_href: String,
    pub link_text: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            creator: "Burnt Toast GPX Creator".to_string(),
            author_name: "Burnt Toast".to_string(),
            email_id: "doug".to_string(),
            email_domain: "svburnttoast.com".to_string(),
            copyright_holder: "Douglas Carroll".to_string(),
            link_href: "https://svburnttoast.com/".to_string(),
            link_text: "SV Burnt Toast".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Configs {
    pub profile: Profile,
    /// Symbol for waypoints created without one
    pub default_symbol: String,
}

impl Default for Configs {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            default_symbol: DEFAULT_SYMBOL.to_string(),
        }
    }
}

impl Configs {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// Load the first readable config of the candidates, defaults otherwise
pub fn load_configs<P: AsRef<Path>>(candidates: &[P]) -> Configs {
    for candidate in candidates {
        let path = candidate.as_ref();

        let yaml = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(_) => continue,
        };

        match Configs::from_yaml(&yaml) {
            Ok(conf) => {
                debug!("Config loaded from {}", path.display());
                return conf;
            }
            Err(e) => {
                warn!("Ignoring config {}: {}", path.display(), e);
                break;
            }
        }
    }

    Configs::default()
}
