// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Where the search backend lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            endpoint: default_endpoint(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Any endpoint string in the file is taken verbatim; validation happens when the client is built
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_endpoint_parsing(host in "[a-z]{1,12}", port in 1u16..u16::MAX) {
            let endpoint = format!("http://{}:{}", host, port);
            let toml_content = format!("[backend]\nendpoint = \"{}\"\n", endpoint);

            let config: Config = toml::from_str(&toml_content).unwrap();
            prop_assert_eq!(config.backend.endpoint, endpoint);
        }

        #[test]
        fn prop_missing_fields_use_defaults(include_section in prop::bool::ANY) {
            let toml_content = if include_section { "[backend]\n" } else { "" };

            let config: Config = toml::from_str(toml_content).unwrap();
            prop_assert_eq!(config.backend.endpoint, DEFAULT_ENDPOINT);
        }
    }
}
