//! Configuration module
//!
//! Resolves where execution records come from: the control-plane API or a
//! JSON file.

use std::path::PathBuf;

use clap::Args;
use edgerun_client::{ApiRecordSource, ControlPlaneClient, FileRecordSource, RecordSource};

/// Label selector matching runs of the edge model pipeline
pub const DEFAULT_LABEL_SELECTOR: &str = "tekton.dev/pipeline=aiedge-e2e";

/// Record source options
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Control-plane API URL
    #[arg(long, env = "EDGERUN_API_URL")]
    pub api_url: Option<String>,

    /// Namespace the pipeline runs live in
    #[arg(short, long, env = "EDGERUN_NAMESPACE", default_value = "default")]
    pub namespace: String,

    /// Label selector scoping the listed runs
    #[arg(long, env = "EDGERUN_LABEL_SELECTOR", default_value = DEFAULT_LABEL_SELECTOR)]
    pub label_selector: String,

    /// Bearer token for the API
    #[arg(long, env = "EDGERUN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Read records from a JSON file instead of the API
    #[arg(short, long, env = "EDGERUN_RECORDS_FILE")]
    pub file: Option<PathBuf>,
}

/// Where to load execution records from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Api {
        url: String,
        namespace: String,
        label_selector: String,
        token: Option<String>,
    },
    File {
        path: PathBuf,
    },
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceConfig,
}

impl Config {
    /// Build the configuration from parsed arguments
    ///
    /// Exactly one of `--api-url` and `--file` must be given.
    pub fn from_args(args: SourceArgs) -> anyhow::Result<Self> {
        let source = match (args.api_url, args.file) {
            (Some(_), Some(_)) => anyhow::bail!("--api-url and --file are mutually exclusive"),
            (None, None) => anyhow::bail!(
                "no record source given: pass --api-url or --file (or set EDGERUN_API_URL / EDGERUN_RECORDS_FILE)"
            ),
            (Some(url), None) => SourceConfig::Api {
                url,
                namespace: args.namespace,
                label_selector: args.label_selector,
                token: args.token.filter(|t| !t.is_empty()),
            },
            (None, Some(path)) => SourceConfig::File { path },
        };

        Ok(Self { source })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        match &self.source {
            SourceConfig::Api { url, namespace, .. } => {
                if url.is_empty() {
                    anyhow::bail!("api_url cannot be empty");
                }

                if !url.starts_with("http://") && !url.starts_with("https://") {
                    anyhow::bail!("api_url must start with http:// or https://");
                }

                if namespace.trim().is_empty() {
                    anyhow::bail!("namespace cannot be empty");
                }
            }
            SourceConfig::File { path } => {
                if path.as_os_str().is_empty() {
                    anyhow::bail!("records file path cannot be empty");
                }
            }
        }

        Ok(())
    }

    /// Build the record source described by this configuration
    pub fn record_source(&self) -> Box<dyn RecordSource> {
        match &self.source {
            SourceConfig::Api {
                url,
                namespace,
                label_selector,
                token,
            } => {
                let mut client = ControlPlaneClient::new(url);
                if let Some(token) = token {
                    client = client.with_token(token);
                }
                Box::new(ApiRecordSource::new(
                    client,
                    namespace.clone(),
                    label_selector.clone(),
                ))
            }
            SourceConfig::File { path } => Box::new(FileRecordSource::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SourceArgs {
        SourceArgs {
            api_url: None,
            namespace: "edge-pipelines".to_string(),
            label_selector: DEFAULT_LABEL_SELECTOR.to_string(),
            token: None,
            file: None,
        }
    }

    #[test]
    fn test_api_source() {
        let config = Config::from_args(SourceArgs {
            api_url: Some("https://api.cluster.example:6443".to_string()),
            token: Some(String::new()),
            ..args()
        })
        .unwrap();

        assert_eq!(
            config.source,
            SourceConfig::Api {
                url: "https://api.cluster.example:6443".to_string(),
                namespace: "edge-pipelines".to_string(),
                label_selector: DEFAULT_LABEL_SELECTOR.to_string(),
                token: None,
            }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_source() {
        let config = Config::from_args(SourceArgs {
            file: Some(PathBuf::from("runs.json")),
            ..args()
        })
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.record_source().describe(), "runs.json");
    }

    #[test]
    fn test_source_is_required_and_exclusive() {
        assert!(Config::from_args(args()).is_err());
        assert!(
            Config::from_args(SourceArgs {
                api_url: Some("http://localhost:8001".to_string()),
                file: Some(PathBuf::from("runs.json")),
                ..args()
            })
            .is_err()
        );
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::from_args(SourceArgs {
            api_url: Some("not-a-url".to_string()),
            ..args()
        })
        .unwrap();

        // Invalid URL should fail
        assert!(config.validate().is_err());

        config.source = SourceConfig::Api {
            url: "http://localhost:8001".to_string(),
            namespace: " ".to_string(),
            label_selector: String::new(),
            token: None,
        };

        // Blank namespace should fail
        assert!(config.validate().is_err());
    }
}
