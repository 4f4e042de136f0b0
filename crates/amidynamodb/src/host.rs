//! Newline-delimited JSON request loop.
//!
//! Each input line is one request, each output line the matching response.
//! The loop ends at end of input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use amidynamodb_core::diagnostics::Diagnostics;
use amidynamodb_core::provider::PROVIDER_TYPE_NAME;
use amidynamodb_core::schema::Schema;

use crate::error::Result;
use crate::provider::{AmiDynamoProvider, ProviderData};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum HostRequest {
    GetMetadata,
    GetSchema,
    ConfigureProvider {
        config: serde_json::Value,
    },
    ReadDataSource {
        type_name: String,
        config: serde_json::Value,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "response", rename_all = "snake_case")]
pub enum HostResponse {
    Metadata {
        type_name: String,
        version: String,
        data_sources: Vec<String>,
    },
    Schema {
        provider: Schema,
        data_sources: BTreeMap<String, Schema>,
    },
    Configured {
        diagnostics: Diagnostics,
    },
    DataSourceRead {
        state: Option<serde_json::Value>,
        diagnostics: Diagnostics,
    },
    Error {
        message: String,
    },
}

/// Serves one provider instance.
///
/// Holds the provider data from the last successful configure and hands it
/// to every data source it instantiates.
pub struct Host {
    provider: AmiDynamoProvider,
    provider_data: Option<ProviderData>,
}

impl Host {
    pub fn new(provider: AmiDynamoProvider) -> Self {
        Self {
            provider,
            provider_data: None,
        }
    }

    pub async fn handle(&mut self, request: HostRequest) -> HostResponse {
        match request {
            HostRequest::GetMetadata => {
                let metadata = self.provider.metadata();
                HostResponse::Metadata {
                    type_name: metadata.type_name,
                    version: metadata.version,
                    data_sources: self
                        .provider
                        .data_sources()
                        .into_iter()
                        .map(|factory| factory().type_name(PROVIDER_TYPE_NAME))
                        .collect(),
                }
            }
            HostRequest::GetSchema => HostResponse::Schema {
                provider: self.provider.schema(),
                data_sources: self
                    .provider
                    .data_sources()
                    .into_iter()
                    .map(|factory| {
                        let data_source = factory();
                        (data_source.type_name(PROVIDER_TYPE_NAME), data_source.schema())
                    })
                    .collect(),
            },
            HostRequest::ConfigureProvider { config } => {
                // A failed configure leaves the provider without a client.
                let response = self.provider.configure(&config).await;
                self.provider_data = response.provider_data;
                HostResponse::Configured {
                    diagnostics: response.diagnostics,
                }
            }
            HostRequest::ReadDataSource { type_name, config } => {
                let Some(mut data_source) = self.provider.data_source(&type_name) else {
                    return HostResponse::Error {
                        message: format!("Unknown data source type: {}", type_name),
                    };
                };
                data_source.configure(self.provider_data.as_ref());

                let response = data_source.read(&config).await;
                HostResponse::DataSourceRead {
                    state: response.state,
                    diagnostics: response.diagnostics,
                }
            }
        }
    }

    /// Decodes and handles one request line.
    pub async fn handle_line(&mut self, line: &str) -> HostResponse {
        match serde_json::from_str::<HostRequest>(line) {
            Ok(request) => self.handle(request).await,
            Err(err) => {
                tracing::warn!(error = %err, "Invalid request");
                HostResponse::Error {
                    message: format!("Invalid request: {}", err),
                }
            }
        }
    }

    /// Answers requests from `reader` on `writer` until end of input.
    ///
    /// A line that is not valid UTF-8 gets an error response; only I/O
    /// failures end the loop early.
    pub async fn serve<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line.trim()).await,
                Err(err) => {
                    tracing::warn!(error = %err, "Request is not valid UTF-8");
                    HostResponse::Error {
                        message: format!("Invalid request: {}", err),
                    }
                }
            };

            let mut encoded = serde_json::to_vec(&response)?;
            encoded.push(b'\n');
            writer.write_all(&encoded).await?;
            writer.flush().await?;
        }

        tracing::debug!("Input closed, stopping");
        Ok(())
    }
}
