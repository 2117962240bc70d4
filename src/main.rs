//! Gateway response transcoder CLI.
//!
//! Builds an HTTP response from command-line arguments and a body read from a
//! file or stdin, then prints the gateway payload as JSON.
//!
//! ```text
//! printf '{"ok":true}' | gateway-transcoder \
//!     -H 'Content-Type: application/json' \
//!     -H 'Set-Cookie: a=1' -H 'Set-Cookie: b=2'
//! ```

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, Response, StatusCode};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tokio::io::AsyncReadExt;

use gateway_transcoder::config::{load_config, TranscoderConfig};
use gateway_transcoder::observability::logging::init_logging;
use gateway_transcoder::{ApiGatewayProxyResponse, ApiGatewayV2Response, ResponseTranscoder};

#[derive(Parser)]
#[command(name = "gateway-transcoder")]
#[command(about = "Convert an HTTP response into an API Gateway payload", long_about = None)]
struct Cli {
    /// Response status code.
    #[arg(short, long, default_value_t = 200)]
    status: u16,

    /// Response header as "Name: value". Repeat for multiple headers.
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    headers: Vec<(HeaderName, HeaderValue)>,

    /// File holding the response body. Reads stdin when omitted.
    #[arg(short, long)]
    body_file: Option<PathBuf>,

    /// Gateway payload format.
    #[arg(short, long, value_enum, default_value_t = Format::Rest)]
    format: Format,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// REST API proxy integration (payload v1).
    Rest,
    /// HTTP API (payload v2).
    Http,
}

fn parse_header(raw: &str) -> Result<(HeaderName, HeaderValue), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected \"Name: value\", got {raw:?}"))?;
    let name = HeaderName::try_from(name.trim()).map_err(|e| e.to_string())?;
    let value = HeaderValue::try_from(value.trim()).map_err(|e| e.to_string())?;
    Ok((name, value))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => TranscoderConfig::default(),
    };
    init_logging(&config.observability);

    tracing::debug!(
        max_body_bytes = ?config.body.max_bytes,
        extra_textual = config.media_types.extra_textual.len(),
        "Configuration loaded"
    );

    let body = match &cli.body_file {
        Some(path) => tokio::fs::read(path).await?,
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin().read_to_end(&mut buf).await?;
            buf
        }
    };

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::from_u16(cli.status)?;
    for (name, value) in cli.headers {
        response.headers_mut().append(name, value);
    }

    let transcoder = ResponseTranscoder::from_config(&config)?;
    match cli.format {
        Format::Rest => {
            let payload: ApiGatewayProxyResponse = transcoder.transcode(response).await?;
            print_payload(&payload, cli.pretty)?;
        }
        Format::Http => {
            let payload: ApiGatewayV2Response = transcoder.transcode(response).await?;
            print_payload(&payload, cli.pretty)?;
        }
    }

    Ok(())
}

fn print_payload<T: Serialize>(payload: &T, pretty: bool) -> Result<(), serde_json::Error> {
    let json = if pretty {
        serde_json::to_string_pretty(payload)?
    } else {
        serde_json::to_string(payload)?
    };
    println!("{json}");
    Ok(())
}
