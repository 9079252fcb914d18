use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use image_charts::{is_known_parameter, ImageCharts, ImageChartsConfig};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "image_charts", version, about = "Build and download Image-Charts charts")]
struct Cli {
    /// JSON file with protocol, host, port, pathname, secret and timeoutMillis
    #[arg(long, env = "IMAGE_CHARTS_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, env = "IMAGE_CHARTS_SECRET", hide_env_values = true)]
    secret: Option<String>,

    #[arg(long)]
    protocol: Option<String>,

    #[arg(long)]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,

    #[arg(long)]
    pathname: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Chart parameter as key=value, repeatable
    #[arg(short = 'p', long = "param", value_parser = parse_param)]
    params: Vec<(String, String)>,

    #[command(subcommand)]
    output: Output,
}

#[derive(Debug, Subcommand)]
enum Output {
    /// Print the chart URL
    Url,
    /// Download the chart and print it as a data URI
    DataUri,
    /// Download the chart into a file
    File { path: PathBuf },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected key=value, got `{}`", raw))
}

impl Cli {
    fn image_charts_config(&self) -> anyhow::Result<ImageChartsConfig> {
        let base = match &self.config {
            Some(path) => ImageChartsConfig::from_json_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => ImageChartsConfig::default(),
        };
        Ok(base.merged_with(ImageChartsConfig {
            protocol: self.protocol.clone(),
            host: self.host.clone(),
            port: self.port,
            pathname: self.pathname.clone(),
            secret: self.secret.clone(),
            timeout_ms: self.timeout,
        }))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.params.is_empty() {
        return Err(anyhow!("at least one chart parameter is required (-p key=value)"));
    }

    let mut chart = ImageCharts::with_config(cli.image_charts_config()?);
    for (key, value) in &cli.params {
        if !is_known_parameter(key) {
            warn!(key = %key, "unknown chart parameter, sending it anyway");
        }
        chart = chart.set(key.as_str(), value.as_str());
    }

    match &cli.output {
        Output::Url => println!("{}", chart.to_url()?),
        Output::DataUri => println!("{}", chart.to_data_uri().await?),
        Output::File { path } => {
            chart.to_file(path).await?;
            println!("Image chart written at {}", path.display());
        }
    }
    Ok(())
}
