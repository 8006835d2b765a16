use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hereya_s3_bucket_stack::{
    app::{AppBuilder, AssemblyBackend, DEFAULT_OUT_DIR, DEFAULT_STACK_NAME},
    domain::{models::StackEnvironment, value_objects::StackName},
};
use std::{path::PathBuf, str::FromStr};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "hereya-s3-bucket")]
#[command(about = "Synthesize the Hereya S3 bucket stack as a CloudFormation template", long_about = None)]
struct Cli {
    /// Stack name, also used in the bucket name
    #[arg(short, long, env = "STACK_NAME", default_value = DEFAULT_STACK_NAME)]
    stack_name: String,

    /// Target AWS account (environment-agnostic when unset)
    #[arg(long, env = "CDK_DEPLOY_ACCOUNT")]
    account: Option<String>,

    /// Target AWS region (resolved at deploy time when unset)
    #[arg(long, env = "CDK_DEPLOY_REGION")]
    region: Option<String>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the template and manifest to a cloud assembly directory
    Synth {
        /// Output directory
        #[arg(short, long, env = "CDK_OUTDIR", default_value = DEFAULT_OUT_DIR)]
        output: PathBuf,
    },

    /// Print the template to stdout
    Print,
}

impl Cli {
    fn environment(&self) -> StackEnvironment {
        StackEnvironment::new(self.account.clone(), self.region.clone())
    }

    fn assembly_backend(&self) -> AssemblyBackend {
        match &self.command {
            Commands::Synth { output } => AssemblyBackend::FileSystem {
                out_dir: output.clone(),
            },
            Commands::Print => AssemblyBackend::InMemory,
        }
    }

    fn init_logging(&self) -> Result<()> {
        let level = LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::INFO);

        // stdout is reserved for `print`
        tracing_subscriber::registry()
            .with(level)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to initialize logging")?;

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging()?;

    let app = AppBuilder::new()
        .with_assembly_backend(cli.assembly_backend())
        .build()
        .await
        .context("Failed to build application")?;

    let stack_name = StackName::from(cli.stack_name.as_str());

    match &cli.command {
        Commands::Synth { output } => {
            info!("Synthesizing {} into {}", stack_name, output.display());
            let synthesized = app
                .synth_stack(stack_name, cli.environment())
                .await
                .context("Failed to synthesize stack")?;
            info!(
                "Bucket {} declared in {}",
                synthesized.declaration.bucket.name,
                output.join(&synthesized.template_file).display()
            );
        }
        Commands::Print => {
            let (_, template) = app
                .synthesize(stack_name, cli.environment())
                .context("Failed to synthesize stack")?;
            println!("{}", template.to_json_pretty()?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "hereya-s3-bucket",
            "--stack-name",
            "MyTestStack",
            "--region",
            "eu-west-1",
            "synth",
            "--output",
            "out",
        ]);

        assert_eq!(cli.stack_name, "MyTestStack");
        assert_eq!(cli.region.as_deref(), Some("eu-west-1"));
        match cli.assembly_backend() {
            AssemblyBackend::FileSystem { out_dir } => assert_eq!(out_dir, PathBuf::from("out")),
            _ => panic!("Expected FileSystem backend"),
        }
    }

    #[test]
    fn test_print_uses_memory() {
        let cli = Cli::parse_from(["hereya-s3-bucket", "--stack-name", "Stack", "print"]);

        match cli.assembly_backend() {
            AssemblyBackend::InMemory => (),
            _ => panic!("Expected InMemory backend"),
        }
        assert_eq!(cli.stack_name, "Stack");
    }
}
