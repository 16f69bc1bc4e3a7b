use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use release_version::config::{DEFAULT_PRIMARY_INDEX, DEFAULT_SECONDARY_INDEX};
use release_version::context::BuildContext;
use release_version::index::IndexClient;
use release_version::pipeline;

#[derive(Parser)]
#[command(name = "release-version")]
#[command(version, about = "Resolve the version tag for a package release")]
struct Cli {
    /// File containing the `__version__ = "<version>"` declaration
    #[arg(long, value_name = "PATH")]
    version_file: PathBuf,

    /// Package name to look up on the release indexes
    #[arg(long, value_name = "NAME")]
    package: String,

    /// Primary release index host
    #[arg(long, value_name = "HOST", default_value = DEFAULT_PRIMARY_INDEX)]
    index: String,

    /// Secondary release index host
    #[arg(long, value_name = "HOST", default_value = DEFAULT_SECONDARY_INDEX)]
    extra_index: String,

    /// Build run identifier, overriding $GITHUB_RUN_NUMBER
    #[arg(long, value_name = "ID")]
    run_number: Option<String>,

    /// Append the run-number suffix even without a collision
    /// (also enabled by $GITHUB_FORCE_RUN_NUMBER)
    #[arg(long)]
    force_suffix: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let env = BuildContext::from_env();
    let ctx = BuildContext::new(
        cli.run_number.or(env.run_number),
        cli.force_suffix || env.force_suffix,
    );

    let primary = IndexClient::new(&cli.index);
    let secondary = IndexClient::new(&cli.extra_index);

    let resolution = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(pipeline::resolve_release_version(
            &cli.version_file,
            &cli.package,
            &primary,
            &secondary,
            &ctx,
        ))?;

    // The resolved version is the only stdout output; diagnostics go to
    // stderr so the caller can capture it directly.
    println!("{}", resolution.version);

    Ok(())
}
