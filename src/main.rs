use std::path::PathBuf;

use anyhow::{Context, Result};
use badge_renderer::{BadgeProfile, BadgeRenderer, IconBatch, STANDARD_DIRECTORY};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Generates the extension's badge icons.
#[derive(Parser, Debug)]
#[command(name = "badge-renderer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the icon set (the default when no command is given)
    Icons(IconsArgs),
    /// Print the standard badge profile as JSON
    Profile,
    /// Post test credentials to the login endpoints and diagnose the results
    #[cfg(feature = "probe")]
    Probe(ProbeArgs),
}

#[derive(Args, Debug, Default)]
struct IconsArgs {
    /// Output directory
    #[arg(long, default_value = STANDARD_DIRECTORY)]
    out_dir: PathBuf,

    /// Icon size in pixels; repeat for several sizes [default: 16 48 128]
    #[arg(long = "size")]
    sizes: Vec<u32>,

    /// JSON badge profile to render with
    #[arg(long)]
    profile: Option<PathBuf>,
}

#[cfg(feature = "probe")]
#[derive(Args, Debug)]
struct ProbeArgs {
    /// Local login endpoint
    #[arg(long, default_value = badge_renderer::probe::LOCAL_LOGIN_URL)]
    local_url: String,

    /// Production login endpoint; repeat to probe several routes
    #[arg(long = "production-url")]
    production_urls: Vec<String>,

    #[arg(long, default_value = "testuser2")]
    username: String,

    #[arg(long, default_value = "testpass")]
    password: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        None => render_icons(IconsArgs {
            out_dir: PathBuf::from(STANDARD_DIRECTORY),
            ..IconsArgs::default()
        }),
        Some(Command::Icons(args)) => render_icons(args),
        Some(Command::Profile) => {
            println!("{}", BadgeProfile::standard().to_json_pretty()?);
            Ok(())
        }
        #[cfg(feature = "probe")]
        Some(Command::Probe(args)) => run_probe(args),
    }
}

fn render_icons(args: IconsArgs) -> Result<()> {
    let mut renderer = match &args.profile {
        Some(path) => {
            let profile = BadgeProfile::load(path)
                .with_context(|| format!("loading profile {}", path.display()))?;
            BadgeRenderer::from_profile(&profile)?
        }
        None => BadgeRenderer::new(),
    };

    let batch = if args.sizes.is_empty() {
        IconBatch {
            directory: args.out_dir,
            ..IconBatch::standard()
        }
    } else {
        IconBatch::new(args.out_dir, args.sizes)
    };

    batch
        .render_each(&mut renderer, |icon| println!("{icon}"))
        .context("rendering icon set")?;
    println!("All icons created successfully!");
    Ok(())
}

#[cfg(feature = "probe")]
fn run_probe(args: ProbeArgs) -> Result<()> {
    use badge_renderer::probe::{Credentials, LoginProbe, ProbeTarget, TargetRole};

    let mut targets = vec![ProbeTarget::local(args.local_url)];
    if args.production_urls.is_empty() {
        targets.extend(
            ProbeTarget::defaults()
                .into_iter()
                .filter(|t| t.role == TargetRole::Production),
        );
    } else {
        targets.extend(args.production_urls.into_iter().map(ProbeTarget::production));
    }

    let credentials = Credentials::new(args.username, args.password);
    let probe = LoginProbe::new().context("building HTTP client")?;

    let report = probe.run(&targets, &credentials);
    for result in &report.results {
        println!("{result}\n");
    }
    println!("{report}");
    Ok(())
}
