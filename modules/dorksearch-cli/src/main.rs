//! DorkSearch: build, browse and generate Google dorks from the terminal.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::FuzzySelect;
use dorksearch_core::{Config, GeminiGateway, RESPONSIBLE_USE_WARNING};
use tracing_subscriber::EnvFilter;

mod cmd;
mod context;
mod launcher;

use context::AppContext;
use launcher::SystemLauncher;

#[derive(Parser)]
#[command(name = "dorksearch")]
#[command(about = "Google dork builder, database and AI generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the curated dork database
    Catalog {
        /// Category id to list (e.g. directories)
        #[arg(short, long)]
        category: Option<String>,

        /// Open entry N of the category as a Google search
        #[arg(short, long, value_name = "N")]
        search: Option<usize>,
    },

    /// Assemble a dork from a domain, keyword, operators and file type
    Build(cmd::build::BuildArgs),

    /// Generate a dork from a plain-language request
    Generate(cmd::generate::GenerateArgs),

    /// Ask for keyword refinements
    Suggest {
        #[arg(required = true, num_args = 1..)]
        keyword: Vec<String>,
    },

    /// Chat with the dorking assistant
    Chat,

    /// Print the operator cheatsheet
    Tips,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    let _ = dotenvy::dotenv();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dorksearch=info,ai_client=info")),
        )
        .init();

    let config = Config::from_env();
    config.validate()?;
    config.log_redacted();

    let gateway = Arc::new(GeminiGateway::from_config(&config));
    let ctx = AppContext::new(config, gateway, Box::new(SystemLauncher));

    match cli.command {
        Some(Commands::Catalog { category, search }) => {
            cmd::catalog::run(&ctx, category.as_deref(), search)
        }
        Some(Commands::Build(args)) => cmd::build::run(&ctx, args).await,
        Some(Commands::Generate(args)) => cmd::generate::run(&ctx, args).await,
        Some(Commands::Suggest { keyword }) => cmd_suggest(&ctx, &keyword.join(" ")).await,
        Some(Commands::Chat) => cmd::chat::run(&ctx).await,
        Some(Commands::Tips) => {
            cmd::tips::run(&ctx);
            Ok(())
        }
        None => interactive_menu(&ctx).await,
    }
}

async fn cmd_suggest(ctx: &AppContext, keyword: &str) -> Result<()> {
    let suggestions = ctx.gateway.suggestions(keyword.trim()).await;
    if suggestions.is_empty() {
        ctx.print_info("No suggestions available.");
    }
    for s in suggestions {
        println!("{}", s);
    }
    Ok(())
}

async fn interactive_menu(ctx: &AppContext) -> Result<()> {
    ctx.print_header("DorkSearch");
    ctx.print_warning(RESPONSIBLE_USE_WARNING);

    let items = vec![
        "📚 Database →",
        "🛠  Builder →",
        "✨ AI Generator →",
        "💬 Chat",
        "💡 Tips",
        "❌ Exit",
    ];

    loop {
        println!();
        let choice = FuzzySelect::with_theme(&ctx.theme())
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact()?;

        match choice {
            0 => cmd::catalog::interactive_menu(ctx)?,
            1 => cmd::build::interactive_menu(ctx).await?,
            2 => cmd::generate::interactive_menu(ctx).await?,
            3 => cmd::chat::run(ctx).await?,
            4 => cmd::tips::run(ctx),
            _ => break,
        }
    }

    Ok(())
}
