//! Natural language to dork via the AI gateway.

use anyhow::{bail, Result};
use clap::Args;
use dialoguer::{Confirm, Input};
use dorksearch_core::GenerationMode;
use tracing::info;

use crate::context::AppContext;

pub const EMPTY_PROMPT_TEXT: &str = "Nothing to generate. Describe what you want to find.";

pub const GENERATION_FAILED_TEXT: &str =
    "Failed to generate dork. Please check your API configuration or try again.";

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// What you are looking for, in plain language
    #[arg(required = true, num_args = 1..)]
    pub prompt: Vec<String>,

    /// Use the reasoning model (slower, more thorough)
    #[arg(long)]
    pub deep: bool,

    /// Copy the generated dork to the clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// Open the generated dork as a Google search
    #[arg(short, long)]
    pub open: bool,
}

pub async fn run(ctx: &AppContext, args: GenerateArgs) -> Result<()> {
    let prompt = args.prompt.join(" ");
    if prompt.trim().is_empty() {
        bail!(EMPTY_PROMPT_TEXT);
    }
    let mode = GenerationMode::from_deep_flag(args.deep);

    let Some(dork) = generate(ctx, &prompt, mode).await else {
        bail!(GENERATION_FAILED_TEXT);
    };

    ctx.print_query(&dork);
    if args.copy {
        ctx.copy(&dork);
    }
    if args.open {
        ctx.search(&dork);
    }
    Ok(())
}

/// `None` means the request failed.
async fn generate(ctx: &AppContext, prompt: &str, mode: GenerationMode) -> Option<String> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Some(String::new());
    }

    info!(?mode, "Generating dork");
    ctx.print_info(match mode {
        GenerationMode::Fast => "Generating...",
        GenerationMode::Deep => "Thinking deeply...",
    });

    ctx.gateway.generate_dork(prompt, mode).await.ok()
}

// =============================================================================
// Interactive
// =============================================================================

pub async fn interactive_menu(ctx: &AppContext) -> Result<()> {
    loop {
        let prompt: String = Input::<String>::with_theme(&ctx.theme())
            .with_prompt("Describe what you want to find (empty to go back)")
            .allow_empty(true)
            .interact_text()?;
        if prompt.trim().is_empty() {
            return Ok(());
        }

        let deep = Confirm::with_theme(&ctx.theme())
            .with_prompt("Deep think mode?")
            .default(false)
            .interact()?;

        match generate(ctx, &prompt, GenerationMode::from_deep_flag(deep)).await {
            Some(dork) if !dork.is_empty() => {
                ctx.print_header("Generated Dork");
                ctx.print_query(&dork);
                super::catalog::entry_actions(ctx, &dork)?;
            }
            Some(_) => ctx.print_info("The model returned nothing. Try rephrasing."),
            None => ctx.print_warning(GENERATION_FAILED_TEXT),
        }
    }
}
