//! Manual query builder.

use anyhow::{bail, Result};
use clap::Args;
use dialoguer::{Input, MultiSelect, Select};
use dorksearch_core::{find_operator, normalize_file_type, QueryDraft, FILE_TYPES, OPERATORS};

use crate::context::AppContext;

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Restrict results to a domain or TLD (site:)
    #[arg(short, long, default_value = "")]
    pub domain: String,

    /// Keyword or phrase; text containing ':' is used as raw syntax
    #[arg(short, long, default_value = "")]
    pub keyword: String,

    /// Operator applied to the keyword, e.g. intitle (repeatable)
    #[arg(long = "op", value_name = "OPERATOR")]
    pub operators: Vec<String>,

    /// File type constraint (filetype:)
    #[arg(short, long)]
    pub filetype: Option<String>,

    /// Also print AI keyword suggestions
    #[arg(short, long)]
    pub suggest: bool,

    /// Copy the query to the clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// Open the query as a Google search
    #[arg(short, long)]
    pub open: bool,
}

pub async fn run(ctx: &AppContext, args: BuildArgs) -> Result<()> {
    let draft = draft_from_args(&args)?;
    let query = draft.assemble();

    if query.is_empty() {
        ctx.print_warning("Nothing to build. Pass --domain, --keyword or --filetype.");
    } else {
        ctx.print_query(&query);
    }

    if args.suggest {
        print_suggestions(ctx, draft.keyword()).await;
    }
    if args.copy {
        ctx.copy(&query);
    }
    if args.open {
        ctx.search(&query);
    }
    Ok(())
}

fn draft_from_args(args: &BuildArgs) -> Result<QueryDraft> {
    let mut tokens = Vec::with_capacity(args.operators.len());
    for raw in &args.operators {
        match find_operator(raw) {
            Some(op) => tokens.push(op.name),
            None => {
                let names: Vec<&str> = OPERATORS.iter().map(|op| op.name).collect();
                bail!("Unknown operator '{}'. Available: {}", raw, names.join(" "))
            }
        }
    }

    let file_type = match args.filetype.as_deref().map(normalize_file_type) {
        Some(ft) if !ft.is_empty() && !FILE_TYPES.contains(&ft.as_str()) => {
            bail!("Unsupported file type '{}'. Available: {}", ft, FILE_TYPES.join(", "))
        }
        other => other.unwrap_or_default(),
    };

    Ok(QueryDraft::new()
        .with_domain(args.domain.trim())
        .with_keyword(args.keyword.as_str())
        .with_operators(tokens)
        .with_file_type(file_type))
}

async fn print_suggestions(ctx: &AppContext, keyword: &str) {
    if keyword.is_empty() {
        ctx.print_warning("Suggestions need a keyword.");
        return;
    }
    let suggestions = ctx.gateway.suggestions(keyword).await;
    if suggestions.is_empty() {
        ctx.print_info("No suggestions available.");
        return;
    }
    ctx.print_header("Suggestions");
    for s in &suggestions {
        eprintln!("  • {}", s);
    }
}

// =============================================================================
// Interactive
// =============================================================================

fn render_preview(ctx: &AppContext, draft: &QueryDraft) {
    println!();
    ctx.print_header("Live Preview");
    let query = draft.assemble();
    if query.is_empty() {
        ctx.print_info("(start building your query)");
    } else {
        println!("  {}", query);
    }
}

pub async fn interactive_menu(ctx: &AppContext) -> Result<()> {
    let items = [
        "🌐 Domain",
        "🔑 Keyword",
        "🧩 Operators",
        "📄 File type",
        "✨ AI suggestions",
        "🔍 Search on Google",
        "📋 Copy",
        "🧹 Clear keyword",
        "← Back",
    ];
    let mut draft = QueryDraft::new();

    loop {
        render_preview(ctx, &draft);

        let choice = Select::with_theme(&ctx.theme())
            .with_prompt("Builder")
            .items(&items)
            .default(0)
            .interact()?;

        draft = match choice {
            0 => {
                let domain: String = Input::<String>::with_theme(&ctx.theme())
                    .with_prompt("Domain (e.g. example.com, .gov)")
                    .with_initial_text(draft.domain())
                    .allow_empty(true)
                    .interact_text()?;
                draft.with_domain(domain.trim())
            }
            1 => {
                let keyword: String = Input::<String>::with_theme(&ctx.theme())
                    .with_prompt("Keyword")
                    .with_initial_text(draft.keyword())
                    .allow_empty(true)
                    .interact_text()?;
                draft.with_keyword(keyword)
            }
            2 => pick_operators(ctx, &draft)?,
            3 => pick_file_type(ctx, &draft)?,
            4 => pick_suggestion(ctx, &draft).await?,
            5 => {
                ctx.search(&draft.assemble());
                draft
            }
            6 => {
                ctx.copy(&draft.assemble());
                draft
            }
            7 => draft.clear_keyword(),
            _ => return Ok(()),
        };
    }
}

fn pick_operators(ctx: &AppContext, draft: &QueryDraft) -> Result<QueryDraft> {
    let labels: Vec<String> = OPERATORS
        .iter()
        .map(|op| format!("{:<12} {}", op.name, op.description))
        .collect();
    let active: Vec<bool> = OPERATORS
        .iter()
        .map(|op| draft.is_operator_active(op.name))
        .collect();

    let picked = MultiSelect::with_theme(&ctx.theme())
        .with_prompt("Operators (space to toggle)")
        .items(&labels)
        .defaults(&active)
        .interact()?;

    Ok(apply_operator_selection(draft, &picked))
}

/// Toggle only what changed so previously active operators keep their order.
fn apply_operator_selection(draft: &QueryDraft, picked: &[usize]) -> QueryDraft {
    OPERATORS
        .iter()
        .enumerate()
        .fold(draft.clone(), |draft, (i, op)| {
            if picked.contains(&i) != draft.is_operator_active(op.name) {
                draft.toggle_operator(op.name)
            } else {
                draft
            }
        })
}

fn pick_file_type(ctx: &AppContext, draft: &QueryDraft) -> Result<QueryDraft> {
    let mut items = vec!["Any"];
    items.extend_from_slice(FILE_TYPES);

    let current = draft
        .file_type()
        .and_then(|ft| FILE_TYPES.iter().position(|t| *t == ft))
        .map(|i| i + 1)
        .unwrap_or(0);

    let choice = Select::with_theme(&ctx.theme())
        .with_prompt("File type")
        .items(&items)
        .default(current)
        .interact()?;

    Ok(match choice {
        0 => draft.with_file_type(""),
        i => draft.with_file_type(FILE_TYPES[i - 1]),
    })
}

async fn pick_suggestion(ctx: &AppContext, draft: &QueryDraft) -> Result<QueryDraft> {
    if draft.keyword().is_empty() {
        ctx.print_warning("Enter a keyword first.");
        return Ok(draft.clone());
    }

    ctx.print_info("Asking for suggestions...");
    let suggestions = ctx.gateway.suggestions(draft.keyword()).await;
    if suggestions.is_empty() {
        ctx.print_info("No suggestions available.");
        return Ok(draft.clone());
    }

    let mut items = suggestions.clone();
    items.push("← Keep current keyword".to_string());
    let choice = Select::with_theme(&ctx.theme())
        .with_prompt("Replace keyword with")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match suggestions.get(choice) {
        Some(s) => draft.apply_suggestion(s),
        None => draft.clone(),
    })
}

#[cfg(test)]
mod tests {
    use dorksearch_core::testing::MockGateway;

    use super::*;
    use crate::context::testing::context;
    use crate::launcher::testing::RecordingLauncher;

    fn args() -> BuildArgs {
        BuildArgs::default()
    }

    #[test]
    fn operators_accept_bare_names() {
        let draft = draft_from_args(&BuildArgs {
            domain: "example.com".into(),
            keyword: "admin panel".into(),
            operators: vec!["intitle".into()],
            filetype: Some(".PDF".into()),
            ..args()
        })
        .unwrap();

        assert_eq!(
            draft.assemble(),
            "site:example.com intitle:\"admin panel\" filetype:pdf"
        );
    }

    #[test]
    fn keyword_whitespace_is_kept() {
        let draft = draft_from_args(&BuildArgs {
            keyword: "admin ".into(),
            operators: vec!["intitle:".into()],
            ..args()
        })
        .unwrap();

        assert_eq!(draft.keyword(), "admin ");
        assert_eq!(draft.assemble(), "intitle:\"admin \"");
    }

    #[test]
    fn unknown_operator_is_rejected() {
        let err = draft_from_args(&BuildArgs {
            operators: vec!["insite:".into()],
            ..args()
        })
        .unwrap_err();
        assert!(err.to_string().contains("Unknown operator 'insite:'"));
    }

    #[test]
    fn unsupported_file_type_is_rejected() {
        let result = draft_from_args(&BuildArgs {
            filetype: Some("exe".into()),
            ..args()
        });
        assert!(result.is_err());
    }

    #[test]
    fn selection_keeps_existing_operator_order() {
        let draft = QueryDraft::new()
            .with_keyword("x")
            .with_operators(["intext:", "intitle:"]);
        let intitle = OPERATORS.iter().position(|op| op.name == "intitle:").unwrap();
        let intext = OPERATORS.iter().position(|op| op.name == "intext:").unwrap();
        let inurl = OPERATORS.iter().position(|op| op.name == "inurl:").unwrap();

        let next = apply_operator_selection(&draft, &[intitle, intext, inurl]);
        assert_eq!(next.active_operators(), ["intext:", "intitle:", "inurl:"]);

        let next = apply_operator_selection(&next, &[inurl]);
        assert_eq!(next.active_operators(), ["inurl:"]);
    }

    #[tokio::test]
    async fn suggest_flag_asks_gateway_for_keyword() {
        let (ctx, gateway, _) = context(
            MockGateway::new().suggests(&["admin login"]),
            RecordingLauncher::default(),
        );

        run(
            &ctx,
            BuildArgs {
                keyword: "admin".into(),
                suggest: true,
                ..args()
            },
        )
        .await
        .unwrap();

        assert_eq!(gateway.suggestion_calls(), vec!["admin"]);
    }

    #[tokio::test]
    async fn empty_build_does_not_copy_or_open() {
        let (ctx, _, launcher) = context(MockGateway::new(), RecordingLauncher::default());

        run(
            &ctx,
            BuildArgs {
                copy: true,
                open: true,
                ..args()
            },
        )
        .await
        .unwrap();

        assert!(launcher.opened.lock().unwrap().is_empty());
        assert!(launcher.copied.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn open_and_copy_use_assembled_query() {
        let (ctx, _, launcher) = context(MockGateway::new(), RecordingLauncher::default());

        run(
            &ctx,
            BuildArgs {
                keyword: "inurl:config".into(),
                copy: true,
                open: true,
                ..args()
            },
        )
        .await
        .unwrap();

        assert_eq!(launcher.copied.lock().unwrap().as_slice(), ["inurl:config"]);
        assert_eq!(launcher.opened.lock().unwrap().len(), 1);
    }
}
