//! Browse the curated dork database.

use anyhow::{bail, Result};
use dialoguer::Select;
use dorksearch_core::{category, Category, DorkEntry, Icon, CATEGORIES};

use crate::context::AppContext;

pub fn run(ctx: &AppContext, category_id: Option<&str>, search: Option<usize>) -> Result<()> {
    let Some(id) = category_id else {
        if search.is_some() {
            bail!("--search needs --category");
        }
        list_categories(ctx);
        return Ok(());
    };

    let category = find_category(id)?;
    match search {
        Some(n) => {
            let entry = entry_at(category, n)?;
            ctx.print_query(entry.query);
            ctx.search(entry.query);
        }
        None => print_category(ctx, category),
    }
    Ok(())
}

fn find_category(id: &str) -> Result<&'static Category> {
    match category(id) {
        Some(c) => Ok(c),
        None => {
            let ids: Vec<&str> = CATEGORIES.iter().map(|c| c.id).collect();
            bail!("Unknown category '{}'. Available: {}", id, ids.join(", "))
        }
    }
}

/// 1-based lookup, matching the numbers printed by `print_category`.
fn entry_at(category: &'static Category, n: usize) -> Result<&'static DorkEntry> {
    match n.checked_sub(1).and_then(|i| category.dorks.get(i)) {
        Some(entry) => Ok(entry),
        None => bail!(
            "No entry {} in '{}' (1-{})",
            n,
            category.id,
            category.dorks.len()
        ),
    }
}

fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::FolderOpen => "📂",
        Icon::FileWarning => "📄",
        Icon::AlertTriangle => "⚠️",
        Icon::DoorOpen => "🚪",
    }
}

fn list_categories(ctx: &AppContext) {
    ctx.print_header("Dork Database");
    for c in CATEGORIES {
        println!(
            "{} {:<16} {} ({} dorks)",
            icon_glyph(c.icon),
            c.id,
            c.title,
            c.dorks.len()
        );
        ctx.print_info(&format!("     {}", c.description));
    }
}

fn print_category(ctx: &AppContext, category: &Category) {
    ctx.print_header(&format!("{} {}", icon_glyph(category.icon), category.title));
    ctx.print_info(category.description);
    println!();
    for (i, entry) in category.dorks.iter().enumerate() {
        println!("{:>2}. {}", i + 1, entry.title);
        println!("    {}", entry.query);
        ctx.print_info(&format!("    {}", entry.description));
    }
}

// =============================================================================
// Interactive
// =============================================================================

pub fn interactive_menu(ctx: &AppContext) -> Result<()> {
    loop {
        let mut items: Vec<String> = CATEGORIES
            .iter()
            .map(|c| format!("{} {} ({})", icon_glyph(c.icon), c.title, c.dorks.len()))
            .collect();
        items.push("← Back".to_string());

        let choice = Select::with_theme(&ctx.theme())
            .with_prompt("Dork Database")
            .items(&items)
            .default(0)
            .interact()?;

        match CATEGORIES.get(choice) {
            Some(category) => category_menu(ctx, category)?,
            None => return Ok(()),
        }
    }
}

fn category_menu(ctx: &AppContext, category: &Category) -> Result<()> {
    ctx.print_info(category.description);

    let mut items: Vec<String> = category
        .dorks
        .iter()
        .map(|d| format!("{}  {}", d.title, d.query))
        .collect();
    items.push("← Back".to_string());

    loop {
        let choice = Select::with_theme(&ctx.theme())
            .with_prompt(category.title)
            .items(&items)
            .default(0)
            .interact()?;

        let Some(entry) = category.dorks.get(choice) else {
            return Ok(());
        };
        ctx.print_info(entry.description);
        entry_actions(ctx, entry.query)?;
    }
}

/// Search or copy a finished query.
pub fn entry_actions(ctx: &AppContext, query: &str) -> Result<()> {
    let items = ["🔍 Search on Google", "📋 Copy", "← Back"];
    let choice = Select::with_theme(&ctx.theme())
        .with_prompt(query)
        .items(&items)
        .default(0)
        .interact()?;

    match choice {
        0 => {
            ctx.search(query);
        }
        1 => {
            ctx.copy(query);
        }
        _ => {}
    }
    Ok(())
}
