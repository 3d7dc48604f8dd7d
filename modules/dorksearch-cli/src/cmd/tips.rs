use console::style;
use dorksearch_core::{RESPONSIBLE_USE_WARNING, TIP_SECTIONS};

use crate::context::AppContext;

pub fn run(ctx: &AppContext) {
    ctx.print_header("Google Dorking Cheatsheet");
    println!();
    print!("{}", render());
    println!();
    ctx.print_warning(&format!("⚠  {}", RESPONSIBLE_USE_WARNING));
}

fn render() -> String {
    let mut out = String::new();
    for section in TIP_SECTIONS {
        out.push_str(&format!("{}\n", style(section.title).bold().underlined()));
        for tip in section.tips {
            out.push_str(&format!("  {}  {}\n", style(tip.heading).cyan(), tip.body));
            if let Some(example) = tip.example {
                out.push_str(&format!("      {}\n", style(example).green()));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_every_section_and_example() {
        let text = console::strip_ansi_codes(&render()).to_string();
        for section in TIP_SECTIONS {
            assert!(text.contains(section.title));
            for tip in section.tips {
                assert!(text.contains(tip.body));
                if let Some(example) = tip.example {
                    assert!(text.contains(example));
                }
            }
        }
    }
}
