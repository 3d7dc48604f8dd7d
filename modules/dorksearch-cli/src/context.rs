use std::sync::Arc;

use console::style;
use dialoguer::theme::ColorfulTheme;
use dorksearch_core::{search_url, Config, DorkGateway};
use tracing::warn;

use crate::launcher::Launcher;

/// Everything a command needs: configuration, the AI gateway and desktop side effects.
pub struct AppContext {
    pub config: Config,
    pub gateway: Arc<dyn DorkGateway>,
    launcher: Box<dyn Launcher>,
}

impl AppContext {
    pub fn new(config: Config, gateway: Arc<dyn DorkGateway>, launcher: Box<dyn Launcher>) -> Self {
        Self {
            config,
            gateway,
            launcher,
        }
    }

    pub fn theme(&self) -> ColorfulTheme {
        ColorfulTheme::default()
    }

    // =========================================================================
    // Output
    // =========================================================================

    pub fn print_header(&self, text: &str) {
        eprintln!("{}", style(text).cyan().bold());
    }

    pub fn print_info(&self, text: &str) {
        eprintln!("{}", style(text).dim());
    }

    pub fn print_success(&self, text: &str) {
        eprintln!("{}", style(text).green());
    }

    pub fn print_warning(&self, text: &str) {
        eprintln!("{}", style(text).yellow());
    }

    /// The query itself goes to stdout so it can be piped.
    pub fn print_query(&self, query: &str) {
        println!("{}", query);
    }

    // =========================================================================
    // Side effects
    // =========================================================================

    /// Open a Google search for `query`. Returns false when nothing was opened.
    pub fn search(&self, query: &str) -> bool {
        if query.is_empty() {
            return false;
        }
        let url = search_url(&self.config.search_url, query);
        match self.launcher.open_url(&url) {
            Ok(()) => {
                self.print_success("Opened search in browser");
                true
            }
            Err(e) => {
                warn!(error = %format!("{:#}", e), "Could not open browser");
                self.print_warning(&format!("Could not open browser. Search URL: {}", url));
                false
            }
        }
    }

    /// Copy `query` to the clipboard. Returns false when nothing was copied.
    pub fn copy(&self, query: &str) -> bool {
        if query.is_empty() {
            return false;
        }
        match self.launcher.copy_text(query) {
            Ok(()) => {
                self.print_success("Copied to clipboard");
                true
            }
            Err(e) => {
                warn!(error = %format!("{:#}", e), "Could not copy to clipboard");
                self.print_warning(&format!("Could not copy. Query: {}", query));
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use dorksearch_core::testing::MockGateway;
    use dorksearch_core::Config;

    use super::AppContext;
    use crate::launcher::testing::RecordingLauncher;

    /// Context over a mock gateway, with a handle on what the launcher saw.
    pub fn context(
        gateway: MockGateway,
        launcher: RecordingLauncher,
    ) -> (AppContext, Arc<MockGateway>, Arc<RecordingLauncher>) {
        let gateway = Arc::new(gateway);
        let launcher = Arc::new(launcher);
        let ctx = AppContext::new(
            Config::default(),
            gateway.clone(),
            Box::new(launcher.clone()),
        );
        (ctx, gateway, launcher)
    }
}
