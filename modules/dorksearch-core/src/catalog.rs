//! Curated library of prebuilt dork templates, grouped by category.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    FolderOpen,
    FileWarning,
    AlertTriangle,
    DoorOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DorkEntry {
    pub title: &'static str,
    /// Literal dork string, searched as-is.
    pub query: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub dorks: &'static [DorkEntry],
}

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "directories",
        title: "Open Directories",
        description: "Web servers exposing raw directory listings.",
        icon: Icon::FolderOpen,
        dorks: &[
            DorkEntry {
                title: "Generic directory listing",
                query: "intitle:\"index of\" \"parent directory\"",
                description: "Apache and nginx autoindex pages.",
            },
            DorkEntry {
                title: "Exposed backups folder",
                query: "intitle:\"index of\" \"backup\"",
                description: "Listings that contain a backup directory.",
            },
            DorkEntry {
                title: "Git repository metadata",
                query: "intitle:\"index of\" \".git\"",
                description: "Published .git folders that may leak source history.",
            },
            DorkEntry {
                title: "Uploads directory",
                query: "intitle:\"index of\" inurl:uploads",
                description: "User upload folders served without an index page.",
            },
        ],
    },
    Category {
        id: "sensitive-files",
        title: "Sensitive Files",
        description: "Configuration, credential and log files that were indexed by mistake.",
        icon: Icon::FileWarning,
        dorks: &[
            DorkEntry {
                title: "Environment files",
                query: "filetype:env \"DB_PASSWORD\"",
                description: "Framework .env files containing database credentials.",
            },
            DorkEntry {
                title: "SQL dumps",
                query: "filetype:sql \"INSERT INTO\" \"password\"",
                description: "Database exports with password columns.",
            },
            DorkEntry {
                title: "Log files with credentials",
                query: "filetype:log \"password\" \"username\"",
                description: "Application logs that captured login attempts.",
            },
            DorkEntry {
                title: "Private keys",
                query: "\"BEGIN RSA PRIVATE KEY\" filetype:key OR filetype:pem",
                description: "PEM encoded private keys.",
            },
            DorkEntry {
                title: "Confidential documents",
                query: "filetype:pdf \"confidential\" \"internal use only\"",
                description: "PDFs marked for internal distribution.",
            },
        ],
    },
    Category {
        id: "errors",
        title: "Error Messages",
        description: "Verbose errors revealing stack traces, paths and software versions.",
        icon: Icon::AlertTriangle,
        dorks: &[
            DorkEntry {
                title: "SQL syntax errors",
                query: "\"You have an error in your SQL syntax\"",
                description: "MySQL errors, a hint at injectable parameters.",
            },
            DorkEntry {
                title: "PHP warnings",
                query: "\"Warning: mysql_connect()\" \"on line\"",
                description: "PHP warnings leaking server paths.",
            },
            DorkEntry {
                title: "Django debug pages",
                query: "intitle:\"DisallowedHost\" \"Django\"",
                description: "Production sites left in DEBUG mode.",
            },
            DorkEntry {
                title: "ASP.NET stack traces",
                query: "\"Server Error in '/' Application\" \"Stack Trace\"",
                description: "Yellow screen of death pages.",
            },
        ],
    },
    Category {
        id: "login-portals",
        title: "Login Portals",
        description: "Administrative and remote-access entry points.",
        icon: Icon::DoorOpen,
        dorks: &[
            DorkEntry {
                title: "Admin panels",
                query: "inurl:admin intitle:\"login\"",
                description: "Generic administrator login pages.",
            },
            DorkEntry {
                title: "WordPress logins",
                query: "inurl:wp-login.php",
                description: "WordPress authentication pages.",
            },
            DorkEntry {
                title: "phpMyAdmin",
                query: "intitle:\"phpMyAdmin\" \"Welcome to phpMyAdmin\"",
                description: "Database administration consoles.",
            },
            DorkEntry {
                title: "Public Jira dashboards",
                query: "inurl:/secure/Dashboard.jspa intitle:\"System Dashboard\"",
                description: "Jira instances readable without signing in.",
            },
            DorkEntry {
                title: "VPN gateways",
                query: "inurl:\"/remote/login\" intitle:\"SSL VPN\"",
                description: "Remote access portals.",
            },
        ],
    },
];

/// Look up a category by id.
pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}
