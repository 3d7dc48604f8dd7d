//! Static cheatsheet content for the tips screen.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub heading: &'static str,
    pub body: &'static str,
    pub example: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipSection {
    pub title: &'static str,
    pub tips: &'static [Tip],
}

pub const RESPONSIBLE_USE_WARNING: &str = "Accessing systems, downloading sensitive data, or \
exploiting vulnerabilities without explicit permission is illegal.";

pub const TIP_SECTIONS: &[TipSection] = &[
    TipSection {
        title: "Core Operators",
        tips: &[
            Tip {
                heading: "site:",
                body: "Limits results to a specific domain or TLD.",
                example: Some("site:nasa.gov"),
            },
            Tip {
                heading: "filetype: / ext:",
                body: "Searches for specific file extensions.",
                example: Some("filetype:pdf confidentiality"),
            },
            Tip {
                heading: "intitle:",
                body: "Finds pages with specific text in the HTML title.",
                example: Some("intitle:\"index of\""),
            },
            Tip {
                heading: "inurl:",
                body: "Finds pages with specific text in the URL.",
                example: Some("inurl:admin"),
            },
        ],
    },
    TipSection {
        title: "Responsible Use",
        tips: &[
            Tip {
                heading: "Scope",
                body: "Only test domains you own or have permission to audit.",
                example: None,
            },
            Tip {
                heading: "Disclosure",
                body: "Report exposed sensitive data to the organization via their \
                       Responsible Disclosure program.",
                example: None,
            },
            Tip {
                heading: "Intent",
                body: "Do not use these queries for malicious purposes or cyberstalking.",
                example: None,
            },
        ],
    },
    TipSection {
        title: "Advanced Techniques",
        tips: &[
            Tip {
                heading: "Logic Operators",
                body: "Use OR, AND, and - (minus) to refine results.",
                example: Some("site:linkedin.com -site:www.linkedin.com"),
            },
            Tip {
                heading: "Wildcards",
                body: "Use the asterisk * as a placeholder for any unknown terms.",
                example: Some("\"password is *\" filetype:txt"),
            },
            Tip {
                heading: "Grouping",
                body: "Use parentheses () to group logic for complex queries.",
                example: Some("site:gov (ext:pdf OR ext:docx)"),
            },
            Tip {
                heading: "Precision",
                body: "Combining multiple operators (e.g. site: + inurl:) narrows results sharply.",
                example: None,
            },
        ],
    },
];
