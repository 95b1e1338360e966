//! Test fixtures - reusable template and config content.

/// A minimal page template
pub const HOME_TEMPLATE: &str = "<h1>{{ title }}</h1>\n";

/// A nested partial
pub const USER_CARD_TEMPLATE: &str = "<div class=\"card\">{{ user.name }}</div>\n";

/// Project config selecting the mirrored layout
pub const MIRRORED_CONFIG: &str = r#"
[cache]
layout = "mirrored"
"#;

/// Project config turning the cache off
pub const PASS_THROUGH_CONFIG: &str = r#"
[cache]
enabled = false
"#;

/// Project config with a misspelled key
pub const TYPO_CONFIG: &str = r#"
[cache]
layuot = "mirrored"
"#;
