//! Agent rules appended to free-text rules files (`CLAUDE.md`, `.cursorrules`, ...).

/// Any of these in a rules file means the rules are already installed.
pub const MARKERS: [&str; 2] = [".smarts", "Smarty McFly"];

pub const AGENT_RULE: &str = "
## Smarty McFly Documentation

**MANDATORY:** Before answering ANY question about a software tool, library, API, or CLI command, you MUST:

1. Read `.smarts/MANIFEST.md`, with no exceptions, even if you think you already know the answer.
2. If a matching topic is found, you MUST read every linked markdown file in that section before responding.
3. Base your answer on the documentation you read. Do not rely on training knowledge when local docs exist.
";

pub fn has_rules(text: &str) -> bool {
    MARKERS.iter().any(|marker| text.contains(marker))
}

/// `text` with the rule block appended, or `None` if the rules are present.
pub fn append_rules(text: &str) -> Option<String> {
    if has_rules(text) {
        return None;
    }
    let separator = if text.is_empty() || text.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    Some(format!("{}{}{}", text, separator, AGENT_RULE))
}
