/// Characters that must never appear in a strict-mode branch name.
const FORBIDDEN: [char; 10] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|', ' '];

/// How aggressively a ticket title is sanitized before it becomes a branch
/// name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeMode {
    /// Azure DevOps policy: strip the forbidden set, collapse underscore
    /// runs, wrap the result in newlines (historical output contract).
    Strict,
    /// Jira policy: spaces become hyphens, nothing else changes.
    Simple,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName(pub String);

impl BranchName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats `{ticket_id}-{sanitized title}` under the given mode.
    ///
    /// Strict output keeps the leading and trailing newline the historical
    /// tooling printed, so existing callers see byte-identical output.
    pub fn format(ticket_id: &str, title: &str, mode: SanitizeMode) -> Self {
        match mode {
            SanitizeMode::Simple => Self(format!("{ticket_id}-{}", title.replace(' ', "-"))),
            SanitizeMode::Strict => {
                Self(format!("\n{ticket_id}-{}\n", sanitize_strict(title)))
            }
        }
    }
}

/// Replaces `" - "` with `-`, substitutes `_` for every forbidden character,
/// then collapses each underscore run to a single `_`.
///
/// The collapse is total, so it is idempotent: re-running it on its own
/// output changes nothing.
fn sanitize_strict(title: &str) -> String {
    let dehyphenated = title.replace(" - ", "-");

    let mut result = String::with_capacity(dehyphenated.len());
    let mut prev_underscore = false;
    for ch in dehyphenated.chars() {
        let mapped = if FORBIDDEN.contains(&ch) { '_' } else { ch };
        if mapped == '_' {
            if !prev_underscore {
                result.push('_');
            }
            prev_underscore = true;
        } else {
            result.push(mapped);
            prev_underscore = false;
        }
    }
    result
}
