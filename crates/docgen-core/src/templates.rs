use crate::error::{DocgenError, Result};
use rust_embed::Embed;

/// Markdown payloads compiled into the binary.
#[derive(Embed)]
#[folder = "templates/"]
struct Templates;

pub const RESEARCH: &str = "research.md";
pub const PRD: &str = "prd.md";
pub const ARCHITECTURE: &str = "architecture.md";
pub const README: &str = "readme.md";

/// Load an embedded template verbatim. No substitution is applied.
pub fn load(name: &str) -> Result<String> {
    let file = <Templates as Embed>::get(name)
        .ok_or_else(|| DocgenError::TemplateMissing(name.to_string()))?;
    String::from_utf8(file.data.into_owned())
        .map_err(|_| DocgenError::TemplateEncoding(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    const ALL: [&str; 4] = [RESEARCH, PRD, ARCHITECTURE, README];

    fn sha256_hex(data: &[u8]) -> String {
        Sha256::digest(data)
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect()
    }

    #[test]
    fn unknown_template_is_an_error() {
        let err = load("changelog.md").unwrap_err();
        assert!(matches!(err, DocgenError::TemplateMissing(ref n) if n == "changelog.md"));
    }

    #[test]
    fn templates_end_with_single_newline() {
        for name in ALL {
            let body = load(name).unwrap();
            assert!(body.starts_with("# "), "{name} should open with a title");
            assert!(body.ends_with('\n'), "{name} should end with a newline");
            assert!(!body.ends_with("\n\n"), "{name} has trailing blank lines");
        }
    }

    #[test]
    fn templates_carry_no_placeholders() {
        for name in ALL {
            let body = load(name).unwrap();
            assert!(!body.contains("{{"), "{name} contains a template marker");
        }
    }

    // name, bytes, lines, sha256, last line
    const PINNED: [(&str, usize, usize, &str, &str); 4] = [
        (
            RESEARCH,
            10811,
            102,
            "3c82b481154c45010579ec6090ee782da879198087c13c7db75cff1a2a3cf03f",
            "* **Captured Data:** Each log entry includes the `actor_id` (user), `action_type` (e.g., \"DELETE_PROJECT\"), `resource_id`, `tenant_id`, and `timestamp`. This provides an immutable trail of evidence for tenant administrators.",
        ),
        (
            PRD,
            2974,
            53,
            "585072fd407a1389cde8c7192347fd3774062c6da2e6041d5d38c54f7a96ba7a",
            "* **NFR-005 (Usability):** The Frontend UI shall be responsive and function correctly on mobile devices.",
        ),
        (
            ARCHITECTURE,
            1846,
            50,
            "a89ff61ce935859ba097bc81381a3778988459a8651f9fecd631e459feb4c0ca",
            "19. `PUT /api/tasks/:id` - Update full task details",
        ),
        (
            README,
            2229,
            57,
            "ec5e6e695a9d91cb88a1f70904f7cf51715eeea379cab232bf35adf95071f6dd",
            "[Link to YouTube Demo Video]",
        ),
    ];

    #[test]
    fn payloads_are_pinned() {
        for (name, bytes, lines, digest, last) in PINNED {
            let body = load(name).unwrap();
            assert_eq!(body.len(), bytes, "{name} byte length");
            assert_eq!(body.lines().count(), lines, "{name} line count");
            assert_eq!(body.lines().last(), Some(last), "{name} last line");
            assert_eq!(sha256_hex(body.as_bytes()), digest, "{name} digest");
        }
    }
}
