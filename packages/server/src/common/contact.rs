//! Contact extraction: find recruiter email addresses in free-text job descriptions.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::common::utils::escape_html;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
}

/// All email-address-shaped substrings of `text`, in order of appearance.
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn has_email(text: &str) -> bool {
    EMAIL_REGEX.is_match(text)
}

/// Render contact text as HTML with every email turned into a `mailto:` link.
///
/// The text is escaped first; the email character class contains nothing
/// that escaping rewrites, so matches survive intact.
pub fn highlight_emails(contact: &str) -> String {
    let escaped = escape_html(contact);
    EMAIL_REGEX
        .replace_all(&escaped, |caps: &Captures| {
            let email = &caps[0];
            format!(
                r#"<a href="mailto:{email}" style="color: blue;">{email}</a>"#,
                email = email
            )
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_emails_in_order() {
        let text = "Send your CV to jobs@acme.eu or, for questions, hr.team+eu@acme.co.uk.";
        assert_eq!(
            extract_emails(text),
            vec!["jobs@acme.eu".to_string(), "hr.team+eu@acme.co.uk".to_string()]
        );
    }

    #[test]
    fn ignores_text_without_emails() {
        assert!(extract_emails("Apply through our careers page").is_empty());
        assert!(extract_emails("ping @someone on slack").is_empty());
        assert!(!has_email("name at domain dot com"));
    }

    #[test]
    fn requires_alphabetic_tld() {
        assert!(extract_emails("user@host.c0m").is_empty());
        assert!(extract_emails("user@host.c").is_empty());
        assert!(has_email("user@host.io"));
    }

    #[test]
    fn pipe_is_not_part_of_tld() {
        assert!(extract_emails("user@host.|x").is_empty());
    }

    #[test]
    fn highlights_each_email() {
        let html = highlight_emails("jobs@acme.eu, hr@acme.eu");
        assert_eq!(
            html,
            "<a href=\"mailto:jobs@acme.eu\" style=\"color: blue;\">jobs@acme.eu</a>, \
             <a href=\"mailto:hr@acme.eu\" style=\"color: blue;\">hr@acme.eu</a>"
        );
    }

    #[test]
    fn repeated_email_is_wrapped_once_per_occurrence() {
        let html = highlight_emails("a@b.io, a@b.io");
        assert_eq!(html.matches("<a href=").count(), 2);
        assert!(!html.contains("<a href=\"mailto:<a"));
    }

    #[test]
    fn highlight_escapes_surrounding_text() {
        let html = highlight_emails("<b>No direct contact available</b>");
        assert_eq!(html, "&lt;b&gt;No direct contact available&lt;/b&gt;");
    }
}
