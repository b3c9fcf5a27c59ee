use crate::domain::model::StaffLink;
use crate::utils::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;

// Room codes look like "G 009": one uppercase letter, optional space,
// exactly three digits.
static ROOM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]\s?\d{3}\b").expect("Failed to compile ROOM_RE"));

// Office hours look like "Dienstag 12:30 - 13:20 Uhr": a capitalized German
// weekday, a time range, and the trailing "Uhr" token.
static OFFICE_HOUR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-ZÄÖÜ][a-zäöü]+ \d{1,2}:\d{2}\s*-\s*\d{1,2}:\d{2} Uhr")
        .expect("Failed to compile OFFICE_HOUR_RE")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("Failed to compile EMAIL_RE")
});

/// First room code in document order, or `None` if the page has none.
pub fn extract_room(text: &str) -> Option<String> {
    ROOM_RE.find(text).map(|m| m.as_str().to_string())
}

/// First office-hour line in document order, or `None`.
pub fn extract_office_hour(text: &str) -> Option<String> {
    OFFICE_HOUR_RE.find(text).map(|m| m.as_str().to_string())
}

/// First email address in document order, or `None`. Pattern matching only,
/// no deliverability checks.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// Scans overview markup for anchors pointing at detail pages under a fixed
/// path prefix.
///
/// This is a best-effort structural scan over raw markup, not an HTML
/// parser: anchors with nested tags or a missing closing tag simply do not
/// match and are skipped.
pub struct LinkExtractor {
    anchor_re: Regex,
}

impl LinkExtractor {
    pub fn new(detail_prefix: &str) -> Result<Self> {
        let pattern = format!(
            r#"(?i)href="({}/[^"]+\.html)"[^>]*>([^<]+)</a>"#,
            regex::escape(detail_prefix)
        );
        Ok(Self {
            anchor_re: Regex::new(&pattern)?,
        })
    }

    /// Links in first-occurrence document order, display name trimmed.
    /// Anchors whose trimmed text is empty are skipped. Duplicate paths are
    /// preserved as separate entries.
    pub fn extract<'a>(&'a self, html: &'a str) -> impl Iterator<Item = StaffLink> + 'a {
        self.anchor_re.captures_iter(html).filter_map(|caps| {
            let name = caps.get(2)?.as_str().trim();
            if name.is_empty() {
                return None;
            }
            Some(StaffLink {
                name: name.to_string(),
                relative_path: caps.get(1)?.as_str().to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "/lehrerinnen-details";

    fn extractor() -> LinkExtractor {
        LinkExtractor::new(PREFIX).unwrap()
    }

    #[test]
    fn test_extract_links_in_document_order() {
        let html = r#"
            <ul>
            <li><a href="/lehrerinnen-details/mueller.html" class="x">Anna Müller</a></li>
            <li><a href="/lehrerinnen-details/bauer.html">Karl Bauer</a></li>
            <li><a href="/lehrerinnen-details/egger.html">Lisa Egger</a></li>
            </ul>
        "#;

        let links: Vec<_> = extractor().extract(html).collect();

        assert_eq!(links.len(), 3);
        assert_eq!(links[0].name, "Anna Müller");
        assert_eq!(links[0].relative_path, "/lehrerinnen-details/mueller.html");
        assert_eq!(links[1].name, "Karl Bauer");
        assert_eq!(links[2].name, "Lisa Egger");
    }

    #[test]
    fn test_extract_links_skips_malformed_anchors() {
        let html = r#"
            <a href="/lehrerinnen-details/ok.html">Fine</a>
            <a href="/lehrerinnen-details/nested.html"><b>Bold Name</b></a>
            <a href="/lehrerinnen-details/unclosed.html">No closing tag
            <a href="/other-section/not-staff.html">Wrong Section</a>
            <a href="/lehrerinnen-details/no-ext">No Extension</a>
        "#;

        let links: Vec<_> = extractor().extract(html).collect();

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].name, "Fine");
    }

    #[test]
    fn test_extract_links_skips_empty_names_and_trims() {
        let html = r#"
            <a href="/lehrerinnen-details/blank.html">   </a>
            <a href="/lehrerinnen-details/padded.html">  Eva Wolf  </a>
        "#;

        let links: Vec<_> = extractor().extract(html).collect();

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].name, "Eva Wolf");
    }

    #[test]
    fn test_extract_links_preserves_duplicates() {
        let html = r#"
            <a href="/lehrerinnen-details/twice.html">First Mention</a>
            <a href="/lehrerinnen-details/twice.html">Second Mention</a>
        "#;

        let links: Vec<_> = extractor().extract(html).collect();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].relative_path, links[1].relative_path);
    }

    #[test]
    fn test_extract_links_is_restartable() {
        let html = r#"<a href="/lehrerinnen-details/a.html">A</a>"#;
        let ex = extractor();

        let first: Vec<_> = ex.extract(html).collect();
        let second: Vec<_> = ex.extract(html).collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_extract_room() {
        let text = "Büro: G 009, erster Stock";
        assert_eq!(extract_room(text), Some("G 009".to_string()));

        let no_space = "Raum A123 im Nebengebäude";
        assert_eq!(extract_room(no_space), Some("A123".to_string()));
    }

    #[test]
    fn test_extract_room_absent() {
        assert_eq!(extract_room("kein Raum angegeben"), None);
        // Not word-bounded matches: two leading letters, four digits.
        assert_eq!(extract_room("AB 123"), None);
        assert_eq!(extract_room("G 1234"), None);
        assert_eq!(extract_room("G 12"), None);
    }

    #[test]
    fn test_extract_office_hour() {
        let text = "Sprechstunde: Dienstag 12:30 - 13:20 Uhr (Sekretariat)";
        assert_eq!(
            extract_office_hour(text),
            Some("Dienstag 12:30 - 13:20 Uhr".to_string())
        );
    }

    #[test]
    fn test_extract_office_hour_compact_range() {
        let text = "Montag 8:00-9:00 Uhr";
        assert_eq!(
            extract_office_hour(text),
            Some("Montag 8:00-9:00 Uhr".to_string())
        );
    }

    #[test]
    fn test_extract_office_hour_absent() {
        assert_eq!(extract_office_hour("Dienstag 12:30"), None);
        assert_eq!(extract_office_hour("12:30 - 13:20"), None);
    }

    #[test]
    fn test_extract_email() {
        let text = r#"Kontakt: <a href="mailto:john.doe@example.com">john.doe@example.com</a>"#;
        assert_eq!(extract_email(text), Some("john.doe@example.com".to_string()));
    }

    #[test]
    fn test_extract_email_absent() {
        assert_eq!(extract_email("keine Adresse hinterlegt"), None);
    }

    #[test]
    fn test_extractors_are_independent() {
        let text = "nur eine E-Mail: max@schule.at";
        assert_eq!(extract_room(text), None);
        assert_eq!(extract_office_hour(text), None);
        assert_eq!(extract_email(text), Some("max@schule.at".to_string()));
    }
}
