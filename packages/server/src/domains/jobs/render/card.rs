use super::styles::VERY_OLD_TICKER_STYLE;
use crate::common::highlight_emails;
use crate::common::utils::escape_html;
use crate::domains::jobs::models::JobListing;

/// Header colors, cycled by card position
pub const PALETTE: [&str; 9] = [
    "#1abc9c", "#2ecc71", "#3498db", "#9b59b6", "#34495e", "#f1c40f", "#e67e22", "#e74c3c",
    "#95a5a6",
];

const NO_CONTACT: &str = "No direct contact available";
const VERY_OLD: &str = "Very Old";

/// Everything one card needs, already escaped for HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub header_color: &'static str,
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted_ago: String,
    pub description_preview: String,
    pub contact_html: String,
    pub ticker_text: String,
    pub ticker_style: &'static str,
    pub link: String,
}

impl CardView {
    pub fn from_listing(index: usize, listing: &JobListing, preview_chars: usize) -> Self {
        let posting = &listing.posting;

        let preview: String = posting.description.chars().take(preview_chars).collect();

        let contact = if listing.has_contact() {
            listing.contact.as_str()
        } else {
            NO_CONTACT
        };

        let (ticker_text, ticker_style) = if listing.is_very_old() {
            (VERY_OLD.to_string(), VERY_OLD_TICKER_STYLE)
        } else {
            (escape_html(&posting.posted_ago), "")
        };

        Self {
            header_color: PALETTE[index % PALETTE.len()],
            title: escape_html(&posting.title),
            company: escape_html(&posting.company),
            location: escape_html(&posting.location),
            posted_ago: escape_html(&posting.posted_ago),
            description_preview: format!("{}...", escape_html(&preview)),
            contact_html: highlight_emails(contact),
            ticker_text,
            ticker_style,
            link: escape_html(&posting.link),
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"<div class="card">
    <div class="header" style="background-color: {header_color};">
        <h3>{title}</h3>
    </div>
    <p><b>Company:</b> {company}</p>
    <p><b>Location:</b> {location}</p>
    <p><b>Date Posted:</b> {posted_ago}</p>
    <p><b>Job Description:</b> {description}</p>
    <p><b>Contact:</b> {contact}</p>
    <div style="{ticker_style}">{ticker_text}</div>
    <a href="{link}" target="_blank" rel="noopener noreferrer"><div class="footer"><b>Click here to view the job</b></div></a>
</div>"#,
            header_color = self.header_color,
            title = self.title,
            company = self.company,
            location = self.location,
            posted_ago = self.posted_ago,
            description = self.description_preview,
            contact = self.contact_html,
            ticker_style = self.ticker_style,
            ticker_text = self.ticker_text,
            link = self.link,
        )
    }
}

/// Lay listings out as rows of `cards_per_row` columns; the last row may be partial.
pub fn render_cards(listings: &[JobListing], cards_per_row: usize, preview_chars: usize) -> String {
    let cards_per_row = cards_per_row.max(1);
    let mut html = String::new();

    for (row_index, row) in listings.chunks(cards_per_row).enumerate() {
        html.push_str("<div class=\"row\">\n");
        for slot in 0..cards_per_row {
            html.push_str("<div class=\"column\">");
            if let Some(listing) = row.get(slot) {
                let index = row_index * cards_per_row + slot;
                let card = CardView::from_listing(index, listing, preview_chars);
                html.push_str(&card.render());
            }
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n");
    }

    html
}
