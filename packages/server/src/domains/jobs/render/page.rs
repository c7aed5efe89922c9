use std::fmt::Write;

use super::card::render_cards;
use super::styles::{CARD_STYLE, LAYOUT_STYLE};
use crate::common::utils::escape_html;
use crate::config::{DashboardConfig, DeveloperContact};
use crate::domains::jobs::filter::JobFilter;
use crate::domains::jobs::models::JobListing;

const PAGE_ICON: &str = "💼";

/// Inputs for one render of the dashboard
pub struct PageModel<'a> {
    pub config: &'a DashboardConfig,
    pub filter: &'a JobFilter,
    pub listings: &'a [JobListing],
}

pub fn render_page(model: &PageModel<'_>) -> String {
    let config = model.config;

    let body = if model.listings.is_empty() {
        "<p class=\"empty\">No jobs match the current filters.</p>\n".to_string()
    } else {
        format!(
            "<p class=\"count\">{} jobs</p>\n{}",
            model.listings.len(),
            render_cards(
                model.listings,
                config.cards_per_row,
                config.description_preview_chars
            )
        )
    };

    let main = format!(
        "<h1>{heading}</h1>\n{body}",
        heading = escape_html(&config.heading),
        body = body
    );

    render_shell(config, &render_sidebar(model.filter, config), &main)
}

/// Full page shown when the job store cannot be read
pub fn render_error_page(config: &DashboardConfig, message: &str) -> String {
    let main = format!(
        "<h1>{heading}</h1>\n<p class=\"empty\">{message}</p>\n",
        heading = escape_html(&config.heading),
        message = escape_html(message)
    );
    render_shell(config, &render_sidebar(&JobFilter::default(), config), &main)
}

fn render_shell(config: &DashboardConfig, sidebar: &str, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{icon} {title}</title>
<style>{layout}{cards}</style>
</head>
<body>
<div class="layout">
<aside class="sidebar">
{sidebar}</aside>
<main class="main">
{main}</main>
</div>
</body>
</html>
"#,
        icon = PAGE_ICON,
        title = escape_html(&config.page_title),
        layout = LAYOUT_STYLE,
        cards = CARD_STYLE,
        sidebar = sidebar,
        main = main,
    )
}

fn render_sidebar(filter: &JobFilter, config: &DashboardConfig) -> String {
    let mut html = format!(
        r#"<h2>Filter Jobs</h2>
<form method="get" action="/">
<label for="title">Enter Job Title</label>
<input type="text" id="title" name="title" value="{title}">
<label for="location">Enter Location</label>
<input type="text" id="location" name="location" value="{location}">
<label><input type="checkbox" name="recruiter_email"{checked}> Show jobs with recruiter email address</label>
<button type="submit">Apply</button>
</form>
"#,
        title = escape_html(filter.title.as_deref().unwrap_or("").trim()),
        location = escape_html(filter.location.as_deref().unwrap_or("").trim()),
        checked = if filter.require_recruiter_email {
            " checked"
        } else {
            ""
        },
    );

    if let Some(contact) = &config.developer_contact {
        html.push_str(&render_contact_card(contact));
    }

    html
}

fn render_contact_card(contact: &DeveloperContact) -> String {
    let mut html = String::from(
        r#"<div style="border: 2px solid #6A0DAD; border-radius: 10px; padding: 10px; margin-top: 20px;">
<h3 style="color: white; background-color: #6A0DAD; padding: 5px; border-top-left-radius: 10px; border-top-right-radius: 10px; text-align: center;">Contact</h3>
<div style="padding: 10px;">
"#,
    );

    let _ = writeln!(
        html,
        r#"<p style="color: black;"><b>Developer Name:</b> {}</p>"#,
        escape_html(&contact.name)
    );

    if let Some(email) = &contact.email {
        let email = escape_html(email);
        let _ = writeln!(
            html,
            r#"<p style="color: black;"><b>✉️ E-Mail:</b> <a href="mailto:{email}">{email}</a></p>"#,
            email = email
        );
    }

    if !contact.links.is_empty() {
        html.push_str(
            r#"<div style="border: 2px solid #8E44AD; border-radius: 10px; padding: 10px; margin-top: 10px;">
<h4 style="color: #6A0DAD;">Connect with me:</h4>
"#,
        );
        for (label, url) in &contact.links {
            let _ = writeln!(
                html,
                r#"<p><a href="{url}" target="_blank" rel="noopener noreferrer" style="color: #6A0DAD; text-decoration: none;">{label}</a></p>"#,
                url = escape_html(url),
                label = escape_html(label)
            );
        }
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::jobs::models::JobPosting;

    fn listing(title: &str) -> JobListing {
        JobListing::from_posting(JobPosting {
            title: title.to_string(),
            company: "Wayne Enterprises".to_string(),
            location: "Gotham".to_string(),
            description: "Night shift".to_string(),
            link: "https://wayne.example/jobs/7".to_string(),
            posted_ago: "2 days ago".to_string(),
        })
    }

    #[test]
    fn renders_title_heading_and_cards() {
        let config = DashboardConfig::default();
        let filter = JobFilter::default();
        let listings = vec![listing("Security Lead"), listing("Engineer")];

        let html = render_page(&PageModel {
            config: &config,
            filter: &filter,
            listings: &listings,
        });

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>💼 Jobs in EU</title>"));
        assert!(html.contains("<h1>Handpicked Jobs in Europe</h1>"));
        assert!(html.contains("<h3>Security Lead</h3>"));
        assert!(html.contains("2 jobs"));
        assert!(html.contains(".card .header {"));
    }

    #[test]
    fn renders_empty_state() {
        let config = DashboardConfig::default();
        let filter = JobFilter::default();
        let html = render_page(&PageModel {
            config: &config,
            filter: &filter,
            listings: &[],
        });

        assert!(html.contains("No jobs match the current filters."));
        assert!(!html.contains("<div class=\"card\">"));
    }

    #[test]
    fn sidebar_echoes_filter_values() {
        let config = DashboardConfig::default();
        let filter = JobFilter::new("  \"rust\" ", "Berlin", true);
        let html = render_page(&PageModel {
            config: &config,
            filter: &filter,
            listings: &[],
        });

        assert!(html.contains(r#"name="title" value="&quot;rust&quot;""#));
        assert!(html.contains(r#"name="location" value="Berlin""#));
        assert!(html.contains(r#"name="recruiter_email" checked"#));
    }

    #[test]
    fn contact_card_only_when_configured() {
        let filter = JobFilter::default();
        let mut config = DashboardConfig::default();

        let without = render_page(&PageModel {
            config: &config,
            filter: &filter,
            listings: &[],
        });
        assert!(!without.contains("Developer Name"));

        config.developer_contact = Some(DeveloperContact {
            name: "Board Maintainer".to_string(),
            email: Some("maintainer@jobs.example".to_string()),
            links: vec![("Medium".to_string(), "https://medium.com/@board".to_string())],
        });
        let with = render_page(&PageModel {
            config: &config,
            filter: &filter,
            listings: &[],
        });
        assert!(with.contains("<b>Developer Name:</b> Board Maintainer"));
        assert!(with.contains("mailto:maintainer@jobs.example"));
        assert!(with.contains(r#"href="https://medium.com/@board""#));
        assert!(with.contains("Connect with me:"));
    }

    #[test]
    fn error_page_escapes_message() {
        let html = render_error_page(&DashboardConfig::default(), "store <down>");
        assert!(html.contains("store &lt;down&gt;"));
    }
}
