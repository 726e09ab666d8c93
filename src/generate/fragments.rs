//! HTML fragments spliced into the hand-written pages.

use crate::content::{Contact, Project, WorkItem};
use crate::render::{status_color, status_label, tech_color};
use crate::utils::html::{escape, escape_attr};
use std::fmt::Write as _;

/// Technology tags with cycling colors.
pub fn tech_tags(technologies: &[String]) -> String {
    technologies
        .iter()
        .enumerate()
        .map(|(i, tag)| {
            let color = tech_color(i);
            format!(
                r#"<span class="px-2 py-1 bg-{color}-100 text-{color}-700 text-xs rounded">{}</span>"#,
                escape(tag)
            )
        })
        .collect::<Vec<_>>()
        .join("\n                                ")
}

/// One job entry for `work.html`. `today` fills a missing date.
pub fn work_item(item: &WorkItem, today: &str) -> String {
    format!(
        r#"
                        <div class="border-l-2 border-gray-200 pl-6 pb-6">
                            <div class="flex items-center gap-3 mb-3">
                                <div class="w-2 h-2 bg-green-500 rounded-full -ml-7 border-2 border-white"></div>
                                <span class="font-mono text-sm text-gray-500">{hash}</span>
                                <span class="text-sm text-gray-500">•</span>
                                <span class="text-sm text-gray-500">{date}</span>
                                <span class="text-sm text-gray-500">•</span>
                                <span class="text-sm text-gray-500">{location}</span>
                            </div>
                            <h3 class="font-medium text-gray-900 mb-2">
                                feat: {position} at {company}
                            </h3>
                            <p class="text-gray-700 text-sm mb-4">
                                {description}
                            </p>
                            <div class="flex flex-wrap gap-2">
                                {tags}
                            </div>
                        </div>"#,
        hash = escape(item.commit_hash.as_deref().unwrap_or("abc123")),
        date = escape(item.date.as_deref().unwrap_or(today)),
        location = escape(&item.location),
        position = item.position,
        company = item.company,
        description = item.description,
        tags = tech_tags(&item.technologies),
    )
}

/// One project card for `projects.html`.
pub fn project(project: &Project) -> String {
    let status = project.status();
    let color = status_color(status);

    let mut links = String::new();
    if !project.github_url.is_empty() {
        let _ = write!(
            links,
            r#"<a href="{}" target="_blank" class="text-blue-600 hover:text-blue-800 text-sm">View Code →</a>"#,
            escape_attr(&project.github_url)
        );
    }
    if !project.live_url.is_empty() {
        if !links.is_empty() {
            links.push_str("\n                                ");
        }
        let _ = write!(
            links,
            r#"<a href="{}" target="_blank" class="text-green-600 hover:text-green-800 text-sm">Live Demo →</a>"#,
            escape_attr(&project.live_url)
        );
    }

    format!(
        r#"
                        <div class="border border-gray-200 rounded-lg p-6">
                            <div class="flex items-center justify-between mb-4">
                                <h3 class="text-lg font-medium text-gray-900">{name}</h3>
                                <span class="px-2 py-1 bg-{color}-100 text-{color}-700 text-xs rounded">
                                    {label}
                                </span>
                            </div>
                            <p class="text-gray-700 text-sm mb-4">{description}</p>
                            <div class="flex flex-wrap gap-2 mb-4">
                                {tags}
                            </div>
                            <div class="flex space-x-4">
                                {links}
                            </div>
                        </div>"#,
        name = project.name,
        label = escape(&status_label(status)),
        description = project.description,
        tags = tech_tags(&project.technologies),
    )
}

/// Link markup for each contact slot, keyed by slot name.
///
/// An empty handle yields an empty slot body.
pub fn contact_links(contact: &Contact) -> Vec<(&'static str, String)> {
    let link = |href: String, text: &str| {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
            escape_attr(&href),
            escape(text)
        )
    };
    let when = |value: &str, render: &dyn Fn(&str) -> String| {
        if value.is_empty() {
            String::new()
        } else {
            render(value)
        }
    };

    vec![
        (
            "contact-email",
            when(&contact.email, &|v| {
                format!(r#"<a href="mailto:{}">{}</a>"#, escape_attr(v), escape(v))
            }),
        ),
        ("contact-linkedin", when(&contact.linkedin, &|v| link(v.to_string(), "LinkedIn"))),
        ("contact-github", when(&contact.github, &|v| link(v.to_string(), "GitHub"))),
        (
            "contact-instagram",
            when(&contact.instagram, &|v| {
                link(format!("https://instagram.com/{v}"), &format!("@{v}"))
            }),
        ),
        (
            "contact-youtube",
            when(&contact.youtube, &|v| link(format!("https://youtube.com/@{v}"), "YouTube")),
        ),
        (
            "contact-scholar",
            when(&contact.scholar, &|v| {
                link(
                    format!("https://scholar.google.com/citations?user={v}"),
                    "Google Scholar",
                )
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_tags_cycle_colors() {
        let techs: Vec<String> = ["a", "b", "c", "d", "e", "f", "g"].map(String::from).to_vec();
        let html = tech_tags(&techs);
        assert!(html.starts_with(r#"<span class="px-2 py-1 bg-blue-100 text-blue-700"#));
        assert!(html.contains("bg-indigo-100 text-indigo-700 text-xs rounded\">f<"));
        assert!(html.ends_with("bg-blue-100 text-blue-700 text-xs rounded\">g</span>"));
        assert_eq!(tech_tags(&[]), "");
    }

    #[test]
    fn test_work_item_defaults() {
        let item = WorkItem {
            position: "Engineer".into(),
            company: "Acme".into(),
            ..WorkItem::default()
        };
        let html = work_item(&item, "Mar 03, 2025");
        assert!(html.contains("abc123"));
        assert!(html.contains("Mar 03, 2025"));
        assert!(html.contains("feat: Engineer at Acme"));
    }

    #[test]
    fn test_project_status_and_links() {
        let p = Project {
            name: "folio".into(),
            status: Some("in-progress".into()),
            github_url: "https://github.com/me/folio".into(),
            ..Project::default()
        };
        let html = project(&p);
        assert!(html.contains("bg-blue-100 text-blue-700"));
        assert!(html.contains("In Progress"));
        assert!(html.contains("View Code →"));
        assert!(!html.contains("Live Demo"));
    }

    #[test]
    fn test_project_without_links() {
        let html = project(&Project::default());
        assert!(html.contains("Completed"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_contact_links() {
        let contact = Contact {
            email: "me@example.com".into(),
            instagram: "pixels".into(),
            ..Contact::default()
        };
        let links = contact_links(&contact);
        assert_eq!(links.len(), 6);

        let get = |slot: &str| links.iter().find(|(s, _)| *s == slot).unwrap().1.clone();
        assert_eq!(get("contact-email"), r#"<a href="mailto:me@example.com">me@example.com</a>"#);
        assert!(get("contact-instagram").contains("https://instagram.com/pixels"));
        assert!(get("contact-instagram").contains("@pixels"));
        assert_eq!(get("contact-github"), "");
    }
}
