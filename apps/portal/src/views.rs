//! HTML pages rendered through a handlebars registry built once at startup.
//!
//! Handlebars HTML-escapes every `{{value}}`; identifiers placed in hrefs are
//! percent-encoded before they reach the template.

use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::employee::{PersonIdentity, RecordResult};
use crate::records::RecordCategory;

const LOOKUP_FORM: &str = "lookup_form";
const MENU_PAGE: &str = "menu_page";
const RECORD_PAGE: &str = "record_page";

const LOOKUP_FORM_TEMPLATE: &str = "<h2>Employee Self Service</h2>
<form method='POST'>
    <label for='mobile'>Enter Mobile Number:</label><br>
    <input type='text' id='mobile' name='mobile' required><br><br>
    <input type='submit' value='Validate'>
</form>{{#if error}}
<p style='color:red;'>{{error}}</p>{{/if}}";

const MENU_PAGE_TEMPLATE: &str = "<h2>Welcome {{person_id}}</h2>
<ul>{{#each links}}
    <li><a href='/{{slug}}/{{segment}}'>View {{label}}</a></li>{{/each}}
</ul>";

const RECORD_PAGE_TEMPLATE: &str = "<h2>{{title}}</h2>
<pre>{{info}}</pre>
<a href='/'>Back to Home</a>";

#[derive(Serialize)]
struct LookupFormView<'a> {
    error: Option<&'a str>,
}

#[derive(Serialize)]
struct MenuLink {
    slug: &'static str,
    segment: String,
    label: String,
}

#[derive(Serialize)]
struct MenuView<'a> {
    person_id: &'a str,
    links: Vec<MenuLink>,
}

#[derive(Serialize)]
struct RecordView {
    title: &'static str,
    info: String,
}

/// The page templates. Shared read-only through `AppState`.
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self, AppError> {
        let mut registry = Handlebars::new();

        for (name, template) in [
            (LOOKUP_FORM, LOOKUP_FORM_TEMPLATE),
            (MENU_PAGE, MENU_PAGE_TEMPLATE),
            (RECORD_PAGE, RECORD_PAGE_TEMPLATE),
        ] {
            registry
                .register_template_string(name, template)
                .map_err(|e| AppError::Render(format!("template '{name}': {e}")))?;
        }

        Ok(Self { registry })
    }

    /// Phone-entry form, optionally with an error line under it.
    pub fn lookup_form(&self, error: Option<&str>) -> Result<Html<String>, AppError> {
        self.render(LOOKUP_FORM, &LookupFormView { error })
    }

    pub fn menu_page(&self, identity: &PersonIdentity) -> Result<Html<String>, AppError> {
        let id = &identity.person_id_external;
        let segment = urlencoding::encode(id).into_owned();

        let links = RecordCategory::ALL
            .iter()
            .map(|category| MenuLink {
                slug: category.slug(),
                segment: segment.clone(),
                label: category.title().to_lowercase(),
            })
            .collect();

        self.render(
            MENU_PAGE,
            &MenuView {
                person_id: id,
                links,
            },
        )
    }

    pub fn record_page(&self, result: &RecordResult) -> Result<Html<String>, AppError> {
        let info = match result {
            RecordResult::Fetched { payload, .. } => {
                serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
            }
            RecordResult::Failed { .. } => result.failure_message().unwrap_or_default(),
        };

        self.render(
            RECORD_PAGE,
            &RecordView {
                title: result.title(),
                info,
            },
        )
    }

    fn render<T: Serialize>(&self, name: &str, view: &T) -> Result<Html<String>, AppError> {
        self.registry
            .render(name, view)
            .map(Html)
            .map_err(|e| AppError::Render(e.to_string()))
    }
}
