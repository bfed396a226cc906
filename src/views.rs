//! Page view models

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::{error::Error, info::InfoPage};

const NOT_SET: &str = "(not set)";

/// Render a template to an HTML response, surfacing failures as [`Error`].
pub fn render<T: Template>(template: &T) -> Result<Response, Error> {
    let html = template.render()?;
    Ok(Html(html).into_response())
}

#[derive(Debug, Clone)]
pub struct Row {
    pub label: &'static str,
    pub value: String,
}

impl Row {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }

    fn optional(label: &'static str, value: &Option<String>) -> Self {
        Self::new(label, value.as_deref().unwrap_or(NOT_SET))
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexView {
    pub title: &'static str,
    pub environment: String,
    pub short_build_hash: String,
    pub build: Vec<Row>,
    pub runtime: Vec<Row>,
    pub environment_variables: Vec<String>,
}

impl From<InfoPage> for IndexView {
    fn from(page: InfoPage) -> Self {
        let InfoPage {
            build,
            runtime,
            environment_variables,
        } = page;

        Self {
            title: "Home Page",
            environment: build
                .environment
                .clone()
                .unwrap_or_else(|| NOT_SET.to_owned()),
            short_build_hash: build.short_build_hash.clone(),
            build: vec![
                Row::optional("Application version", &build.application_version),
                Row::optional("Build number", &build.build_number),
                Row::new("Build hash", build.build_hash),
                Row::optional("Build date", &build.build_date),
                Row::optional("Build URL", &build.build_url),
                Row::optional("Release number", &build.release_number),
                Row::optional("Deploy number", &build.deploy_number),
                Row::optional("Deployment id", &build.deployment_id),
                Row::optional("Deploy date", &build.deploy_date),
                Row::optional("Deploy URL", &build.deploy_url),
            ],
            runtime: vec![
                Row::new("Host", runtime.hostname),
                Row::new(
                    "Runtime",
                    format!("{} ({})", runtime.runtime_name, runtime.runtime_version),
                ),
                Row::new(
                    "Framework",
                    format!("{} {}", runtime.framework_name, runtime.framework_version),
                ),
                Row::new("Target", runtime.target),
            ],
            environment_variables,
        }
    }
}

/// About and Contact pages share one template.
#[derive(Template)]
#[template(path = "message.html")]
pub struct MessageView {
    pub title: &'static str,
    pub message: &'static str,
}

impl MessageView {
    pub fn about() -> Self {
        Self {
            title: "About",
            message: "Your application description page.",
        }
    }

    pub fn contact() -> Self {
        Self {
            title: "Contact",
            message: "Your contact page.",
        }
    }
}
