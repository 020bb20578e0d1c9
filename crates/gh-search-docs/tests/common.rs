#![allow(dead_code)]

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use docs_fmt::{StyleConfig, TermRenderer, Theme};
use gh_search_docs::error::SearchError;
use gh_search_docs::render::Stylist;
use gh_search_docs::transport::SearchTransport;
use gh_search_docs::versions::{SupportedVersions, VersionSource};
use gh_search_docs::{Context, run_cli_with};
use url::Url;

/// What the fake search API answers.
#[derive(Debug, Clone)]
pub enum Reply {
    Body(String),
    Status(u16),
}

impl Reply {
    pub fn json(value: serde_json::Value) -> Self {
        Self::Body(value.to_string())
    }
}

/// Answers every request with the same reply and records the URLs asked for.
pub struct FakeTransport {
    reply: Reply,
    requests: Rc<RefCell<Vec<String>>>,
}

impl SearchTransport for FakeTransport {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, SearchError> {
        self.requests.borrow_mut().push(url.to_string());
        match &self.reply {
            Reply::Body(body) => Ok(body.as_bytes().to_vec()),
            Reply::Status(code) => Err(SearchError::Status(*code)),
        }
    }
}

/// A catalog that is either present or fails to load.
pub struct FakeVersions(pub Option<SupportedVersions>);

impl VersionSource for FakeVersions {
    fn load(&self) -> anyhow::Result<SupportedVersions> {
        self.0
            .clone()
            .ok_or_else(|| anyhow::anyhow!("supported-versions.json not found"))
    }
}

pub struct FailingStylist;

impl Stylist for FailingStylist {
    fn style(&self, _markdown: &str) -> Result<String, fmt::Error> {
        Err(fmt::Error)
    }
}

pub fn catalog() -> SupportedVersions {
    SupportedVersions {
        last_updated: "2025-07-01".to_string(),
        supported_versions: vec![
            "3.14".to_string(),
            "3.15".to_string(),
            "3.16".to_string(),
            "3.17".to_string(),
        ],
        latest_version: "3.17".to_string(),
    }
}

/// Everything one run produced.
pub struct Run {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub requests: Vec<String>,
}

pub struct Harness {
    reply: Reply,
    versions: Option<SupportedVersions>,
    stylist: Box<dyn Stylist>,
}

impl Harness {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            versions: Some(catalog()),
            stylist: Box::new(TermRenderer::new(StyleConfig::no_wrap(Theme::Dark))),
        }
    }

    pub fn without_catalog(mut self) -> Self {
        self.versions = None;
        self
    }

    pub fn with_stylist(mut self, stylist: impl Stylist + 'static) -> Self {
        self.stylist = Box::new(stylist);
        self
    }

    pub fn run(self, args: &[&str]) -> Run {
        // Disable colors for consistent test output
        colored::control::set_override(false);

        let requests = Rc::new(RefCell::new(Vec::new()));
        let ctx = Context {
            transport: Box::new(FakeTransport {
                reply: self.reply,
                requests: Rc::clone(&requests),
            }),
            versions: Box::new(FakeVersions(self.versions)),
            stylist: self.stylist,
        };

        let output = run_cli_with(args, &ctx);
        let requests = requests.borrow().clone();
        let success = output.success();
        Run {
            stdout: output.stdout,
            stderr: output.stderr,
            success,
            requests,
        }
    }
}

pub fn run_cli(args: &[&str], reply: Reply) -> (String, String, bool) {
    let run = Harness::new(reply).run(args);
    (run.stdout, run.stderr, run.success)
}

/// A response with `found` total matches, `page` and `size` as given, and
/// hits numbered from 1.
pub fn response(found: u64, page: u64, size: u64, hits: &[serde_json::Value]) -> Reply {
    Reply::json(serde_json::json!({
        "meta": {
            "found": {"value": found, "relation": "eq"},
            "took": {"query_msec": 12, "total_msec": 30},
            "page": page,
            "size": size
        },
        "hits": hits
    }))
}

pub fn hit(n: usize) -> serde_json::Value {
    serde_json::json!({
        "id": format!("hit-{n}"),
        "url": format!("/en/articles/article-{n}"),
        "title": format!("Article {n}"),
        "breadcrumbs": "Articles",
        "intro": format!("Intro of article {n}.")
    })
}

pub fn hits(count: usize) -> Vec<serde_json::Value> {
    (1..=count).map(hit).collect()
}
