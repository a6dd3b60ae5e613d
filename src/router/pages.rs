//! Page generation
//!
//! Queries the content graph for publishable documents and registers one
//! page per document plus one index page per distinct tag.

use anyhow::{bail, Result};
use indexmap::IndexSet;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::graph::{ContentGraph, DocumentQuery};
use crate::helpers::url::tag_path;

/// Template rendering a registered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    /// Single document page
    Document,
    /// Tag index page
    TagIndex,
}

impl Template {
    /// Template file backing this page kind
    pub fn component(&self) -> &'static str {
        match self {
            Template::Document => "templates/document.html",
            Template::TagIndex => "templates/tag-index.html",
        }
    }
}

/// Context handed to the template of a registered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageContext {
    Document { slug: String },
    Tag { tag: String },
}

/// A route/template/context triple registered with the build system
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageDescriptor {
    pub path: String,
    pub template: Template,
    pub context: PageContext,
}

/// Page registration interface of the host build system
pub trait PageSink {
    fn create_page(&mut self, page: PageDescriptor);
}

/// Collects registered pages in registration order
#[derive(Debug, Default)]
pub struct PageCollector {
    pub pages: Vec<PageDescriptor>,
}

impl PageSink for PageCollector {
    fn create_page(&mut self, page: PageDescriptor) {
        self.pages.push(page);
    }
}

/// Query the graph and register document and tag pages
///
/// Query errors are logged and the partial result set is processed, unless
/// `fail_on_query_error` asks for the build to abort instead.
pub async fn create_pages(
    graph: &ContentGraph,
    config: &SiteConfig,
    sink: &mut dyn PageSink,
) -> Result<()> {
    let result = graph
        .query_documents(DocumentQuery {
            limit: config.query_limit,
        })
        .await;

    if !result.errors.is_empty() {
        for error in &result.errors {
            tracing::error!("Document query: {}", error);
        }
        if config.fail_on_query_error {
            bail!(
                "document query failed with {} error(s)",
                result.errors.len()
            );
        }
    }

    // Document pages
    for row in &result.rows {
        let Some(path) = row.path.clone().or_else(|| row.slug.clone()) else {
            continue;
        };
        sink.create_page(PageDescriptor {
            path: path.clone(),
            template: Template::Document,
            context: PageContext::Document { slug: path },
        });
    }

    // Tag pages
    let mut tags: IndexSet<String> = IndexSet::new();
    for row in &result.rows {
        tags.extend(row.tags.iter().cloned());
    }
    for tag in tags {
        sink.create_page(PageDescriptor {
            path: tag_path(&tag),
            template: Template::TagIndex,
            context: PageContext::Tag { tag },
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;
    use crate::graph::FieldValue;
    use crate::router::fields;

    fn post(tags: &[&str], draft: bool) -> FrontMatter {
        FrontMatter {
            draft,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn add_post(graph: &mut ContentGraph, path: &str, tags: &[&str], draft: bool) {
        let file = graph.create_file_node(path);
        graph.create_document_node(path, file, post(tags, draft));
    }

    #[tokio::test]
    async fn test_one_document_page_per_publishable_document() {
        let mut graph = ContentGraph::new();
        add_post(
            &mut graph,
            "/site/src/pages/2017-07-14---first/index.en.md",
            &["A", "B"],
            false,
        );
        add_post(
            &mut graph,
            "/site/src/pages/2017-07-15---second/index.en.md",
            &["B"],
            true,
        );
        fields::derive_all(&mut graph).unwrap();

        let mut collector = PageCollector::default();
        create_pages(&graph, &SiteConfig::default(), &mut collector)
            .await
            .unwrap();

        let paths: Vec<&str> = collector.pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/en/2017-07-14---first/index/", "/tags/a/", "/tags/b/"]
        );
        assert_eq!(collector.pages[0].template, Template::Document);
        assert_eq!(collector.pages[1].template, Template::TagIndex);
        assert_eq!(
            collector.pages[1].context,
            PageContext::Tag {
                tag: "A".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_shared_tags_registered_once() {
        let mut graph = ContentGraph::new();
        add_post(
            &mut graph,
            "/site/src/pages/2017-07-14---first/index.en.md",
            &["go"],
            false,
        );
        add_post(
            &mut graph,
            "/site/src/pages/2017-07-15---second/index.en.md",
            &["go"],
            false,
        );
        fields::derive_all(&mut graph).unwrap();

        let mut collector = PageCollector::default();
        create_pages(&graph, &SiteConfig::default(), &mut collector)
            .await
            .unwrap();

        let tag_pages: Vec<_> = collector
            .pages
            .iter()
            .filter(|p| p.template == Template::TagIndex)
            .collect();
        assert_eq!(tag_pages.len(), 1);
        assert_eq!(tag_pages[0].path, "/tags/go/");
    }

    #[tokio::test]
    async fn test_document_context_carries_route() {
        let mut graph = ContentGraph::new();
        add_post(
            &mut graph,
            "/site/src/pages/2017-07-14---hello/index.en.md",
            &[],
            false,
        );
        fields::derive_all(&mut graph).unwrap();

        let mut collector = PageCollector::default();
        create_pages(&graph, &SiteConfig::default(), &mut collector)
            .await
            .unwrap();

        assert_eq!(
            collector.pages[0].context,
            PageContext::Document {
                slug: "/en/2017-07-14---hello/index/".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_missing_path_falls_back_to_slug() {
        let mut graph = ContentGraph::new();
        let file = graph.create_file_node("/site/src/pages/2017-07-14---hello/index.en.md");
        let doc = graph.create_document_node(
            "/site/src/pages/2017-07-14---hello/index.en.md",
            file,
            post(&[], false),
        );
        graph
            .create_node_field(doc, FieldValue::Slug("/hello/".to_string()))
            .unwrap();

        let mut collector = PageCollector::default();
        create_pages(&graph, &SiteConfig::default(), &mut collector)
            .await
            .unwrap();

        assert_eq!(collector.pages.len(), 1);
        assert_eq!(collector.pages[0].path, "/hello/");
    }

    #[tokio::test]
    async fn test_query_errors_do_not_abort_by_default() {
        let mut graph = ContentGraph::new();
        // No derived fields at all: the query reports an error for it
        add_post(
            &mut graph,
            "/site/src/pages/2017-07-14---broken/index.en.md",
            &["go"],
            false,
        );

        let mut collector = PageCollector::default();
        let result = create_pages(&graph, &SiteConfig::default(), &mut collector).await;

        assert!(result.is_ok());
        assert!(collector.pages.is_empty());
    }

    #[tokio::test]
    async fn test_query_errors_abort_when_configured() {
        let mut graph = ContentGraph::new();
        add_post(
            &mut graph,
            "/site/src/pages/2017-07-14---broken/index.en.md",
            &["go"],
            false,
        );

        let config = SiteConfig {
            fail_on_query_error: true,
            ..Default::default()
        };
        let mut collector = PageCollector::default();
        let result = create_pages(&graph, &config, &mut collector).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_query_limit_caps_document_pages() {
        let mut graph = ContentGraph::new();
        add_post(
            &mut graph,
            "/site/src/pages/2017-07-14---first/index.en.md",
            &[],
            false,
        );
        add_post(
            &mut graph,
            "/site/src/pages/2017-07-15---second/index.en.md",
            &[],
            false,
        );
        fields::derive_all(&mut graph).unwrap();

        let config = SiteConfig {
            query_limit: 1,
            ..Default::default()
        };
        let mut collector = PageCollector::default();
        create_pages(&graph, &config, &mut collector).await.unwrap();

        assert_eq!(collector.pages.len(), 1);
        assert_eq!(collector.pages[0].path, "/en/2017-07-14---first/index/");
    }
}
