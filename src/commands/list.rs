//! List site content

use anyhow::Result;
use indexmap::IndexMap;

use crate::content::loader::ContentLoader;
use crate::graph::{ContentGraph, NodeKind};
use crate::helpers::url::{full_url_for, tag_path};
use crate::router::pages::{self, PageCollector};
use crate::router::{fields, schema};
use crate::Pagegen;

/// List site content by type
pub async fn run(app: &Pagegen, content_type: &str) -> Result<()> {
    let mut graph = ContentGraph::new();
    ContentLoader::new(app).load_into(&mut graph)?;
    fields::derive_all(&mut graph)?;

    match content_type {
        "route" | "routes" => {
            let mut collector = PageCollector::default();
            pages::create_pages(&graph, &app.config, &mut collector).await?;
            println!("Routes ({}):", collector.pages.len());
            for page in &collector.pages {
                println!("  {} -> {}", page.path, page.template.component());
            }
        }
        "tag" | "tags" => {
            let mut tags: IndexMap<String, usize> = IndexMap::new();
            for node in graph.nodes() {
                let Some(fm) = node.front_matter() else {
                    continue;
                };
                if fm.draft {
                    continue;
                }
                for tag in &fm.tags {
                    *tags.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in tags {
                println!(
                    "  {} ({}) -> {}",
                    tag,
                    count,
                    full_url_for(&app.config, &tag_path(&tag))
                );
            }
        }
        "document" | "documents" => {
            let extensions = schema::extend_node_type(NodeKind::Document).await;
            let mut documents: Vec<_> = graph
                .nodes()
                .filter(|n| n.kind() == NodeKind::Document)
                .collect();
            // Newest first
            documents.sort_by(|a, b| {
                let da = a.front_matter().and_then(|fm| fm.parse_date());
                let db = b.front_matter().and_then(|fm| fm.parse_date());
                db.cmp(&da)
            });

            println!("Documents ({}):", documents.len());
            for node in documents {
                let title = node
                    .front_matter()
                    .and_then(|fm| fm.title.clone())
                    .unwrap_or_else(|| "Untitled".to_string());
                let date = node
                    .front_matter()
                    .and_then(|fm| fm.parse_date())
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string());
                let lang = extensions
                    .iter()
                    .filter_map(|ext| ext.resolve(node).map(|v| format!("{}={}", ext.name, v)))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("  {} - {} [{}]", date, title, lang);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: route, tag, document",
                content_type
            );
        }
    }

    Ok(())
}
