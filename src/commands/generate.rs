//! Generate the route manifest

use anyhow::Result;
use serde::Serialize;
use std::fs;

use crate::bundler::{self, BuildStage, StageConfig};
use crate::content::loader::ContentLoader;
use crate::graph::ContentGraph;
use crate::router::fields;
use crate::router::pages::{self, PageCollector, PageDescriptor};
use crate::Pagegen;

/// Route manifest written to the public directory
#[derive(Debug, Serialize)]
struct RouteManifest<'a> {
    site: SiteSummary<'a>,
    build: StageConfig,
    pages: &'a [PageDescriptor],
}

#[derive(Debug, Serialize)]
struct SiteSummary<'a> {
    title: &'a str,
    url: &'a str,
}

/// Run the full pipeline and write routes.json
pub async fn run(app: &Pagegen) -> Result<()> {
    let start = std::time::Instant::now();

    let mut graph = ContentGraph::new();
    let loader = ContentLoader::new(app);
    let count = loader.load_into(&mut graph)?;
    tracing::info!("Ingested {} documents", count);

    fields::derive_all(&mut graph)?;

    let mut collector = PageCollector::default();
    pages::create_pages(&graph, &app.config, &mut collector).await?;

    let build = bundler::configure_stage(BuildStage::BuildJavascript);
    tracing::debug!("Production bundler plugins: {:?}", build.plugins);

    let manifest = RouteManifest {
        site: SiteSummary {
            title: &app.config.title,
            url: &app.config.url,
        },
        build,
        pages: &collector.pages,
    };

    fs::create_dir_all(&app.public_dir)?;
    let manifest_path = app.public_dir.join("routes.json");
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;

    tracing::info!(
        "Registered {} pages in {:.2}s",
        collector.pages.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
