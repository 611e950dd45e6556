//! Fixture generation pipeline: allocate names, build the tree, write it out.

use crate::config::FixtureConfig;
use crate::error::Result;
use crate::header::HeaderSynthesizer;
use crate::materializer::Materializer;
use crate::naming::NameAllocator;
use crate::renderer::TemplateRenderer;
use crate::tree::{construct_tree, SourceTree};
use log::{debug, info};
use std::path::PathBuf;

/// Outcome of one generator run.
#[derive(Debug)]
pub struct FixtureReport {
    pub tree: SourceTree,
    /// Written source files, in traversal order
    pub files: Vec<PathBuf>,
}

/// Builds a fixture tree per `config` and writes it below `config.output_dir`.
///
/// # Flow
/// 1. Validates the configuration
/// 2. Builds the whole tree in memory
/// 3. Materializes it, one header per leaf
pub fn generate_fixtures(
    config: &FixtureConfig,
    renderer: &dyn TemplateRenderer,
) -> Result<FixtureReport> {
    config.validate()?;
    debug!(
        "Fixture configuration: {}",
        serde_json::to_string(config).unwrap_or_default()
    );

    let mut allocator = NameAllocator::from_config(config)?;
    let tree = construct_tree(&config.root_name, config.depth, &config.fanout, &mut allocator)?;
    debug!("Tree: {}", tree.to_json());

    let synthesizer = HeaderSynthesizer::new(renderer, config.header_name_length);
    let materializer = Materializer::new(synthesizer, &config.extension);
    let files = materializer.materialize(&tree, &config.output_dir, &mut allocator)?;

    info!(
        "Generated {} source files under {}",
        files.len(),
        config.output_dir.join(tree.name()).display()
    );
    Ok(FixtureReport { tree, files })
}
