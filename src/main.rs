//! robogen's entry point: parses arguments and dispatches to the fixture
//! generator, the fixture verifier or the release patcher.

use robogen::{
    cli::{get_args, Args, Command},
    config::{FixtureConfig, ReleaseConfig, ReleaseInfo},
    constants::DEFAULT_EXTENSION,
    error::{default_error_handler, Result},
    fixtures::generate_fixtures,
    logger::init_logger,
    materializer::verify_source_tree,
    patcher::patch_release,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Fixtures {
            output_dir,
            depth,
            fanout,
            seed,
        } => {
            let config = FixtureConfig {
                output_dir,
                depth,
                fanout,
                seed,
                ..FixtureConfig::default()
            };
            let renderer = MiniJinjaRenderer::new();
            let report = generate_fixtures(&config, &renderer)?;
            for path in &report.files {
                println!("Created: '{}'", path.display());
            }
        }
        Command::Verify { dir } => {
            let checked = verify_source_tree(&dir, DEFAULT_EXTENSION)?;
            println!("Verified {} source files in '{}'.", checked, dir.display());
        }
        Command::Bump {
            root,
            new_version,
            month,
            year,
            allow_unmatched,
            dry_run,
        } => {
            let config = ReleaseConfig {
                root,
                release: ReleaseInfo::new(&new_version, &month, &year),
                allow_unmatched,
                dry_run,
                ..ReleaseConfig::default()
            };
            let report = patch_release(&config)?;
            let action = if dry_run { "Would patch" } else { "Patched" };
            for patch in &report {
                println!(
                    "{}: '{}' ({} {})",
                    action,
                    patch.path.display(),
                    patch.matches,
                    if patch.matches == 1 { "line" } else { "lines" }
                );
            }
        }
    }
    Ok(())
}
