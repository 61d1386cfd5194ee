//! Implementation of the `amur app` command.
//!
//! # What `amur app <name>` does
//!
//! 1. Resolves the config (`--config` or `./amur.yaml`, defaults otherwise)
//! 2. Renders the whole project tree in memory from the built-in templates
//! 3. Writes it to `<dest>/<name>/` (or just lists it with `--dry-run`)
//! 4. Runs `git init` when `--git-init` is given
//! 5. Installs dependencies unless `--skip-install` is given

use crate::cli::AppArgs;
use crate::config::Config;
use crate::error::Result;
use crate::generator::{GenerationOutcome, Generator, TemplateStore};
use crate::post_gen::{
    CommandInstaller, GitInitializer, Installer, PostGenReport, VcsInitializer,
    run_post_generation,
};
use std::path::Path;

/// Execute the `amur app` command.
pub fn cmd_app(args: AppArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref(), Path::new("."))?;
    let installer = CommandInstaller::new(config.install_command.clone());

    run_app(&args, &config, &installer, &GitInitializer)
}

/// Body of `amur app` with the collaborators injected.
pub(crate) fn run_app(
    args: &AppArgs,
    config: &Config,
    installer: &dyn Installer,
    vcs: &dyn VcsInitializer,
) -> Result<()> {
    let generator = Generator::new(TemplateStore::builtin()?, config.context_defaults());
    let flags = args.flags();

    if args.dry_run {
        let (ctx, tree) = generator.plan(&args.name, &flags)?;
        println!(
            "Would create {}:",
            args.dest.join(&ctx.project_slug).display()
        );
        for (path, content) in tree.files() {
            println!("  {}  ({} bytes)", path, content.len());
        }
        return Ok(());
    }

    let outcome = generator.generate(&args.name, &flags, &args.dest)?;
    print_generated(&outcome);

    let report = run_post_generation(&outcome, installer, vcs)?;
    print_next_steps(&outcome, &report);

    Ok(())
}

fn print_generated(outcome: &GenerationOutcome) {
    println!("Created {}", outcome.output_root.display());
    println!();
    for path in &outcome.files {
        println!("  create  {}", path);
    }
    println!();
}

fn print_next_steps(outcome: &GenerationOutcome, report: &PostGenReport) {
    if report.vcs_initialized {
        println!("Initialized git repository.");
    }
    println!("Next steps:");
    println!("  cd {}", outcome.output_root.display());
    if !report.installed {
        println!("  npm install");
    }
    println!("  npm start");
}
