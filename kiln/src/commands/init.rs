use std::path::{Path, PathBuf};

use clap::Args;
use dialoguer::{Input, theme::ColorfulTheme};
use eyre::{Context, Result};
use kiln_codegen::files::{KILN_TOML, StarterDescriptor};
use kiln_manifest::ProjectDescriptor;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Package name (defaults to current directory name)
    #[arg(default_value = ".")]
    pub name: String,

    /// Project root (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Package author
    #[arg(long)]
    pub author: Option<String>,

    /// Author email address
    #[arg(long)]
    pub author_address: Option<String>,

    /// One-line package description
    #[arg(long)]
    pub description: Option<String>,

    /// Source repository URL
    #[arg(long)]
    pub repository_url: Option<String>,

    /// Only write kiln.toml, without synthesizing project files
    #[arg(long)]
    pub no_synth: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let (name, output_dir) = Self::resolve_paths(&self.name, self.output.clone())?;

        let author = match &self.author {
            Some(author) => author.clone(),
            None => Self::prompt("Author", None)?,
        };

        let mut starter = StarterDescriptor::new(&name).with_author(author);
        if let Some(address) = &self.author_address {
            starter = starter.with_author_address(address);
        }
        if let Some(description) = &self.description {
            starter = starter.with_description(description);
        }
        let repository_url = match &self.repository_url {
            Some(url) => url.clone(),
            None => Self::prompt("Repository URL", Some(starter.repository_url.as_str()))?,
        };
        starter = starter.with_repository_url(repository_url);

        let report = ops::init(&starter, &output_dir)?;
        report.render(&mut TerminalOutput::new());

        if self.no_synth {
            return Ok(());
        }

        let descriptor = ProjectDescriptor::from_file(output_dir.join(KILN_TOML)).unwrap_or_exit();
        let report = ops::synth(
            &descriptor,
            ops::synth::SynthOptions {
                output_dir: &output_dir,
                dry_run: false,
            },
        )
        .unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Self::print_next_steps(&output_dir);
        Ok(())
    }

    fn prompt(label: &str, default: Option<&str>) -> Result<String> {
        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme).with_prompt(label);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input
            .interact_text()
            .wrap_err_with(|| format!("Failed to read {}", label.to_lowercase()))
    }

    fn resolve_paths(name: &str, output: Option<PathBuf>) -> Result<(String, PathBuf)> {
        if name == "." {
            let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
            let dir_name = cwd
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| eyre::eyre!("Current directory has no valid name"))?
                .to_string();
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            Ok((dir_name, output_dir))
        } else {
            // `@scope/name` lands in `./name`
            let dir = name.rsplit('/').next().unwrap_or(name);
            let output_dir = output.unwrap_or_else(|| PathBuf::from(dir));
            Ok((name.to_string(), output_dir))
        }
    }

    fn print_next_steps(output_dir: &Path) {
        println!();
        println!("Next steps:");
        if output_dir != Path::new(".") {
            println!("  cd {}", output_dir.display());
        }
        println!("  npm install");
        println!("  npm run build");
    }
}
