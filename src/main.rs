#[warn(clippy::pedantic, clippy::cargo)]
mod config;
mod error;
mod link;
mod path_util;
mod site;
#[cfg(test)]
mod test;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{error, info, warn};

use crate::config::Config;
use crate::path_util::SiteDir;

#[derive(Parser)]
#[command(name = "saaaadcat", about = "Site config for the saaaadcat blog", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective config as TOML
    Show {
        /// Directory containing an optional site.toml
        #[arg(short, long, default_value_t = SiteDir::from("./"))]
        dir: SiteDir
    },

    /// Validate the config, reporting every problem
    Check {
        /// Directory containing an optional site.toml
        #[arg(short, long, default_value_t = SiteDir::from("./"))]
        dir: SiteDir
    },

    /// List nav and social links in rendering order
    Links {
        /// Directory containing an optional site.toml
        #[arg(short, long, default_value_t = SiteDir::from("./"))]
        dir: SiteDir
    },

    /// Show how many pages a given number of posts spans
    Pages {
        /// Total number of posts
        #[arg(short, long)]
        posts: usize,
        /// Directory containing an optional site.toml
        #[arg(short, long, default_value_t = SiteDir::from("./"))]
        dir: SiteDir
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let dir = match &cli.command {
        Commands::Show { dir }
        | Commands::Check { dir }
        | Commands::Links { dir }
        | Commands::Pages { dir, .. } => dir
    };
    let config = match Config::load(dir) {
        Ok(config) => config,
        Err(e) => {
            error!("Loading config failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Show { .. } => match config.to_toml() {
            Ok(toml) => print!("{toml}"),
            Err(e) => {
                error!("Failed: {}", e);
                return ExitCode::FAILURE;
            }
        },
        Commands::Check { .. } => {
            let problems = config.validate();
            if !problems.is_empty() {
                problems.iter().for_each(|e| warn!("{}", e));
                error!("Config has {} problem(s)", problems.len());
                return ExitCode::FAILURE;
            }
            info!("Config is valid");
        }
        Commands::Links { .. } => {
            for (list, links) in [("nav", &config.nav), ("social", &config.social)] {
                println!("{list}:");
                for link in links {
                    let kind = link
                        .kind()
                        .map_or_else(|| "unknown".to_string(), |k| k.to_string());
                    println!("  {:<10} {:<9} {}", link.label, kind, link.anchor_href());
                }
            }
        }
        Commands::Pages { posts, .. } => {
            let site = &config.site;
            println!("homepage: {} post(s)", site.homepage_post_count(posts));
            for page in 1..=site.page_count(posts) {
                if let Some(range) = site.page_range(page, posts) {
                    println!("page {page}: posts {}..{}", range.start, range.end);
                }
            }
        }
    }
    ExitCode::SUCCESS
}
