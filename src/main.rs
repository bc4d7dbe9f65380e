use clap::{Parser, Subcommand};
use colored::*;
use grlc_docs::config::Config;
use grlc_docs::error::AppResult;
use grlc_docs::github::{render_repo_links, GitHubClient};
use grlc_docs::navigation::{derive_base_path, NavControl};
use grlc_docs::page::render_index;
use grlc_docs::provenance::render_provenance;
use grlc_docs::spec::SpecObject;
use grlc_docs::widget::PageView;
use log::{error, info};
use std::process;

#[derive(Parser, Debug)]
#[command(version, about = "Navigation, provenance and repository discovery for grlc API docs")]
struct Args {
    /// Path to an optional YAML config file
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the base path and previous/next commit targets of a specification
    Nav {
        /// Specification JSON file
        spec: String,
    },
    /// Print the provenance panel HTML of a specification
    Prov {
        /// Specification JSON file
        spec: String,
    },
    /// Print the documentation page that boots the Swagger UI widget
    Page {
        /// URL of the specification to load (overrides the config)
        #[arg(long)]
        url: Option<String>,
    },
    /// List a GitHub user's repositories containing SPARQL queries
    Discover {
        /// GitHub user name
        user: String,

        /// GitHub Personal Access Token
        #[arg(short, long, env = "GITHUB_TOKEN")]
        token: Option<String>,

        /// Print the result as HTML links
        #[arg(long)]
        html: bool,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        process::exit(1);
    }
}

fn load_spec(path: &str) -> AppResult<SpecObject> {
    let text = std::fs::read_to_string(path)?;
    SpecObject::from_json(&text)
}

fn describe(label: &str, control: &NavControl) -> String {
    match control.target() {
        Some(target) => format!("{}: {}", label, target.as_str().green()),
        None => format!("{}: {}", label, "hidden".dimmed()),
    }
}

async fn run() -> AppResult<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Nav { spec } => {
            info!("Deriving navigation for {}", spec);
            let spec = load_spec(&spec)?;
            let mut page = PageView::new();
            page.apply(&spec);
            match spec.base_path.as_deref() {
                Some(base) => println!("base: {}", derive_base_path(base)),
                None => println!("base: {}", "absent".dimmed()),
            }
            println!("{}", describe("prev", &page.commits.prev));
            println!("{}", describe("next", &page.commits.next));
        }
        Command::Prov { spec } => {
            let spec = load_spec(&spec)?;
            match spec.prov.as_deref() {
                Some(prov) => println!("{}", render_provenance(prov)),
                None => info!("Specification has no provenance"),
            }
        }
        Command::Page { url } => {
            let mut options = config.widget;
            if let Some(url) = url {
                options.url = url;
            }
            println!("{}", render_index(&options)?);
        }
        Command::Discover { user, token, html } => {
            let client = GitHubClient::new(token.as_deref(), config.discovery);
            let repos = client.find_query_repos(&user).await?;
            if html {
                println!("{}", render_repo_links(&repos, client.link_base()));
            } else if repos.is_empty() {
                println!("{}", format!("No query repositories found for {}", user).yellow());
            } else {
                for repo in &repos {
                    println!("{} {}{}", repo.name.bold(), client.link_base(), repo.full_name);
                }
            }
        }
    }
    Ok(())
}
