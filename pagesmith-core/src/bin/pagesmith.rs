use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use pagesmith_core::{CoreConfig, MemoryStore, PageStore, SiteDeployer};
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!("Usage: pagesmith <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  deploy <site.yaml>             deploy every published page in the site file");
    eprintln!("  undeploy <subdomain> <slug>    remove a deployed page (slug 'root' for the index)");
    eprintln!("  status <subdomain> <slug>      report whether a page is live");
    eprintln!("  list                           list every deployed page");
    eprintln!("  refresh-assets                 re-copy the asset bundle into deployed sites");
    eprintln!();
    eprintln!("Configuration is read from ./pagesmith.yaml, or the file named by");
    eprintln!("the PAGESMITH_CONFIG environment variable.");
    process::exit(1);
}

fn load_config() -> CoreConfig {
    let path = env::var("PAGESMITH_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("pagesmith.yaml"));
    if !path.exists() {
        return CoreConfig::default();
    }
    match CoreConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ {}", e);
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage();
    }

    let deployer = SiteDeployer::from_config(&load_config());

    let exit_code = match args[1].as_str() {
        "deploy" => {
            let Some(site_file) = args.get(2) else { usage() };
            cmd_deploy(&deployer, Path::new(site_file)).await
        }
        "undeploy" => {
            let (Some(subdomain), Some(slug)) = (args.get(2), args.get(3)) else {
                usage()
            };
            cmd_undeploy(&deployer, subdomain, slug).await
        }
        "status" => {
            let (Some(subdomain), Some(slug)) = (args.get(2), args.get(3)) else {
                usage()
            };
            cmd_status(&deployer, subdomain, slug).await
        }
        "list" => cmd_list(&deployer).await,
        "refresh-assets" => cmd_refresh(&deployer).await,
        _ => usage(),
    };

    process::exit(exit_code);
}

async fn cmd_deploy(deployer: &SiteDeployer, site_file: &Path) -> i32 {
    let store = match MemoryStore::load(site_file) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            eprintln!("✗ {}", e);
            return 1;
        }
    };

    let pages = store.published_pages().await;
    if pages.is_empty() {
        println!("No published pages in {}", site_file.display());
        return 0;
    }

    let mut exit_code = 0;
    for page in pages {
        let components = store.components(page.id).await;
        match deployer.deploy(&page, &components).await {
            Ok(site) => {
                println!("✓ {}/{} -> {}", site.subdomain, site.slug, site.path.display());
            }
            Err(e) => {
                eprintln!("✗ {}/{}: {}", page.subdomain, page.slug, e);
                exit_code = 1;
            }
        }
    }
    exit_code
}

async fn cmd_undeploy(deployer: &SiteDeployer, subdomain: &str, slug: &str) -> i32 {
    match deployer.undeploy(subdomain, slug).await {
        Ok(true) => {
            println!("✓ {}/{} undeployed", subdomain, slug);
            0
        }
        Ok(false) => {
            println!("{}/{} was not deployed", subdomain, slug);
            0
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            1
        }
    }
}

async fn cmd_status(deployer: &SiteDeployer, subdomain: &str, slug: &str) -> i32 {
    let status = deployer.status(subdomain, slug).await;
    if status.deployed {
        println!("deployed: {}", status.path.display());
    } else {
        println!("not deployed");
    }
    0
}

async fn cmd_list(deployer: &SiteDeployer) -> i32 {
    match deployer.list_deployed().await {
        Ok(sites) => {
            if sites.is_empty() {
                println!("No deployed pages");
            }
            for site in sites {
                println!("{}/{} -> {}", site.subdomain, site.slug, site.path.display());
            }
            0
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            1
        }
    }
}

async fn cmd_refresh(deployer: &SiteDeployer) -> i32 {
    match deployer.refresh_assets().await {
        Ok(count) => {
            println!("✓ refreshed assets for {} site(s)", count);
            0
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            1
        }
    }
}
