use clap::Subcommand;
use serde_json::json;

use autofocus_core::Document;

#[derive(Subcommand)]
pub enum SitesAction {
    /// Add a domain to the blocklist
    Block {
        /// Domain to block (e.g. "youtube.com")
        domain: String,
    },
    /// Remove a domain from the blocklist
    Unblock {
        domain: String,
    },
    /// Add a domain to the whitelist
    Allow {
        domain: String,
    },
    /// Remove a domain from the whitelist
    Disallow {
        domain: String,
    },
    /// Show both lists
    List,
}

pub fn run(action: SitesAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::load()?;

    match action {
        SitesAction::Block { domain } => {
            if doc.blocked_sites.add(&domain) {
                doc.save()?;
                println!("blocked {domain}");
            } else {
                println!("{domain} is already blocked");
            }
        }
        SitesAction::Unblock { domain } => {
            if doc.blocked_sites.remove(&domain) {
                doc.save()?;
                println!("unblocked {domain}");
            } else {
                println!("{domain} was not blocked");
            }
        }
        SitesAction::Allow { domain } => {
            if doc.whitelist.add(&domain) {
                doc.save()?;
                println!("whitelisted {domain}");
            } else {
                println!("{domain} is already whitelisted");
            }
        }
        SitesAction::Disallow { domain } => {
            if doc.whitelist.remove(&domain) {
                doc.save()?;
                println!("removed {domain} from the whitelist");
            } else {
                println!("{domain} was not whitelisted");
            }
        }
        SitesAction::List => {
            let lists = json!({
                "blockedSites": doc.blocked_sites,
                "whitelist": doc.whitelist,
            });
            println!("{}", serde_json::to_string_pretty(&lists)?);
        }
    }
    Ok(())
}
