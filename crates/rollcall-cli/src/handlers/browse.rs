use crate::tui::{self, BrowseApp};
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use rollcall_runtime::{CollectionDetails, Config, MemberPagination, load_roster};
use std::path::Path;

pub fn handle(config: &Config, roster_path: &Path, trust: bool) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("browse needs an interactive terminal; use `rollcall page` for scripted output");
    }

    let roster = load_roster(roster_path)
        .with_context(|| format!("failed to load roster {}", roster_path.display()))?;
    let details = if trust {
        CollectionDetails::trusted()
    } else {
        roster.details
    };

    tracing::info!(members = roster.members.len(), trust = details.trust, "opening browser");

    let members = MemberPagination::from_config(roster.members, details, config);
    let app = BrowseApp::new(members, config.pagination.page_size_options.clone());
    tui::run(app)
}
