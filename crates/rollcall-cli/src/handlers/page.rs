use crate::args::PageArgs;
use crate::output::{MemberPage, MemberPageView};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use rollcall_runtime::{
    CollectionDetails, Config, Instant, MemberList, MemberPagination, load_roster,
};
use std::time::Duration;

pub fn handle(config: &Config, args: PageArgs) -> Result<()> {
    let roster = load_roster(&args.roster)
        .with_context(|| format!("failed to load roster {}", args.roster.display()))?;

    let details = if args.trust {
        CollectionDetails::trusted()
    } else {
        roster.details
    };
    let page_size = args.page_size.unwrap_or(config.pagination.page_size);
    let window = args
        .window
        .map(|window| window.apply(config.pagination.window))
        .unwrap_or(config.pagination.window);

    // One-shot output: the filter commits immediately.
    let mut state = MemberPagination::new(roster.members, details, page_size, Duration::ZERO)
        .with_enabled(config.pagination.enabled && !args.all)
        .with_window(window);

    if let Some(filter) = args.filter {
        state.set_filter_text(filter, Instant::now());
    }
    state.go_to_page(MemberList::Approved, args.page);
    state.go_to_page(MemberList::Pending, args.pending_page);

    match args.format {
        OutputFormat::Json => {
            let page = MemberPage::from_state(&state);
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        OutputFormat::Plain => {
            let color = std::io::stdout().is_terminal();
            print!("{}", MemberPageView::new(&state, color));
        }
    }

    Ok(())
}
