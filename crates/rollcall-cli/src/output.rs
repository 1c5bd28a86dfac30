//! One-shot rendering of a member page for `rollcall page`.

use owo_colors::{OwoColorize, Style};
use rollcall_engine::render::{page_bar, page_info};
use rollcall_runtime::{Member, MemberList, MemberPagination, PageView};
use serde::Serialize;
use std::fmt;

/// JSON document for `--format json`.
#[derive(Debug, Serialize)]
pub struct MemberPage<'a> {
    pub filter: &'a str,
    pub total_members: usize,
    pub filtered_members: usize,
    pub page_size: usize,
    pub pagination_enabled: bool,
    pub has_no_results: bool,
    pub approved: PageView<'a, Member>,
    pub pending: PageView<'a, Member>,
}

impl<'a> MemberPage<'a> {
    pub fn from_state(state: &'a MemberPagination) -> Self {
        Self {
            filter: state.debounced_text(),
            total_members: state.total_members_count(),
            filtered_members: state.filtered_members_count(),
            page_size: state.page_size(),
            pagination_enabled: state.pagination_enabled(),
            has_no_results: state.has_no_results(),
            approved: state.view(MemberList::Approved),
            pending: state.view(MemberList::Pending),
        }
    }
}

/// Plain-text view; empty lists are omitted.
pub struct MemberPageView<'a> {
    state: &'a MemberPagination,
    color: bool,
}

impl<'a> MemberPageView<'a> {
    pub fn new(state: &'a MemberPagination, color: bool) -> Self {
        Self { state, color }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_list(&self, f: &mut fmt::Formatter<'_>, list: MemberList) -> fmt::Result {
        let view = self.state.view(list);
        let heading_style = match list {
            MemberList::Approved => Style::new().bold().green(),
            MemberList::Pending => Style::new().bold().yellow(),
        };

        writeln!(
            f,
            "{} ({})",
            self.paint(list.label(), heading_style),
            view.total_items
        )?;

        let width = view
            .items
            .iter()
            .map(|member| member.member_name.chars().count())
            .max()
            .unwrap_or(0);

        for member in view.items {
            match &member.member_full_name {
                Some(full_name) => writeln!(
                    f,
                    "  {:<width$}  {}",
                    member.member_name,
                    self.paint(full_name, Style::new().bright_black()),
                    width = width
                )?,
                None => writeln!(f, "  {}", member.member_name)?,
            }
        }

        if self.state.show_pagination(list) {
            writeln!(f, "  {}   {}", page_bar(&view), page_info(&view))?;
        }
        Ok(())
    }
}

impl fmt::Display for MemberPageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;

        if state.total_members_count() == 0 {
            return writeln!(f, "No members");
        }

        if state.has_no_results() {
            return writeln!(
                f,
                "{}",
                self.paint(
                    &format!("No members match \"{}\"", state.debounced_text()),
                    Style::new().red()
                )
            );
        }

        let mut summary = format!(
            "{} of {} members",
            state.filtered_members_count(),
            state.total_members_count()
        );
        if !rollcall_engine::is_blank(state.debounced_text()) {
            summary.push_str(&format!(" matching \"{}\"", state.debounced_text()));
        }
        writeln!(f, "{}", self.paint(&summary, Style::new().bold()))?;

        for list in [MemberList::Approved, MemberList::Pending] {
            if state.list(list).total_items() > 0 {
                writeln!(f)?;
                self.write_list(f, list)?;
            }
        }
        Ok(())
    }
}
