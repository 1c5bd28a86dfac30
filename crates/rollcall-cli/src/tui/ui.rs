use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::BrowseApp;
use rollcall_engine::render::{page_bar, page_info};
use rollcall_runtime::MemberList;

const HELP: &str =
    "type to filter · Esc clear · ←/→ page · Home/End first/last · ↑/↓ page size · Tab switch list · Ctrl+Q quit";

pub(crate) fn draw(f: &mut Frame, app: &BrowseApp) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_filter(f, main_chunks[0], app);
    render_summary(f, main_chunks[1], app);
    render_lists(f, main_chunks[2], app);

    let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, main_chunks[3]);
}

fn render_filter(f: &mut Frame, area: Rect, app: &BrowseApp) {
    let members = app.members();
    let title = if members.filter_text() != members.debounced_text() {
        "Filter (…)"
    } else {
        "Filter"
    };

    let input = Paragraph::new(members.filter_text()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(input, area);
}

fn render_summary(f: &mut Frame, area: Rect, app: &BrowseApp) {
    let members = app.members();
    let line = Line::from(vec![
        Span::styled(
            format!(
                "{} of {} members",
                members.filtered_members_count(),
                members.total_members_count()
            ),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  ·  {} per page", members.page_size())),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_lists(f: &mut Frame, area: Rect, app: &BrowseApp) {
    let members = app.members();

    if members.has_no_results() {
        let message = Paragraph::new(format!(
            "No members match \"{}\"",
            members.debounced_text()
        ))
        .style(Style::default().fg(Color::Red))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(message, area);
        return;
    }

    let show_pending = members.pending().total_items() > 0;
    if !show_pending {
        render_list(f, area, app, MemberList::Approved);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_list(f, chunks[0], app, MemberList::Approved);
    render_list(f, chunks[1], app, MemberList::Pending);
}

fn render_list(f: &mut Frame, area: Rect, app: &BrowseApp, list: MemberList) {
    let members = app.members();
    let view = members.view(list);

    let border_color = if app.focus() == list {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!("{} ({})", list.label(), view.total_items));

    if members.show_pagination(list) {
        block = block.title_bottom(format!(" {}  {} ", page_bar(&view), page_info(&view)));
    }

    let items: Vec<ListItem> = view
        .items
        .iter()
        .map(|member| {
            let mut spans = vec![Span::raw(member.member_name.clone())];
            if let Some(full_name) = &member.member_full_name {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    full_name.clone(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
