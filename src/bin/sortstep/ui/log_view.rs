use std::ops::Range;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use sortstep::{Snapshot, State};
use unicode_width::UnicodeWidthStr;

use super::theme::{indicators, MarkerStyle, Theme};

/// Every row is the items line plus the marker line under it.
pub const ROW_HEIGHT: u16 = 2;
const CELL_PADDING: usize = 2;
const SELECT_WIDTH: usize = 2;

pub struct LogViewProps<'a> {
    pub area: Rect,
    pub playback: &'a State,
    pub selected: Option<usize>,
    pub theme: &'a Theme,
    pub focused: bool,
}

pub fn render_log(frame: &mut Frame<'_>, props: LogViewProps<'_>) {
    let border = if props.focused {
        props.theme.border_focused
    } else {
        props.theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(" Log ");
    let inner = block.inner(props.area);
    frame.render_widget(block, props.area);
    let lines = build_lines(&props, inner.height);
    frame.render_widget(Paragraph::new(Text::from(lines)), inner);
}

fn build_lines(props: &LogViewProps<'_>, height: u16) -> Vec<Line<'static>> {
    let theme = props.theme;
    let Some(log) = props.playback.log() else {
        return vec![Line::styled(
            "Press → (or Enter in the input) to record the first snapshot",
            theme.muted,
        )];
    };
    if log.is_empty() {
        return vec![Line::from(vec![
            Span::styled("Nothing to sort: enter at least two characters ", theme.muted),
            done_badge(theme),
        ])];
    }
    let revealed = props.playback.revealed();
    let selected = props.selected.unwrap_or(revealed.len() - 1);
    let capacity = usize::from(height / ROW_HEIGHT);
    let ctx = RowContext {
        theme,
        index_width: log.last_index().to_string().len(),
        current: revealed.len() - 1,
        selected,
        done: props.playback.is_done(),
        focused: props.focused,
    };
    visible_window(revealed.len(), selected, capacity)
        .flat_map(|index| row_lines(index, &revealed[index], &ctx))
        .collect()
}

/// Rows to draw so that `selected` stays on screen.
pub fn visible_window(rows: usize, selected: usize, capacity: usize) -> Range<usize> {
    let capacity = capacity.max(1);
    let first = (selected + 1).saturating_sub(capacity);
    first..(first + capacity).min(rows)
}

struct RowContext<'a> {
    theme: &'a Theme,
    index_width: usize,
    current: usize,
    selected: usize,
    done: bool,
    focused: bool,
}

fn row_lines(index: usize, snapshot: &Snapshot, ctx: &RowContext<'_>) -> [Line<'static>; 2] {
    let theme = ctx.theme;
    let is_selected = index == ctx.selected;
    let is_current = index == ctx.current;

    let mut items = Vec::with_capacity(snapshot.sequence.len() + 8);
    let mut markers = Vec::with_capacity(snapshot.sequence.len() + 1);
    let (marker_prefix, index_style) = if is_selected {
        (indicators::SELECTED, theme.selected)
    } else {
        (" ", theme.index)
    };
    items.push(Span::styled(format!("{marker_prefix} "), index_style));
    items.push(Span::styled(
        format!("{index:>width$} ", width = ctx.index_width),
        index_style,
    ));
    markers.push(Span::raw(
        " ".repeat(SELECT_WIDTH + ctx.index_width + 1),
    ));

    for (position, item) in snapshot.sequence.iter().enumerate() {
        let cell = item.width() + CELL_PADDING;
        items.push(Span::raw(format!(" {item} ")));
        let kind = MarkerKind::at(snapshot, position);
        markers.extend(marker_cell(kind, cell, is_current, theme));
    }

    items.push(Span::raw(" "));
    items.push(legend(&theme.marker_i, "i", snapshot.i));
    items.push(Span::raw(" "));
    items.push(legend(&theme.marker_j, "j", snapshot.j));
    if is_current && ctx.done {
        items.push(Span::raw(" "));
        items.push(done_badge(theme));
    }
    if is_selected && ctx.focused {
        items.push(Span::styled(
            format!("  {} r", indicators::REVERT),
            theme.muted,
        ));
    }
    [Line::from(items), Line::from(markers)]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerKind {
    None,
    I,
    J,
    Both,
}

impl MarkerKind {
    fn at(snapshot: &Snapshot, position: usize) -> Self {
        match (snapshot.i == position, snapshot.j == position) {
            (true, true) => MarkerKind::Both,
            (true, false) => MarkerKind::I,
            (false, true) => MarkerKind::J,
            (false, false) => MarkerKind::None,
        }
    }
}

/// Labels on the current row, plain rules on earlier (compact) rows.
fn marker_cell(kind: MarkerKind, cell: usize, full: bool, theme: &Theme) -> Vec<Span<'static>> {
    let labels: Vec<(&'static str, Style)> = match (kind, full) {
        (MarkerKind::None, _) => Vec::new(),
        (MarkerKind::I, true) => vec![("i", theme.marker_i.label)],
        (MarkerKind::J, true) => vec![("j", theme.marker_j.label)],
        (MarkerKind::Both, true) => vec![("i", theme.marker_i.label), ("j", theme.marker_j.label)],
        (MarkerKind::I, false) => vec![("─", theme.marker_i.rule)],
        (MarkerKind::J, false) => vec![("─", theme.marker_j.rule)],
        (MarkerKind::Both, false) => vec![("═", theme.marker_j.rule)],
    };
    let used = labels.len();
    let left = cell.saturating_sub(used) / 2;
    let right = cell.saturating_sub(used + left);
    let mut spans = Vec::with_capacity(used + 2);
    spans.push(Span::raw(" ".repeat(left)));
    spans.extend(
        labels
            .into_iter()
            .map(|(text, style)| Span::styled(text, style)),
    );
    spans.push(Span::raw(" ".repeat(right)));
    spans
}

fn legend(style: &MarkerStyle, label: &str, value: usize) -> Span<'static> {
    Span::styled(format!(" {label} = {value} "), style.badge)
}

fn done_badge(theme: &Theme) -> Span<'static> {
    Span::styled(format!(" {} DONE ", indicators::CHECK), theme.done_badge)
}
