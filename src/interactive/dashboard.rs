// Full-screen calculator form using ratatui
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

use crate::interactive::state::{EditMode, FormState};
use crate::models::{InputField, InputSet};
use crate::output::chart::chart_data;
use crate::output::format::{FormattedResults, Precision, format_fixed};
use crate::output::summary::summary_items;

/// Display settings that do not change while the form is open
#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub precision: Precision,
    pub currency: String,
    pub refresh_rate: Duration,
}

pub struct Dashboard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: FormState,
    settings: DisplaySettings,
}

impl Dashboard {
    pub fn new(defaults: InputSet, settings: DisplaySettings) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Dashboard {
            terminal,
            state: FormState::new(defaults),
            settings,
        })
    }

    /// Run until the user quits; returns the final inputs
    pub fn run(&mut self) -> Result<InputSet> {
        loop {
            self.draw()?;

            if !event::poll(self.settings.refresh_rate)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
                {
                    break;
                }
                if !self.handle_key(key.code) {
                    break;
                }
            }
        }

        Ok(self.state.inputs().clone())
    }

    /// Returns false when the user asked to quit
    fn handle_key(&mut self, code: KeyCode) -> bool {
        let state = &mut self.state;
        if state.is_editing() {
            match code {
                KeyCode::Enter => state.commit(),
                KeyCode::Esc => state.cancel(),
                KeyCode::Backspace => state.backspace(),
                KeyCode::Char(c) => state.push_char(c),
                _ => {}
            }
            return true;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Up | KeyCode::Char('k') => state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => state.select_next(),
            KeyCode::Enter => state.activate(),
            KeyCode::Char('m') => state.toggle_cost_mode(),
            KeyCode::Char('r') => state.reset(),
            KeyCode::Char('h') | KeyCode::F(1) => state.toggle_help(),
            _ => {}
        }
        true
    }

    pub fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let state = &self.state;
        let settings = &self.settings;
        self.terminal.draw(|f| render_form(f, state, settings))?;
        Ok(())
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

pub fn render_form(f: &mut Frame, state: &FormState, settings: &DisplaySettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(15),    // Inputs and results
            Constraint::Length(10), // Chart
            Constraint::Length(1),  // Status line
        ])
        .split(f.size());

    let formatted = FormattedResults::new(state.results(), settings.precision, &settings.currency);

    render_header(f, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_inputs(f, middle[0], state);
    render_results(f, middle[1], state, &formatted);

    render_chart(f, chunks[2], state, settings);
    render_status_line(f, chunks[3], state);

    if state.show_help {
        render_help_popup(f);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![Span::styled(
        "ROI Calculator: AI vs. Human",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_inputs(f: &mut Frame, area: Rect, state: &FormState) {
    let items: Vec<ListItem> = InputField::ALL
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let selected = index == state.selected;
            let value = match (&state.mode, selected) {
                (EditMode::Editing { buffer }, true) => format!("{}_", buffer),
                _ => state.inputs().display_value(*field),
            };

            let style = if selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<26}", field.label())),
                Span::styled(value, Style::default().fg(Color::Yellow)),
            ]))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Inputs"));
    f.render_widget(list, area);
}

fn value_color(value: f64) -> Color {
    if !value.is_finite() {
        Color::Yellow
    } else if value < 0.0 {
        Color::Red
    } else {
        Color::Green
    }
}

fn render_results(f: &mut Frame, area: Rect, state: &FormState, formatted: &FormattedResults) {
    let results = state.results();
    let row = |label: &'static str, text: String, color: Color| {
        Line::from(vec![
            Span::raw(format!("{:<24}", label)),
            Span::styled(text, Style::default().fg(color)),
        ])
    };

    let mut lines = vec![
        row("Cost per API call", formatted.cost_per_call.clone(), Color::Magenta),
        row("Total API cost", formatted.total_api_cost.clone(), Color::Magenta),
        Line::raw(""),
    ];
    for (label, text) in summary_items(formatted) {
        let color = match label {
            "Savings through AI" => value_color(results.net_savings),
            "Remaining human cost" => Color::Red,
            "Time still required" => Color::LightRed,
            _ => Color::Blue,
        };
        lines.push(row(label, text, color));
    }

    let non_finite = results.non_finite_fields();
    if !non_finite.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("Not finite: {}", non_finite.join(", ")),
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_chart(f: &mut Frame, area: Rect, state: &FormState, settings: &DisplaySettings) {
    let points = chart_data(state.results(), settings.precision.cost);
    let bar_width = (area.width.saturating_sub(2) / points.len().max(1) as u16)
        .saturating_sub(2)
        .max(1);

    let bars: Vec<Bar> = points
        .iter()
        .map(|point| {
            // Bars are unsigned; magnitude in hundredths, sign shown by color and text
            let height = if point.value.is_finite() {
                (point.value.abs() * 100.0).round() as u64
            } else {
                0
            };
            Bar::default()
                .value(height)
                .label(Line::from(point.category))
                .text_value(format_fixed(point.value, settings.precision.cost))
                .style(Style::default().fg(value_color(point.value)))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Cost overview"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2);
    f.render_widget(chart, area);
}

fn render_status_line(f: &mut Frame, area: Rect, state: &FormState) {
    let status_text = if state.is_editing() {
        "Enter to save | Esc to cancel | Backspace to delete"
    } else {
        "↑/↓ select | Enter edit | 'm' cost mode | 'r' reset | 'h' help | 'q' quit"
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame) {
    let area = centered_rect(60, 60, f.size());

    f.render_widget(Clear, area);

    let help_text = vec![
        Line::from(Span::styled(
            "ROI Calculator - Help",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw("Controls:"),
        Line::raw("  ↑/↓ or k/j   - Select field"),
        Line::raw("  Enter        - Edit field / save edit"),
        Line::raw("  Esc          - Cancel edit"),
        Line::raw("  m            - Toggle hourly/yearly human cost"),
        Line::raw("  r            - Reset to configured defaults"),
        Line::raw("  h / F1       - Show/Hide help"),
        Line::raw("  q            - Quit"),
        Line::raw(""),
        Line::raw("Empty or invalid numbers count as 0."),
        Line::raw("Results are recalculated after every change."),
        Line::raw(""),
        Line::raw("Press 'h' again to close this help."),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .title_alignment(Alignment::Center),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn settings() -> DisplaySettings {
        DisplaySettings {
            precision: Precision::default(),
            currency: "USD".to_string(),
            refresh_rate: Duration::from_millis(200),
        }
    }

    fn rendered_text(state: &FormState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let settings = settings();
        terminal.draw(|f| render_form(f, state, &settings)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_shows_inputs_and_results() {
        let state = FormState::new(InputSet {
            input_tokens: 1000.0,
            output_tokens: 500.0,
            human_processing_time_sec: 3600.0,
            human_cost_value: 50.0,
            ai_automation_percent: 50.0,
            ..Default::default()
        });
        let text = rendered_text(&state);
        assert!(text.contains("Inputs"));
        assert!(text.contains("Human cost mode"));
        assert!(text.contains("$0.00350"));
        assert!(text.contains("$21.50"));
        assert!(text.contains("Cost overview"));
    }

    #[test]
    fn test_render_flags_non_finite_results() {
        let state = FormState::new(InputSet {
            hours_per_workday: 0.0,
            human_processing_time_sec: 60.0,
            ..Default::default()
        });
        let text = rendered_text(&state);
        assert!(text.contains("Not finite: remaining_workdays"));
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 60, outer);
        assert!(inner.x > 0 && inner.y > 0);
        assert!(inner.right() < outer.right());
        assert!(inner.bottom() < outer.bottom());
    }
}
