//! Documentation browser shell: page navigation, focus cycling, and the
//! terminal event loop.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent,
    KeyEventKind, KeyModifiers, MouseEvent,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use griddle::theme::TableTheme;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::{Frame, Terminal};

use crate::error::Result;
use crate::pages::{self, Page};

const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Nav,
    Demo,
    Source,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Nav => Focus::Demo,
            Focus::Demo => Focus::Source,
            Focus::Source => Focus::Nav,
        }
    }
}

pub fn run() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = App::new().run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

struct App {
    pages: Vec<Box<dyn Page>>,
    active: usize,
    focus: Focus,
    source_scroll: u16,
    theme: TableTheme,
    quit: bool,
}

impl App {
    fn new() -> Self {
        Self {
            pages: pages::all(),
            active: 0,
            focus: Focus::Demo,
            source_scroll: 0,
            theme: TableTheme::default(),
            quit: false,
        }
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.quit {
            self.pages[self.active].tick();
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => self.on_key(&key),
                    Event::Mouse(mouse) => self.on_mouse(&mouse),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn on_key(&mut self, key: &KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        // The focused demo gets the first look, so table keys like Esc and
        // Space are not shadowed by the shell.
        if self.focus == Focus::Demo && self.pages[self.active].handle_key(key).is_handled() {
            return;
        }
        match key.code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Up => match self.focus {
                Focus::Nav => self.select_page(self.active.saturating_sub(1)),
                Focus::Source => self.source_scroll = self.source_scroll.saturating_sub(1),
                Focus::Demo => {}
            },
            KeyCode::Down => match self.focus {
                Focus::Nav => self.select_page(self.active + 1),
                Focus::Source => self.source_scroll = self.source_scroll.saturating_add(1),
                Focus::Demo => {}
            },
            KeyCode::PageUp if self.focus == Focus::Source => {
                self.source_scroll = self.source_scroll.saturating_sub(10);
            }
            KeyCode::PageDown if self.focus == Focus::Source => {
                self.source_scroll = self.source_scroll.saturating_add(10);
            }
            _ => {}
        }
    }

    fn on_mouse(&mut self, mouse: &MouseEvent) {
        self.pages[self.active].handle_mouse(mouse);
    }

    fn select_page(&mut self, index: usize) {
        let index = index.min(self.pages.len().saturating_sub(1));
        if index != self.active {
            self.active = index;
            self.source_scroll = 0;
            log::debug!("page -> {}", self.pages[self.active].slug());
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let outer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(22), Constraint::Min(40)])
            .split(frame.area());
        self.draw_nav(frame, outer[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Min(10),
                Constraint::Length(12),
            ])
            .split(outer[1]);
        self.draw_prose(frame, right[0]);
        self.draw_demo(frame, right[1]);
        self.draw_source(frame, right[2]);
    }

    fn border_style(&self, focus: Focus) -> Style {
        if self.focus == focus {
            Style::default().fg(self.theme.accent)
        } else {
            Style::default().fg(self.theme.muted)
        }
    }

    fn draw_nav(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title("griddle")
            .border_style(self.border_style(Focus::Nav));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        for (i, page) in self.pages.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let (marker, style) = if i == self.active {
                (
                    "» ",
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(self.theme.row_fg))
            };
            let line = format!("{marker}{}", page.title());
            frame
                .buffer_mut()
                .set_stringn(inner.x, y, &line, inner.width as usize, style);
        }
    }

    fn draw_prose(&self, frame: &mut Frame, area: Rect) {
        let page = &self.pages[self.active];
        let block = Block::bordered()
            .title(page.title())
            .border_style(Style::default().fg(self.theme.muted));
        let prose = Paragraph::new(page.prose())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(self.theme.row_fg))
            .block(block);
        frame.render_widget(prose, area);
    }

    fn draw_demo(&mut self, frame: &mut Frame, area: Rect) {
        let status = self.pages[self.active].status();
        let block = Block::bordered()
            .title("Demo")
            .title_bottom(status)
            .border_style(self.border_style(Focus::Demo));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let theme = self.theme.clone();
        self.pages[self.active].render(frame, inner, &theme);
    }

    fn draw_source(&self, frame: &mut Frame, area: Rect) {
        let page = &self.pages[self.active];
        let title = format!("Source · {}.rs", page.slug().replace('-', "_"));
        let block = Block::bordered()
            .title(title)
            .border_style(self.border_style(Focus::Source));
        let source = Paragraph::new(page.source())
            .style(Style::default().fg(self.theme.muted))
            .scroll((self.source_scroll, 0))
            .block(block);
        frame.render_widget(source, area);
    }
}
