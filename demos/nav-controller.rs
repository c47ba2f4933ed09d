// bubble-tabbar/demos/nav-controller.rs
use std::{fs::File, path::PathBuf, sync::Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bubble_tabbar::{
    BubbleTabBar, BubbleTabBarConfig, InputEvent, NavController, NavDestination, NavHost,
    SelectableItem, Tui, TuiApp, TuiWidget, tui_theme,
};

#[derive(Parser, Debug)]
#[command(about = "Bubble tab bar kept in sync with a navigation controller")]
struct Args {
    /// Tab bar styling
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/assets/bubbletab.json"))]
    config: PathBuf,
    /// Menu to use instead of the one named in the config
    #[arg(long)]
    menu: Option<PathBuf>,
    #[arg(long, default_value = "nav-controller.log")]
    log_file: PathBuf,
}

struct NavDemo {
    host: NavHost,
    run_token: CancellationToken,
}

impl NavDemo {
    fn new(config: BubbleTabBarConfig, run_token: CancellationToken) -> Result<Self> {
        let mut bar = BubbleTabBar::new(config).context("building tab bar")?;
        bar.focus();

        // one destination per bubble, starting at the checked one
        let destinations: Vec<NavDestination> = bar
            .bubbles()
            .iter()
            .map(|b| NavDestination {
                id: b.id(),
                label: b.title().to_string(),
            })
            .collect();
        let start = bar
            .selected_id()
            .or_else(|| destinations.first().map(|d| d.id))
            .context("menu has no items")?;
        let nav = NavController::new(destinations, start)?;

        Ok(Self {
            host: NavHost::new(bar, nav),
            run_token,
        })
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.run_token.cancel(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.run_token.cancel();
            }
            KeyCode::Backspace => {
                if !self.host.pop_back() {
                    info!("already at start destination");
                }
            }
            _ => {
                self.host.bar_mut().key_event(key);
            }
        }
    }
}

impl TuiApp for NavDemo {
    fn should_draw(&mut self) -> bool {
        self.host.bar().need_draw()
    }

    fn handle_events(&mut self, events: Vec<InputEvent>) {
        for event in events {
            match event {
                InputEvent::Key(key) => self.handle_key(key),
                InputEvent::Mouse(mouse) => {
                    self.host.bar_mut().mouse_event(mouse);
                }
            }
            self.host.pump();
        }
    }

    fn render(&mut self, frame: &mut bubble_tabbar::TerminalFrame) {
        let bar_height = self.host.bar().height() + 2;
        let [page_area, bar_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(bar_height)])
                .areas(frame.area());
        let buf = frame.buffer_mut();

        let current = self.host.nav().current();
        let stack = self
            .host
            .nav()
            .back_stack()
            .iter()
            .filter_map(|id| self.host.nav().destination(*id))
            .map(|d| d.label.as_str())
            .collect::<Vec<_>>()
            .join(" > ");
        let page = vec![
            Line::from(vec![
                Span::raw("Destination: "),
                Span::raw(current.label.clone()).bold(),
                Span::raw(format!(" ({})", current.id)),
            ]),
            Line::from(format!("Back stack: {stack}")),
            Line::default(),
            Line::from("←/→ move   Enter/Space or click select   1-9 jump")
                .fg(tui_theme::HINT_FG),
            Line::from("Backspace back   q quit").fg(tui_theme::HINT_FG),
        ];
        Paragraph::new(page)
            .block(
                Block::bordered()
                    .title(current.label.clone())
                    .border_style(Style::default().fg(tui_theme::BORDER_DEFAULT)),
            )
            .fg(tui_theme::TEXT_FG)
            .render(page_area, buf);

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(tui_theme::BORDER_FOCUSED));
        let inner = block.inner(bar_area);
        block.render(bar_area, buf);
        self.host.bar_mut().draw(inner, buf);
    }

    fn should_quit(&self) -> bool {
        self.run_token.is_cancelled()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log = File::create(&args.log_file)
        .with_context(|| format!("creating {}", args.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log))
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bubble_tabbar=debug")),
        )
        .init();

    let mut config = BubbleTabBarConfig::from_path(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(menu) = args.menu {
        config = config.with_menu_resource(menu);
    }
    info!(?config, "starting nav-controller demo");

    let app = NavDemo::new(config, CancellationToken::new())?;
    let app = Tui::new().run(app).await?;
    info!("exited at {}", app.host.nav().current().label);
    Ok(())
}
