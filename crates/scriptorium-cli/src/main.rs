use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use scriptorium_config::Config;
use scriptorium_engine::{
    ContentKind, EnhancementConfig, MarkdownFile, RenderOptions, Renderer, Variant, io,
};
use std::{
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

mod preview;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Preview,
    Html,
}

struct App {
    content_path: PathBuf,
    files: Vec<MarkdownFile>,
    file_list_state: ListState,
    options: RenderOptions,
    renderer: Renderer,
    enhancements: EnhancementConfig,
    view: View,
    current_content: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    fn new(content_path: PathBuf, config: Option<&Config>) -> Result<Self> {
        let files = io::scan_markdown_files(&content_path)?;
        let options = config.map(Config::render_options).unwrap_or_default();
        let enhancements = config
            .map(|c| c.enhancements.clone())
            .unwrap_or_default();

        let mut app = Self {
            content_path,
            files,
            file_list_state: ListState::default(),
            options,
            renderer: Renderer::new(options),
            enhancements,
            view: View::Preview,
            current_content: Vec::new(),
            scroll: 0,
        };

        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Preview => View::Html,
            View::Html => View::Preview,
        };
        self.update_content_for_selection();
    }

    fn toggle_variant(&mut self) {
        let variant = match self.options.variant {
            Variant::Public => Variant::Editor,
            Variant::Editor => Variant::Public,
        };
        self.options = self.options.with_variant(variant);
        self.renderer = Renderer::new(self.options);
        self.update_content_for_selection();
    }

    fn reload(&mut self) {
        self.renderer.clear_caches();
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        self.scroll = 0;
        let Some(file) = self
            .file_list_state
            .selected()
            .and_then(|index| self.files.get(index))
        else {
            return;
        };

        self.current_content = match io::read_file(file.relative_path(), &self.content_path) {
            Ok(raw) => match self.view {
                View::Preview => preview::page_lines(&self.renderer.render_document(&raw)),
                View::Html => self
                    .renderer
                    .render_page_html(&raw, &self.enhancements)
                    .lines()
                    .map(|line| Line::from(line.to_string()))
                    .collect(),
            },
            Err(e) => {
                log::warn!("failed to read {}: {e}", file.relative_path());
                vec![Line::from(format!("Error reading file: {e}"))]
            }
        };
    }

    fn title(&self) -> String {
        let view = match self.view {
            View::Preview => "Preview",
            View::Html => "HTML",
        };
        let selected = self
            .file_list_state
            .selected()
            .and_then(|index| self.files.get(index));
        match selected {
            Some(file) => format!("{view} ({:?}) {}", self.options.variant, file.slug()),
            None => format!("{view} ({:?})", self.options.variant),
        }
    }
}

/// Scriptorium - markdown content previewer.
#[derive(Debug, Parser)]
#[command(name = "scriptorium", version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    /// Content folder to browse (default: `content_path` from the config file).
    content_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print one document as HTML.
    Render(RenderArgs),
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Markdown file, frontmatter included.
    file: PathBuf,

    /// Shorthand for `--variant editor`.
    #[arg(long, conflicts_with = "variant")]
    editor: bool,

    /// Presentation variant: `public` or `editor` (default: from config).
    #[arg(long)]
    variant: Option<Variant>,
}

impl RenderArgs {
    fn variant(&self) -> Option<Variant> {
        if self.editor {
            Some(Variant::Editor)
        } else {
            self.variant
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    match cli.command {
        Some(Command::Render(args)) => render(&args.file, args.variant(), config.as_ref()),
        None => {
            let content_path = cli.content_path;
            let from_config = content_path.is_none();
            let Some(content_path) =
                content_path.or_else(|| config.as_ref().map(|c| c.content_path.clone()))
            else {
                eprintln!("Error: No content path provided and no config file found");
                eprintln!("Usage: scriptorium [content-folder-path]");
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            };

            if let Err(e) = io::validate_content_dir(&content_path) {
                let source = if from_config {
                    format!(" from config file '{}'", config_path.display())
                } else {
                    String::new()
                };
                eprintln!(
                    "Error: Content path '{}'{} is invalid: {e}",
                    content_path.display(),
                    source
                );
                process::exit(1);
            }

            browse(content_path, config.as_ref())
        }
    }
}

fn render(file: &Path, variant: Option<Variant>, config: Option<&Config>) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;

    let mut options = config.map(Config::render_options).unwrap_or_default();
    if let Some(variant) = variant {
        options = options.with_variant(variant);
    }
    let renderer = Renderer::new(options);
    let html = match config {
        Some(config) => renderer.render_page_html(&raw, &config.enhancements),
        None => renderer.render_html(&raw),
    };
    print!("{html}");
    Ok(())
}

fn browse(content_path: PathBuf, config: Option<&Config>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = App::new(content_path, config).and_then(|mut app| run_app(&mut terminal, &mut app));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll = app.scroll.saturating_add(10),
                KeyCode::PageUp => app.scroll = app.scroll.saturating_sub(10),
                KeyCode::Tab => app.toggle_view(),
                KeyCode::Char('v') => app.toggle_variant(),
                KeyCode::Char('r') => app.reload(),
                _ => {}
            }
        }
    }
}

/// File list entry: indented by directory depth, marked by collection.
fn file_label(file: &MarkdownFile) -> String {
    let indent = "  ".repeat(file.relative_path().components().count().saturating_sub(1));
    let icon = match file.kind() {
        ContentKind::Post => "📰",
        ContentKind::Page => "📄",
        ContentKind::Other => "📝",
    };
    format!("{indent}{icon} {}", file.display_name())
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| ListItem::new(Line::from(vec![Span::raw(file_label(file))])))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Files"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Select a file to view its content")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(app.title()))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Select | "),
        Span::raw("Space/PgUp: Scroll | "),
        Span::raw("Tab: Preview/HTML | v: Variant | r: Reload"),
    ]));
    f.render_widget(help, rows[1]);
}
