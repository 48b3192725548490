use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::algo::{ListAction, QueueAction, SortAlgorithm, StackAction, TraceSource};
use crate::config::Config;
use crate::input::{load_values_file, parse_single, parse_values};
use crate::replay::{shared, ChannelStatus, Replayer, Shared, StatusSink, Timing, TokioPacer};
use crate::session::{SessionState, StructureKind};
use crate::step::Value;
use crate::view::{ArrayView, LinkedView, QueueView, StackView, StructureView};

use super::events::{AppEvent, Prompt, ToolbarItem};
use super::panels::{
    ArrayPanel, FooterLine, LinkedPanel, QueuePanel, StackPanel, StatusBar, Toolbar,
};

const SPEED_STEP_MS: u64 = 50;
const SPEED_MIN_MS: u64 = 50;
const SPEED_MAX_MS: u64 = 1000;

/// Main application state.
///
/// The app owns the session state and one view per structure kind; replays
/// run on spawned tasks against shared handles, so drawing continues while a
/// trace plays out. `replay_running` is the caller side of the one-replay-
/// at-a-time contract; the engine itself does not enforce it.
pub struct App {
    config: Config,
    session: SessionState,
    source: Arc<dyn TraceSource>,
    status_sink: Arc<dyn StatusSink>,
    replayer: Replayer,
    speed_ms: u64,

    array_view: Shared<ArrayView>,
    stack_view: Shared<StackView>,
    queue_view: Shared<QueueView>,
    linked_view: Shared<LinkedView>,

    selected: usize,
    status: String,
    prompt: Option<(Prompt, String)>,
    replay_running: bool,
    should_quit: bool,

    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    status_rx: mpsc::UnboundedReceiver<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_source(config, Arc::new(crate::algo::LocalTraceSource))
    }

    pub fn with_source(config: Config, source: Arc<dyn TraceSource>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (status_tx, status_rx) = mpsc::unbounded_channel();

        let session = SessionState::seeded(&config);
        let status_sink: Arc<dyn StatusSink> = Arc::new(ChannelStatus::new(status_tx));
        let speed_ms = config.speed_ms;
        let replayer = Replayer::new(
            Arc::new(TokioPacer),
            status_sink.clone(),
            Timing::from_millis(speed_ms),
        );

        let array_view = shared(ArrayView::new(&session.snapshot(StructureKind::Array)));
        let stack_view = shared(StackView::new(&session.snapshot(StructureKind::Stack)));
        let queue_view = shared(QueueView::new(&session.snapshot(StructureKind::Queue)));
        let linked_view = shared(LinkedView::new(
            &session.snapshot(StructureKind::LinkedList),
        ));

        Self {
            config,
            session,
            source,
            status_sink,
            replayer,
            speed_ms,
            array_view,
            stack_view,
            queue_view,
            linked_view,
            selected: 0,
            status: "Pick an item from the toolbar".to_string(),
            prompt: None,
            replay_running: false,
            should_quit: false,
            event_tx,
            event_rx,
            status_rx,
        }
    }

    /// Run the application main loop.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        // steady redraws keep mid-replay styling visible
        let mut tick = tokio::time::interval(Duration::from_millis(33));

        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind != KeyEventKind::Release => {
                            self.handle_key(key);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(err)) => return Err(err.into()),
                        None => break,
                    }
                }
                Some(event) = self.event_rx.recv() => self.handle_app_event(event),
                Some(line) = self.status_rx.recv() => self.status = line,
                _ = tick.tick() => {}
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ReplayFinished { kind, message } => {
                self.replay_running = false;
                self.status = message;
                tracing::debug!(kind = kind.display_name(), "replay settled");
            }
            AppEvent::ReplayFailed { kind, message } => {
                self.replay_running = false;
                self.status = format!("Error: {message}");
                tracing::warn!(kind = kind.display_name(), %message, "operation rejected");
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Left => self.select(self.selected.checked_sub(1).unwrap_or(ToolbarItem::ALL.len() - 1)),
            KeyCode::Right | KeyCode::Tab => {
                self.select((self.selected + 1) % ToolbarItem::ALL.len())
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_speed(-(SPEED_STEP_MS as i64)),
            KeyCode::Char('-') => self.adjust_speed(SPEED_STEP_MS as i64),
            KeyCode::Char('v') => self.open_prompt(Prompt::Values),
            KeyCode::Char('f') => self.open_prompt(Prompt::FilePath),
            _ => self.handle_mode_key(key),
        }
    }

    fn handle_mode_key(&mut self, key: KeyEvent) {
        match (self.active_item(), key.code) {
            (ToolbarItem::Sort(algorithm), KeyCode::Enter | KeyCode::Char('s')) => {
                self.start_sort(algorithm);
            }
            (ToolbarItem::Sort(_), KeyCode::Char('r')) => {
                if self.guard_replay() {
                    return;
                }
                self.session.reseed_array(self.config.seed_size);
                self.render_active();
                self.status = "Array updated. Press s to start visualization.".to_string();
            }
            (ToolbarItem::Structure(StructureKind::Stack), KeyCode::Char('p')) => {
                self.open_prompt(Prompt::PushValue);
            }
            (ToolbarItem::Structure(StructureKind::Stack), KeyCode::Char('o')) => {
                self.start_stack(StackAction::Pop);
            }
            (ToolbarItem::Structure(StructureKind::Queue), KeyCode::Char('e')) => {
                self.open_prompt(Prompt::EnqueueValue);
            }
            (ToolbarItem::Structure(StructureKind::Queue), KeyCode::Char('d')) => {
                self.start_queue(QueueAction::Dequeue);
            }
            (ToolbarItem::Structure(StructureKind::LinkedList), KeyCode::Char('i')) => {
                self.open_prompt(Prompt::InsertNode);
            }
            (ToolbarItem::Structure(StructureKind::LinkedList), KeyCode::Char('x')) => {
                self.open_prompt(Prompt::DeleteNode);
            }
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.prompt = None;
            }
            KeyCode::Backspace => {
                if let Some((_, buffer)) = self.prompt.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Enter => {
                if let Some((prompt, buffer)) = self.prompt.take() {
                    self.submit_prompt(prompt, buffer.trim().to_string());
                }
            }
            KeyCode::Char(c) => {
                if let Some((_, buffer)) = self.prompt.as_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn open_prompt(&mut self, prompt: Prompt) {
        if self.guard_replay() {
            return;
        }
        self.prompt = Some((prompt, String::new()));
    }

    fn submit_prompt(&mut self, prompt: Prompt, entry: String) {
        match prompt {
            Prompt::Values => match parse_values(&entry) {
                Ok(values) => self.replace_active(values, "input"),
                Err(err) => self.status = format!("Error: {err}"),
            },
            Prompt::FilePath => {
                if entry.is_empty() {
                    self.status = "Please choose a file first.".to_string();
                    return;
                }
                match load_values_file(&PathBuf::from(&entry)) {
                    Ok(values) => {
                        let loaded = values.len();
                        self.replace_active(values, "file");
                        self.status = format!("Upload successful. {loaded} numbers loaded.");
                    }
                    Err(err) => self.status = format!("Error: {err}"),
                }
            }
            Prompt::PushValue => {
                if entry.is_empty() {
                    self.status = "Enter a value to push.".to_string();
                    return;
                }
                self.start_stack(StackAction::Push(parse_single(&entry)));
            }
            Prompt::EnqueueValue => {
                if entry.is_empty() {
                    self.status = "Enter a value to enqueue.".to_string();
                    return;
                }
                self.start_queue(QueueAction::Enqueue(parse_single(&entry)));
            }
            Prompt::InsertNode => {
                let mut parts = entry.split_whitespace();
                let index = parts.next().and_then(|t| t.parse::<i64>().ok());
                let value = parts.next().map(parse_single);
                match (index, value) {
                    (Some(index), Some(value)) => {
                        self.start_linked(ListAction::InsertAt { index, value });
                    }
                    _ => self.status = "Enter: <index> <value>".to_string(),
                }
            }
            Prompt::DeleteNode => match entry.parse::<i64>() {
                Ok(index) => self.start_linked(ListAction::DeleteAt { index }),
                Err(_) => self.status = "Enter a node index to delete.".to_string(),
            },
        }
    }

    fn active_item(&self) -> ToolbarItem {
        ToolbarItem::ALL[self.selected]
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.render_active();
        match self.active_item() {
            ToolbarItem::Sort(algorithm) => {
                self.status = format!("Sorting mode: {}", algorithm.display_name());
            }
            ToolbarItem::Structure(kind) => {
                self.status = format!("Data Structure mode: {}", kind.display_name());
            }
        }
    }

    /// Rebuild the active view from the session state (mode switches and
    /// manual replacement go through here, never through the sequencer).
    fn render_active(&mut self) {
        let kind = self.active_item().kind();
        let values = self.session.snapshot(kind);
        match kind {
            StructureKind::Array => self.array_view.lock().render(&values),
            StructureKind::Stack => self.stack_view.lock().render(&values),
            StructureKind::Queue => self.queue_view.lock().render(&values),
            StructureKind::LinkedList => self.linked_view.lock().render(&values),
        }
    }

    fn replace_active(&mut self, values: Vec<Value>, origin: &str) {
        if self.guard_replay() {
            return;
        }
        let kind = self.active_item().kind();
        self.session.replace(kind, values);
        self.render_active();
        self.status = format!("Updated {} from {origin}.", kind.display_name());
    }

    /// True (and says so) when a replay is already in flight.
    fn guard_replay(&mut self) -> bool {
        if self.replay_running {
            self.status = "A replay is still running.".to_string();
        }
        self.replay_running
    }

    fn adjust_speed(&mut self, delta_ms: i64) {
        let speed = (self.speed_ms as i64 + delta_ms)
            .clamp(SPEED_MIN_MS as i64, SPEED_MAX_MS as i64) as u64;
        self.speed_ms = speed;
        self.replayer = Replayer::new(
            Arc::new(TokioPacer),
            self.status_sink.clone(),
            Timing::from_millis(speed),
        );
    }

    fn start_sort(&mut self, algorithm: SortAlgorithm) {
        if self.guard_replay() {
            return;
        }
        self.replay_running = true;
        self.status = "Fetching steps...".to_string();

        let array = self.session.snapshot(StructureKind::Array);
        let source = self.source.clone();
        let replayer = self.replayer.clone();
        let view = self.array_view.clone();
        let state = self.session.handle(StructureKind::Array);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            match source.sort(algorithm, &array).await {
                Ok(trace) => {
                    let report = replayer.sort(&view, &state, &trace).await;
                    let _ = tx.send(AppEvent::ReplayFinished {
                        kind: StructureKind::Array,
                        message: format!(
                            "{} complete ({} steps).",
                            algorithm.display_name(),
                            report.steps_applied()
                        ),
                    });
                }
                Err(err) => {
                    let _ = tx.send(AppEvent::ReplayFailed {
                        kind: StructureKind::Array,
                        message: err.to_string(),
                    });
                }
            }
        });
    }

    fn start_stack(&mut self, action: StackAction) {
        if self.guard_replay() {
            return;
        }
        self.replay_running = true;
        let done = match &action {
            StackAction::Push(_) => "Push complete.",
            StackAction::Pop => "Pop complete.",
        };
        self.status = match &action {
            StackAction::Push(_) => "Pushing on stack...".to_string(),
            StackAction::Pop => "Popping from stack...".to_string(),
        };

        let stack = self.session.snapshot(StructureKind::Stack);
        let source = self.source.clone();
        let replayer = self.replayer.clone();
        let view = self.stack_view.clone();
        let state = self.session.handle(StructureKind::Stack);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            match source.stack(&stack, action).await {
                Ok(trace) => {
                    replayer.stack(&view, &state, &trace).await;
                    let _ = tx.send(AppEvent::ReplayFinished {
                        kind: StructureKind::Stack,
                        message: done.to_string(),
                    });
                }
                Err(err) => {
                    let _ = tx.send(AppEvent::ReplayFailed {
                        kind: StructureKind::Stack,
                        message: err.to_string(),
                    });
                }
            }
        });
    }

    fn start_queue(&mut self, action: QueueAction) {
        if self.guard_replay() {
            return;
        }
        self.replay_running = true;
        let done = match &action {
            QueueAction::Enqueue(_) => "Enqueue complete.",
            QueueAction::Dequeue => "Dequeue complete.",
        };
        self.status = match &action {
            QueueAction::Enqueue(_) => "Enqueuing...".to_string(),
            QueueAction::Dequeue => "Dequeuing...".to_string(),
        };

        let queue = self.session.snapshot(StructureKind::Queue);
        let source = self.source.clone();
        let replayer = self.replayer.clone();
        let view = self.queue_view.clone();
        let state = self.session.handle(StructureKind::Queue);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            match source.queue(&queue, action).await {
                Ok(trace) => {
                    replayer.queue(&view, &state, &trace).await;
                    let _ = tx.send(AppEvent::ReplayFinished {
                        kind: StructureKind::Queue,
                        message: done.to_string(),
                    });
                }
                Err(err) => {
                    let _ = tx.send(AppEvent::ReplayFailed {
                        kind: StructureKind::Queue,
                        message: err.to_string(),
                    });
                }
            }
        });
    }

    fn start_linked(&mut self, action: ListAction) {
        if self.guard_replay() {
            return;
        }
        self.replay_running = true;
        let done = match &action {
            ListAction::InsertAt { .. } => "Insert complete.",
            ListAction::DeleteAt { .. } => "Delete complete.",
        };
        self.status = match &action {
            ListAction::InsertAt { .. } => "Inserting node...".to_string(),
            ListAction::DeleteAt { .. } => "Deleting node...".to_string(),
        };

        let list = self.session.snapshot(StructureKind::LinkedList);
        let source = self.source.clone();
        let replayer = self.replayer.clone();
        let view = self.linked_view.clone();
        let state = self.session.handle(StructureKind::LinkedList);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            match source.linked_list(&list, action).await {
                Ok(trace) => {
                    replayer.linked(&view, &state, &trace).await;
                    let _ = tx.send(AppEvent::ReplayFinished {
                        kind: StructureKind::LinkedList,
                        message: done.to_string(),
                    });
                }
                Err(err) => {
                    let _ = tx.send(AppEvent::ReplayFailed {
                        kind: StructureKind::LinkedList,
                        message: err.to_string(),
                    });
                }
            }
        });
    }

    fn hint_text(&self) -> &'static str {
        match self.active_item() {
            ToolbarItem::Sort(_) => {
                " s start · r randomize · v values · f file · ←/→ switch · +/- speed · q quit"
            }
            ToolbarItem::Structure(StructureKind::Stack) => {
                " p push · o pop · v values · f file · ←/→ switch · +/- speed · q quit"
            }
            ToolbarItem::Structure(StructureKind::Queue) => {
                " e enqueue · d dequeue · v values · f file · ←/→ switch · +/- speed · q quit"
            }
            ToolbarItem::Structure(StructureKind::LinkedList) => {
                " i insert · x delete · v values · f file · ←/→ switch · +/- speed · q quit"
            }
            ToolbarItem::Structure(StructureKind::Array) => " ←/→ switch · q quit",
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(f.area());

        f.render_widget(
            Toolbar {
                selected: self.selected,
            },
            chunks[0],
        );

        let canvas = Block::default()
            .borders(Borders::ALL)
            .title(self.active_item().title());
        let inner = canvas.inner(chunks[1]);
        f.render_widget(canvas, chunks[1]);

        match self.active_item().kind() {
            StructureKind::Array => {
                let view = self.array_view.lock();
                f.render_widget(ArrayPanel { view: &view }, inner);
            }
            StructureKind::Stack => {
                let view = self.stack_view.lock();
                f.render_widget(StackPanel { view: &view }, inner);
            }
            StructureKind::Queue => {
                let view = self.queue_view.lock();
                f.render_widget(QueuePanel { view: &view }, inner);
            }
            StructureKind::LinkedList => {
                let view = self.linked_view.lock();
                f.render_widget(LinkedPanel { view: &view }, inner);
            }
        }

        f.render_widget(
            StatusBar {
                status: &self.status,
                speed_ms: self.speed_ms,
                replaying: self.replay_running,
            },
            chunks[2],
        );

        match &self.prompt {
            Some((prompt, buffer)) => {
                let text = format!(" {}: {buffer}▏", prompt.label());
                f.render_widget(
                    FooterLine {
                        text: &text,
                        editing: true,
                    },
                    chunks[3],
                );
            }
            None => {
                f.render_widget(
                    FooterLine {
                        text: self.hint_text(),
                        editing: false,
                    },
                    chunks[3],
                );
            }
        }
    }
}
