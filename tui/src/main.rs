use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use blitz_core::{
    generate, ExportDocument, Lexicon, PartOfSpeech, Question, QuestionKind, QuizMode, Session,
    Srs, Verdict, WordEntry, WordStatus,
};
use chrono::{DateTime, Duration, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use directories::ProjectDirs;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Terminal;
use serde::{Deserialize, Serialize};

mod store;
use crate::store::BoxedStore;

const EXPORT_FILE: &str = "VocabSave.json";

fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    let data_dir = ProjectDirs::from("com", "blitzvocab", "Blitz Vocab")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"));
    fs::create_dir_all(&data_dir)?;

    let config = load_config(&data_dir.join("config.toml"))?;
    let words = load_vocab(&data_dir.join("vocab.json"))?;
    let lexicon = load_lexicon(&data_dir.join("lexicon.json"));

    let backend_store = store::open_backend(&data_dir)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    let mut srs = Srs::new(backend_store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(words, lexicon, config.session, data_dir);
    app.refresh_menu(&srs);

    let res = run_app(&mut terminal, &mut srs, &mut app);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    srs: &mut Srs<BoxedStore>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;
        if let Event::Key(key) = event::read()? {
            if handle_key(srs, app, key)? {
                return Ok(());
            }
        }
    }
}

fn handle_key(srs: &mut Srs<BoxedStore>, app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }

    match app.mode {
        Mode::Menu => handle_menu_key(srs, app, key),
        Mode::Session => handle_session_key(srs, app, key),
        Mode::Results => handle_results_key(srs, app, key),
        Mode::Confirm => handle_confirm_key(srs, app, key),
        Mode::Message => {
            app.message = None;
            app.go_menu(srs);
            Ok(false)
        }
    }
}

fn handle_menu_key(srs: &mut Srs<BoxedStore>, app: &mut App, key: KeyEvent) -> io::Result<bool> {
    match key.code {
        KeyCode::Char('q') => Ok(true),
        KeyCode::Char('s') => {
            let words = app.all_words.clone();
            let mode = app.default_mode();
            start_session(app, srs, words, mode);
            Ok(false)
        }
        KeyCode::Char('e') => {
            let words = app.all_words.clone();
            start_session(app, srs, words, QuizMode::Exposure);
            Ok(false)
        }
        KeyCode::Char('d') => {
            let now = Utc::now();
            let due: Vec<WordEntry> = app
                .all_words
                .iter()
                .filter(|w| srs.status(&w.word, now) == WordStatus::Due)
                .cloned()
                .collect();
            if due.is_empty() {
                app.set_message("Nothing due right now".to_string());
                app.mode = Mode::Message;
            } else {
                start_session(app, srs, due, QuizMode::DefinitionOnly);
            }
            Ok(false)
        }
        KeyCode::Char('x') => {
            export_store(srs, app);
            Ok(false)
        }
        KeyCode::Char('i') => {
            import_store(srs, app);
            Ok(false)
        }
        KeyCode::Char('r') => {
            app.confirm_message = Some(
                "WARNING: Reset ALL review progress? This cannot be undone. (y/n)".to_string(),
            );
            app.mode = Mode::Confirm;
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn handle_session_key(srs: &mut Srs<BoxedStore>, app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if key.code == KeyCode::Esc {
        app.session = None;
        app.question = None;
        app.go_menu(srs);
        return Ok(false);
    }

    // A feedback strip is showing: any key moves on.
    if app.feedback.is_some() {
        app.advance_and_load();
        return Ok(false);
    }

    let Some(question) = app.question.clone() else {
        return Ok(false);
    };

    if question.kind == QuestionKind::Flashcard {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter if !app.revealed => {
                app.revealed = true;
            }
            KeyCode::Char('y') | KeyCode::Char('k') if app.revealed => {
                grade_current(srs, app, &question, true);
                app.advance_and_load();
            }
            KeyCode::Char('n') | KeyCode::Char('f') if app.revealed => {
                grade_current(srs, app, &question, false);
                app.advance_and_load();
            }
            _ => {}
        }
        return Ok(false);
    }

    if let Some(choice) = answer_index(key.code) {
        if let Some(option) = question.options.get(choice) {
            let correct = *option == question.answer;
            grade_current(srs, app, &question, correct);
        }
    }
    Ok(false)
}

fn handle_results_key(srs: &mut Srs<BoxedStore>, app: &mut App, key: KeyEvent) -> io::Result<bool> {
    match key.code {
        KeyCode::Char('r') => {
            let missed: Vec<WordEntry> = app
                .session
                .as_ref()
                .map(|s| {
                    app.session_words
                        .iter()
                        .filter(|w| s.wrong_words().contains(&w.word))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();
            if missed.is_empty() {
                app.go_menu(srs);
            } else {
                start_session(app, srs, missed, QuizMode::Production);
            }
            Ok(false)
        }
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => {
            app.session = None;
            app.go_menu(srs);
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn handle_confirm_key(srs: &mut Srs<BoxedStore>, app: &mut App, key: KeyEvent) -> io::Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.confirm_message = None;
            match srs.reset() {
                Ok(()) => app.set_message("Review progress cleared".to_string()),
                Err(err) => app.set_message(format!("Reset failed: {err}")),
            }
            app.mode = Mode::Message;
            Ok(false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.confirm_message = None;
            app.go_menu(srs);
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn answer_index(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::Char('a') | KeyCode::Char('1') => Some(0),
        KeyCode::Char('b') | KeyCode::Char('2') => Some(1),
        KeyCode::Char('c') | KeyCode::Char('3') => Some(2),
        KeyCode::Char('d') | KeyCode::Char('4') => Some(3),
        _ => None,
    }
}

fn start_session(app: &mut App, srs: &Srs<BoxedStore>, words: Vec<WordEntry>, mode: QuizMode) {
    let now = Utc::now();
    let statuses: Vec<WordStatus> = words.iter().map(|w| srs.status(&w.word, now)).collect();
    let mut rng = rand::thread_rng();
    let mut session = Session::new(&words, &statuses, mode, &mut rng);
    session.limit(app.settings.max_words);

    app.session_words = words;
    app.session = Some(session);
    app.feedback = None;
    app.revealed = false;
    app.mode = Mode::Session;
    app.load_question();
}

fn grade_current(srs: &mut Srs<BoxedStore>, app: &mut App, question: &Question, correct: bool) {
    if let Err(err) = srs.grade(&question.word, correct, Utc::now()) {
        store::log_error(&err.to_string());
        app.set_message(format!("Failed to save progress: {err}"));
        app.mode = Mode::Message;
        return;
    }
    if let Some(session) = app.session.as_mut() {
        session.record(&question.word, correct);
    }
    if question.kind != QuestionKind::Flashcard {
        let meaning = app
            .session_words
            .iter()
            .find(|w| w.word == question.word)
            .map(|w| w.meaning.clone())
            .unwrap_or_default();
        app.feedback = Some(Feedback {
            correct,
            answer: question.answer.clone(),
            meaning,
        });
    }
}

fn export_store(srs: &Srs<BoxedStore>, app: &mut App) {
    let doc = srs.export(Utc::now());
    let path = app.data_dir.join(EXPORT_FILE);
    let result = serde_json::to_string_pretty(&doc)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
        .and_then(|json| fs::write(&path, json));
    match result {
        Ok(()) => app.set_message(format!(
            "Exported {} words to {}",
            doc.records.len(),
            path.display()
        )),
        Err(err) => app.set_message(format!("Export failed: {err}")),
    }
    app.mode = Mode::Message;
}

fn import_store(srs: &mut Srs<BoxedStore>, app: &mut App) {
    let path = app.data_dir.join(EXPORT_FILE);
    let parsed: Result<ExportDocument, String> = fs::read_to_string(&path)
        .map_err(|err| err.to_string())
        .and_then(|content| serde_json::from_str(&content).map_err(|err| err.to_string()));
    match parsed {
        Ok(doc) => match srs.import(&doc) {
            Ok(count) => app.set_message(format!("Restored {count} words from {EXPORT_FILE}")),
            Err(err) => app.set_message(format!("Import failed: {err}")),
        },
        Err(err) => app.set_message(format!("Import failed ({}): {err}", path.display())),
    }
    app.mode = Mode::Message;
}

// ── app state ────────────────────────────────────────────────────────

enum Mode {
    Menu,
    Session,
    Results,
    Confirm,
    Message,
}

struct Feedback {
    correct: bool,
    answer: String,
    meaning: String,
}

#[derive(Default)]
struct MenuStats {
    tracked: usize,
    due: usize,
    next_review: Option<DateTime<Utc>>,
}

struct App {
    mode: Mode,
    all_words: Vec<WordEntry>,
    session_words: Vec<WordEntry>,
    lexicon: Lexicon,
    settings: SessionSettings,
    session: Option<Session>,
    question: Option<Question>,
    revealed: bool,
    feedback: Option<Feedback>,
    message: Option<String>,
    confirm_message: Option<String>,
    menu_stats: MenuStats,
    data_dir: PathBuf,
}

impl App {
    fn new(
        all_words: Vec<WordEntry>,
        lexicon: Lexicon,
        settings: SessionSettings,
        data_dir: PathBuf,
    ) -> Self {
        Self {
            mode: Mode::Menu,
            all_words,
            session_words: Vec::new(),
            lexicon,
            settings,
            session: None,
            question: None,
            revealed: false,
            feedback: None,
            message: None,
            confirm_message: None,
            menu_stats: MenuStats::default(),
            data_dir,
        }
    }

    fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    fn default_mode(&self) -> QuizMode {
        match self.settings.mode.as_str() {
            "exposure" => QuizMode::Exposure,
            "definition" => QuizMode::DefinitionOnly,
            _ => QuizMode::Production,
        }
    }

    fn go_menu(&mut self, srs: &Srs<BoxedStore>) {
        self.refresh_menu(srs);
        self.mode = Mode::Menu;
    }

    fn refresh_menu(&mut self, srs: &Srs<BoxedStore>) {
        let now = Utc::now();
        let words: Vec<&str> = self.all_words.iter().map(|w| w.word.as_str()).collect();
        self.menu_stats = MenuStats {
            tracked: srs.records().len(),
            due: srs.count_due(words.iter().copied(), now),
            next_review: srs.next_review_after(words.iter().copied(), now),
        };
    }

    fn load_question(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        match session.current() {
            Some(idx) => {
                let target = &self.session_words[idx];
                let mut rng = rand::thread_rng();
                self.question = Some(generate(
                    target,
                    &self.session_words,
                    session.mode,
                    &self.lexicon,
                    &mut rng,
                ));
                self.revealed = false;
                self.feedback = None;
            }
            None => {
                self.question = None;
                self.mode = Mode::Results;
            }
        }
    }

    fn advance_and_load(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.advance();
        }
        self.load_question();
    }
}

// ── rendering ────────────────────────────────────────────────────────

fn ui(frame: &mut ratatui::Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(frame.size());

    match app.mode {
        Mode::Menu => frame.render_widget(render_menu(app), chunks[0]),
        Mode::Session => frame.render_widget(render_session(app), chunks[0]),
        Mode::Results => frame.render_widget(render_results(app), chunks[0]),
        Mode::Confirm => frame.render_widget(render_confirm(app), chunks[0]),
        Mode::Message => frame.render_widget(render_message(app), chunks[0]),
    }
    frame.render_widget(render_footer(app), chunks[1]);
}

fn render_menu(app: &App) -> Paragraph<'_> {
    let stats = &app.menu_stats;
    let mut text = Text::default();
    text.lines.push(Line::from(Span::styled(
        "Blitz Vocab",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    text.lines.push(Line::from(""));
    text.lines
        .push(Line::from(format!("{} words loaded", app.all_words.len())));
    text.lines
        .push(Line::from(format!("{} words studied", stats.tracked)));
    if stats.due > 0 {
        text.lines.push(Line::from(Span::styled(
            format!("{} due for review", stats.due),
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(next) = stats.next_review {
        text.lines.push(Line::from(format!(
            "nothing due · next review {}",
            format_rel_time(next, Utc::now())
        )));
    }
    text.lines.push(Line::from(""));
    text.lines.push(Line::from("s - start session"));
    text.lines.push(Line::from("e - exposure session"));
    text.lines.push(Line::from("d - review due words"));
    text.lines.push(Line::from("x - export progress"));
    text.lines.push(Line::from("i - import progress"));
    text.lines.push(Line::from("r - reset progress"));
    text.lines.push(Line::from("q - quit"));

    Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Menu"))
        .wrap(Wrap { trim: true })
}

fn render_session(app: &App) -> Paragraph<'_> {
    let mut text = Text::default();
    if let Some(session) = &app.session {
        let (answered, total) = session.progress();
        let (correct, wrong) = session.tally();
        text.lines.push(Line::from(format!(
            "{answered}/{total}   correct {correct} · wrong {wrong}"
        )));
        text.lines.push(Line::from(""));
    }

    if let Some(question) = &app.question {
        text.lines.push(Line::from(Span::styled(
            kind_label(question.kind),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        text.lines.push(Line::from(""));

        if question.kind == QuestionKind::Flashcard {
            text.lines.push(Line::from(Span::styled(
                question.word.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            if !question.prompt.is_empty() {
                text.lines.push(Line::from(format!("\"{}\"", question.prompt)));
            }
            text.lines.push(Line::from(""));
            if app.revealed {
                text.lines.push(Line::from(Span::styled(
                    question.answer.clone(),
                    Style::default().fg(Color::Green),
                )));
                text.lines.push(Line::from(""));
                text.lines.push(Line::from("y - knew it    n - forgot"));
            } else {
                text.lines.push(Line::from("space - reveal meaning"));
            }
        } else {
            text.lines.push(Line::from(question.prompt.clone()));
            text.lines.push(Line::from(""));
            let keys = ["a", "b", "c", "d"];
            for (i, option) in question.options.iter().enumerate() {
                text.lines
                    .push(Line::from(format!("{}) {option}", keys[i])));
            }
        }
    }

    if let Some(feedback) = &app.feedback {
        text.lines.push(Line::from(""));
        if feedback.correct {
            text.lines.push(Line::from(Span::styled(
                "correct",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
        } else {
            text.lines.push(Line::from(Span::styled(
                format!("wrong, answer: {}", feedback.answer),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            if !feedback.meaning.is_empty() {
                text.lines.push(Line::from(feedback.meaning.clone()));
            }
        }
        text.lines.push(Line::from("press any key to continue"));
    }

    Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Session"))
        .wrap(Wrap { trim: false })
}

fn render_results(app: &App) -> Paragraph<'_> {
    let mut text = Text::default();
    if let Some(session) = &app.session {
        let (correct, wrong) = session.tally();
        let verdict = match session.verdict() {
            Verdict::Strong => "Solid. Strong session, keep the pace.",
            Verdict::Decent => "Decent. Drill the missed ones.",
            Verdict::NeedsRetry => "Tough round. Retry the missed words.",
        };
        text.lines.push(Line::from(Span::styled(
            format!("{}% correct", session.accuracy()),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.lines
            .push(Line::from(format!("correct {correct} · wrong {wrong}")));
        text.lines.push(Line::from(verdict));
        if !session.wrong_words().is_empty() {
            text.lines.push(Line::from(""));
            text.lines.push(Line::from(format!(
                "missed: {}",
                session.wrong_words().join(", ")
            )));
        }
    }
    Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .wrap(Wrap { trim: true })
}

fn render_confirm(app: &App) -> Paragraph<'_> {
    let message = app.confirm_message.as_deref().unwrap_or("");
    Paragraph::new(Text::from(Line::from(Span::styled(
        message,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))))
    .block(Block::default().borders(Borders::ALL).title("Confirm"))
    .wrap(Wrap { trim: true })
}

fn render_message(app: &App) -> Paragraph<'_> {
    let message = app.message.as_deref().unwrap_or("");
    Paragraph::new(Text::from(Line::from(message)))
        .block(Block::default().borders(Borders::ALL).title("Info"))
        .wrap(Wrap { trim: true })
}

fn render_footer(app: &App) -> Paragraph<'_> {
    let hint = match app.mode {
        Mode::Menu => "s/e/d session · x/i save · r reset · q quit",
        Mode::Session => "a-d or 1-4 answer · space reveal · esc back",
        Mode::Results => "r retry missed · enter menu",
        Mode::Confirm => "y confirm · n cancel",
        Mode::Message => "any key to continue",
    };
    Paragraph::new(Text::from(Line::from(hint)))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true })
}

fn kind_label(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::Flashcard => "FLASHCARD",
        QuestionKind::MeaningToWord => "MEANING → WORD",
        QuestionKind::Antonym => "ANTONYM",
        QuestionKind::Collocation => "COLLOCATION",
        QuestionKind::FillIn => "FILL IN",
        QuestionKind::Connotation => "CONNOTATION",
        QuestionKind::WordForm => "WORD FORM",
    }
}

fn format_rel_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = ts - now;
    if diff <= Duration::zero() {
        return "now".to_string();
    }
    if diff.num_minutes() < 60 {
        format!("in {}m", diff.num_minutes().max(1))
    } else if diff.num_hours() < 24 {
        format!("in {}h", diff.num_hours())
    } else {
        format!("in {}d", diff.num_days())
    }
}

// ── configuration and data files ─────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionSettings {
    mode: String,
    max_words: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            mode: "production".to_string(),
            max_words: 20,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    session: SessionSettings,
}

fn load_config(path: &Path) -> io::Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: ConfigFile = toml::from_str(&content)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        Ok(cfg)
    } else {
        let cfg = ConfigFile {
            session: SessionSettings::default(),
        };
        let content = toml::to_string_pretty(&cfg)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        fs::write(path, content)?;
        Ok(cfg)
    }
}

fn load_vocab(path: &Path) -> io::Result<Vec<WordEntry>> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|err| io::Error::new(io::ErrorKind::Other, err))
    } else {
        let words = starter_vocab();
        let content = serde_json::to_string_pretty(&words)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        fs::write(path, content)?;
        Ok(words)
    }
}

fn load_lexicon(path: &Path) -> Lexicon {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_json::from_str(&content).ok())
        .unwrap_or_default()
}

/// Seed list written on first run so the binary has something to drill.
fn starter_vocab() -> Vec<WordEntry> {
    let mut words = Vec::new();

    let mut entry = WordEntry::new(
        "economic growth",
        "an increase in the output of an economy",
        PartOfSpeech::Noun,
    );
    entry.example = Some("Rapid economic growth lifted millions out of poverty.".to_string());
    entry.collocation = Some("sustained economic growth".to_string());
    entry.antonym = Some("recession".to_string());
    words.push(entry);

    let mut entry = WordEntry::new(
        "detrimental",
        "harmful to something or someone",
        PartOfSpeech::Adjective,
    );
    entry.example = Some("Excessive screen time can be detrimental to sleep.".to_string());
    entry.antonym = Some("beneficial".to_string());
    words.push(entry);

    let mut entry = WordEntry::new("decide", "to make a choice", PartOfSpeech::Verb);
    entry.example = Some("Voters will decide the matter next spring.".to_string());
    entry.forms.insert(PartOfSpeech::Verb, "decide".to_string());
    entry.forms.insert(PartOfSpeech::Noun, "decision".to_string());
    entry
        .forms
        .insert(PartOfSpeech::Adjective, "decisive".to_string());
    entry
        .forms
        .insert(PartOfSpeech::Adverb, "decisively".to_string());
    words.push(entry);

    let mut entry = WordEntry::new(
        "undermine",
        "to weaken something gradually",
        PartOfSpeech::Verb,
    );
    entry.example = Some("Constant criticism can undermine confidence.".to_string());
    entry.collocation = Some("severely undermine trust".to_string());
    entry.antonym = Some("reinforce".to_string());
    words.push(entry);

    let mut entry = WordEntry::new(
        "resilient",
        "able to recover quickly from setbacks",
        PartOfSpeech::Adjective,
    );
    entry.example = Some("The resilient community rebuilt within a year.".to_string());
    entry.antonym = Some("fragile".to_string());
    words.push(entry);

    let mut entry = WordEntry::new(
        "scarcity",
        "a shortage of something needed",
        PartOfSpeech::Noun,
    );
    entry.example = Some("Water scarcity shaped the region's politics.".to_string());
    entry.antonym = Some("abundance".to_string());
    words.push(entry);

    let mut entry = WordEntry::new(
        "thrive",
        "to grow or develop very well",
        PartOfSpeech::Verb,
    );
    entry.example = Some("Small businesses thrive where rents stay low.".to_string());
    entry.antonym = Some("languish".to_string());
    words.push(entry);

    let mut entry = WordEntry::new(
        "allocate",
        "to distribute resources for a purpose",
        PartOfSpeech::Verb,
    );
    entry.example = Some("The council will allocate funds to repair the bridge.".to_string());
    entry.collocation = Some("allocate resources efficiently".to_string());
    words.push(entry);

    words
}
