use std::io;
use std::time::Duration;

use colordoku_core::{Difficulty, GeneratedPuzzle, generate};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures_util::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::game::{Game, GameState};
use crate::{save, ui};

const TOAST_DURATION: Duration = Duration::from_secs(3);

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async_run())
}

async fn async_run() -> Result<(), Box<dyn std::error::Error>> {
    // Restore the terminal even if we panic mid-draw.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = Game::new();

    let result = run_loop(&mut terminal, &mut game).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Message from a generation task: request number plus the result.
type GenResult = (u64, GeneratedPuzzle);

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut Game,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut event_stream = EventStream::new();
    let tick_rate = Duration::from_millis(250);
    let (gen_tx, mut gen_rx) = mpsc::unbounded_channel::<GenResult>();

    // Resume a saved game if one parses; otherwise start fresh at the
    // default difficulty.
    match save::load() {
        Some(saved) => game.restore(saved),
        None => spawn_generation(game, Difficulty::default(), &gen_tx),
    }

    loop {
        terminal.draw(|f| ui::draw(f, game))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(Event::Key(key))) = maybe_event {
                    // Only handle Press (Windows sends Press+Release).
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key(game, key, &gen_tx) {
                        if game.state == GameState::Playing || game.state == GameState::Paused {
                            let _ = save::save(&game.to_snapshot());
                        }
                        return Ok(());
                    }
                }
            }
            result = gen_rx.recv() => {
                if let Some((seq, generated)) = result {
                    game.install_puzzle(generated, seq);
                }
            }
            // Tick so the timer redraws and toasts expire.
            _ = tokio::time::sleep(tick_rate) => {}
        }

        if game
            .toast
            .as_ref()
            .is_some_and(|t| t.shown_at.elapsed() > TOAST_DURATION)
        {
            game.toast = None;
        }

        if game.dirty {
            game.dirty = false;
            match game.state {
                GameState::Playing => {
                    let _ = save::save(&game.to_snapshot());
                }
                // A finished game has nothing to resume.
                GameState::Won => save::clear(),
                _ => {}
            }
        }
    }
}

/// Kick off puzzle generation off the event loop so a "generating" frame
/// renders first. A newer request supersedes an in-flight one: the stale
/// task still finishes, but its result is dropped by the sequence check.
fn spawn_generation(game: &mut Game, difficulty: Difficulty, tx: &mpsc::UnboundedSender<GenResult>) {
    let seq = game.begin_generation(difficulty);
    let tx = tx.clone();
    tokio::task::spawn_blocking(move || {
        let generated = generate(difficulty);
        let _ = tx.send((seq, generated));
    });
}

/// Handle a key event. Returns true if the app should quit.
fn handle_key(game: &mut Game, key: KeyEvent, gen_tx: &mpsc::UnboundedSender<GenResult>) -> bool {
    match game.state {
        GameState::Menu => handle_menu_key(game, key, gen_tx),
        GameState::Generating => handle_generating_key(game, key, gen_tx),
        GameState::Playing => handle_playing_key(game, key, gen_tx),
        GameState::Paused => handle_paused_key(game, key),
        GameState::Won => handle_won_key(game, key),
    }
}

fn handle_menu_key(game: &mut Game, key: KeyEvent, gen_tx: &mpsc::UnboundedSender<GenResult>) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Left => {
            game.difficulty = game.difficulty.prev();
        }
        KeyCode::Down | KeyCode::Right => {
            game.difficulty = game.difficulty.next();
        }
        KeyCode::Enter => {
            save::clear();
            spawn_generation(game, game.difficulty, gen_tx);
        }
        KeyCode::Char('q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}

fn handle_generating_key(
    game: &mut Game,
    key: KeyEvent,
    gen_tx: &mpsc::UnboundedSender<GenResult>,
) -> bool {
    match key.code {
        // Restart generation at another difficulty; the in-flight request
        // is superseded.
        KeyCode::Up | KeyCode::Left => {
            spawn_generation(game, game.difficulty.prev(), gen_tx);
        }
        KeyCode::Down | KeyCode::Right => {
            spawn_generation(game, game.difficulty.next(), gen_tx);
        }
        KeyCode::Esc => {
            // Back to the menu; any result that lands later is dropped.
            game.state = GameState::Menu;
            game.generation_seq += 1;
        }
        KeyCode::Char('q') => return true,
        _ => {}
    }
    false
}

fn handle_playing_key(
    game: &mut Game,
    key: KeyEvent,
    gen_tx: &mpsc::UnboundedSender<GenResult>,
) -> bool {
    if game.show_quit_confirm {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
            _ => {
                game.show_quit_confirm = false;
            }
        }
        return false;
    }

    match key.code {
        KeyCode::Up => game.move_cursor(-1, 0),
        KeyCode::Down => game.move_cursor(1, 0),
        KeyCode::Left => game.move_cursor(0, -1),
        KeyCode::Right => game.move_cursor(0, 1),
        KeyCode::Delete | KeyCode::Backspace => game.erase(),
        KeyCode::Esc => {
            game.show_quit_confirm = true;
        }
        KeyCode::Char(c) => return handle_playing_char(game, c, key.modifiers, gen_tx),
        _ => {}
    }
    false
}

fn handle_playing_char(
    game: &mut Game,
    c: char,
    modifiers: KeyModifiers,
    gen_tx: &mpsc::UnboundedSender<GenResult>,
) -> bool {
    match c {
        // Colors are keyed 1-9.
        '1'..='9' => game.place_color(c as u8 - b'0'),
        '0' => game.erase(),
        'h' | 'H' => game.use_hint(),
        'c' | 'C' => game.check_board(),
        ' ' => game.toggle_pause(),
        // New game: abandon the current one.
        'n' if modifiers.is_empty() => {
            save::clear();
            spawn_generation(game, game.difficulty, gen_tx);
        }
        'q' | 'Q' => {
            game.show_quit_confirm = true;
        }
        _ => {}
    }
    false
}

fn handle_paused_key(game: &mut Game, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Esc | KeyCode::Enter => game.toggle_pause(),
        KeyCode::Char('q') => return true,
        _ => {}
    }
    false
}

fn handle_won_key(game: &mut Game, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Char('n') => {
            game.state = GameState::Menu;
        }
        KeyCode::Char('q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}
