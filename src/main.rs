mod app;
mod cli;
mod context;
mod error;
mod event;
mod logging;
mod model;
mod storage;
mod store;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use app::App;
use cli::Cli;

/// 启动 TUI 界面
fn run_tui(app: &mut App) -> io::Result<()> {
    // 初始化终端
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    // 运行主循环
    let result = run(&mut terminal, app);

    // 恢复终端
    execute!(io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    result
}

fn main() {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(e) = logging::init(path) {
            eprintln!("taskpad: {}", e);
        }
    }

    let config = storage::config::load_config();
    let mut app = App::new(cli.app_options(&config));

    if let Err(e) = run_tui(&mut app) {
        warn!(error = %e, "terminal error");
        eprintln!("taskpad: {}", error::TaskpadError::from(e));
        std::process::exit(1);
    }

    info!("exited");
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 只在快照或 UI 状态变化后重绘
        if app.take_redraw() {
            terminal.draw(|frame| ui::task_view::render(frame, app))?;
        }

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
