use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use mes_console::app::{execute, AppContext, ConsoleCommand};
use mes_console::kernel::services::adapters::{
    ensure_data_dir, ensure_directory_file, ensure_settings_file, get_directory_path,
    get_session_path, load_settings, FileDirectory, FileStorage,
};
use mes_console::kernel::services::ports::BuiltinScreenLoader;

mod logging;

fn main() -> io::Result<()> {
    let logging = logging::init();

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "settings file not created");
    }
    let settings = load_settings().unwrap_or_default();
    let config = settings.to_config();

    let data_dir = ensure_data_dir()?;
    let directory_path = settings
        .directory_path
        .clone()
        .or_else(get_directory_path)
        .unwrap_or_else(|| data_dir.join("directory.json"));
    let session_path: PathBuf = settings
        .session_path
        .clone()
        .or_else(get_session_path)
        .unwrap_or_else(|| data_dir.join("session.json"));
    ensure_directory_file(&directory_path)?;

    let mut ctx = AppContext::init(
        config,
        Box::new(FileStorage::new(session_path)),
        Arc::new(FileDirectory::new(directory_path)),
        Arc::new(BuiltinScreenLoader),
    )
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "mes-console ('help' for commands)")?;
    if let Some(guard) = &logging {
        writeln!(out, "logs: {}", guard.log_dir().display())?;
    }
    if ctx.state().is_signed_in() {
        let timeout = ctx.state().config.settle_timeout;
        ctx.settle(timeout);
        let reply = execute(&mut ctx, ConsoleCommand::Tabs);
        for line in reply.lines {
            writeln!(out, "{line}")?;
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let command = match ConsoleCommand::parse(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };
        ctx.pump();
        let reply = execute(&mut ctx, command);
        for line in &reply.lines {
            writeln!(out, "{line}")?;
        }
        if reply.quit {
            break;
        }
    }

    ctx.dispose();
    Ok(())
}
