//! 控制台命令：解析一行输入并驱动 AppContext
//!
//! Commands that start async work wait for it with `settle` so each reply
//! reflects the finished state.

use std::fmt;

use super::context::AppContext;
use super::render::{render_menu, render_status, render_tabs};
use crate::kernel::workspace::WorkspaceAction;
use crate::kernel::Action;
use crate::models::{MenuId, ProgramId};

const HELP: &str = "\
login <id> <password>   로그인
logout                  로그아웃
menu                    메뉴 보기
toggle <menu-id>        메뉴 펼치기/접기
open <menu-id>          메뉴 화면 열기
close <tab-id>          탭 닫기
close-others <tab-id>   다른 탭 모두 닫기
close-all               닫을 수 있는 탭 모두 닫기
select <tab-id>         탭 선택
next | prev             다음/이전 탭
tabs                    탭 목록
help                    도움말
quit                    종료";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Login { user: String, password: String },
    Logout,
    Menu,
    Toggle(MenuId),
    Open(MenuId),
    Close(ProgramId),
    CloseOthers(ProgramId),
    CloseAll,
    Select(ProgramId),
    Next,
    Prev,
    Tabs,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Unknown(String),
    MissingArgument(&'static str),
    InvalidMenuId(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Unknown(cmd) => write!(f, "unknown command: {} (try 'help')", cmd),
            ParseError::MissingArgument(what) => write!(f, "missing argument: {}", what),
            ParseError::InvalidMenuId(raw) => write!(f, "invalid menu id: {}", raw),
        }
    }
}

impl std::error::Error for ParseError {}

impl ConsoleCommand {
    /// Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let mut arg = |what: &'static str| words.next().ok_or(ParseError::MissingArgument(what));

        let command = match head {
            "login" => {
                let user = arg("id")?.to_string();
                let password = arg("password")?.to_string();
                ConsoleCommand::Login { user, password }
            }
            "logout" => ConsoleCommand::Logout,
            "menu" => ConsoleCommand::Menu,
            "toggle" => ConsoleCommand::Toggle(parse_menu_id(arg("menu-id")?)?),
            "open" => ConsoleCommand::Open(parse_menu_id(arg("menu-id")?)?),
            "close" => ConsoleCommand::Close(ProgramId::from(arg("tab-id")?)),
            "close-others" => ConsoleCommand::CloseOthers(ProgramId::from(arg("tab-id")?)),
            "close-all" => ConsoleCommand::CloseAll,
            "select" => ConsoleCommand::Select(ProgramId::from(arg("tab-id")?)),
            "next" => ConsoleCommand::Next,
            "prev" => ConsoleCommand::Prev,
            "tabs" => ConsoleCommand::Tabs,
            "help" | "?" => ConsoleCommand::Help,
            "quit" | "exit" => ConsoleCommand::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConsoleCommand::Login { .. } => "login",
            ConsoleCommand::Logout => "logout",
            ConsoleCommand::Menu => "menu",
            ConsoleCommand::Toggle(_) => "toggle",
            ConsoleCommand::Open(_) => "open",
            ConsoleCommand::Close(_) => "close",
            ConsoleCommand::CloseOthers(_) => "close-others",
            ConsoleCommand::CloseAll => "close-all",
            ConsoleCommand::Select(_) => "select",
            ConsoleCommand::Next => "next",
            ConsoleCommand::Prev => "prev",
            ConsoleCommand::Tabs => "tabs",
            ConsoleCommand::Help => "help",
            ConsoleCommand::Quit => "quit",
        }
    }

    fn needs_session(&self) -> bool {
        !matches!(
            self,
            ConsoleCommand::Login { .. }
                | ConsoleCommand::Logout
                | ConsoleCommand::Help
                | ConsoleCommand::Quit
        )
    }
}

fn parse_menu_id(raw: &str) -> Result<MenuId, ParseError> {
    raw.parse::<u32>()
        .map(MenuId::new)
        .map_err(|_| ParseError::InvalidMenuId(raw.to_string()))
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            quit: false,
        }
    }
}

pub fn execute(ctx: &mut AppContext, command: ConsoleCommand) -> Reply {
    tracing::debug!(command = command.name(), "console command");
    if command.needs_session() && !ctx.state().is_signed_in() {
        return Reply::line("로그인이 필요합니다.");
    }

    let mut reply = match command {
        ConsoleCommand::Login { user, password } => match ctx.login(&user, &password) {
            Ok(()) => {
                settle(ctx);
                Reply {
                    lines: vec![render_status(ctx.state()), render_menu(&ctx.state().sidebar)],
                    quit: false,
                }
            }
            Err(e) => Reply::line(e.to_string()),
        },
        ConsoleCommand::Logout => {
            ctx.logout();
            Reply::line(render_status(ctx.state()))
        }
        ConsoleCommand::Menu => Reply::line(render_menu(&ctx.state().sidebar)),
        ConsoleCommand::Toggle(id) => {
            ctx.dispatch(Action::MenuToggle { id });
            Reply::line(render_menu(&ctx.state().sidebar))
        }
        ConsoleCommand::Open(id) => {
            ctx.dispatch(Action::MenuActivate { id });
            settle(ctx);
            Reply::line(render_tabs(&ctx.state().workspace))
        }
        ConsoleCommand::Close(id) => workspace(ctx, WorkspaceAction::Close { id }),
        ConsoleCommand::CloseOthers(id) => workspace(ctx, WorkspaceAction::CloseOthers { id }),
        ConsoleCommand::CloseAll => workspace(ctx, WorkspaceAction::CloseAll),
        ConsoleCommand::Select(id) => workspace(ctx, WorkspaceAction::Select { id }),
        ConsoleCommand::Next => workspace(ctx, WorkspaceAction::Next),
        ConsoleCommand::Prev => workspace(ctx, WorkspaceAction::Prev),
        ConsoleCommand::Tabs => Reply::line(render_tabs(&ctx.state().workspace)),
        ConsoleCommand::Help => Reply::line(HELP),
        ConsoleCommand::Quit => Reply {
            lines: Vec::new(),
            quit: true,
        },
    };

    for notice in ctx.take_notices() {
        reply.lines.push(format!("! {}", notice));
    }
    reply
}

fn settle(ctx: &mut AppContext) {
    let timeout = ctx.state().config.settle_timeout;
    ctx.settle(timeout);
}

fn workspace(ctx: &mut AppContext, action: WorkspaceAction) -> Reply {
    ctx.dispatch(Action::Workspace(action));
    Reply::line(render_tabs(&ctx.state().workspace))
}

#[cfg(test)]
#[path = "../../tests/unit/app/console.rs"]
mod tests;
