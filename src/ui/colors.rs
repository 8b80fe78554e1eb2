use colored::{Color, Colorize};

/// 状态行的符号与颜色
#[derive(Clone, Copy)]
enum Status {
    Success,
    Error,
    Warning,
    Info,
}

impl Status {
    fn symbol(self) -> &'static str {
        match self {
            Status::Success => "✓",
            Status::Error => "✗",
            Status::Warning => "⚠",
            Status::Info => "ℹ",
        }
    }

    fn color(self) -> Color {
        match self {
            Status::Success => Color::Green,
            Status::Error => Color::Red,
            Status::Warning => Color::Yellow,
            Status::Info => Color::Blue,
        }
    }
}

fn status_line(status: Status, msg: &str, colored: bool) -> String {
    if !colored {
        return format!("{} {}", status.symbol(), msg);
    }
    let color = status.color();
    format!(
        "{} {}",
        status.symbol().color(color).bold(),
        msg.color(color)
    )
}

/// 成功消息（stdout）
pub fn success(msg: &str, colored: bool) {
    println!("{}", status_line(Status::Success, msg, colored));
}

/// 错误消息（stderr）
pub fn error(msg: &str, colored: bool) {
    eprintln!("{}", status_line(Status::Error, msg, colored));
}

/// 警告消息（stderr）
pub fn warning(msg: &str, colored: bool) {
    eprintln!("{}", status_line(Status::Warning, msg, colored));
}

/// 信息行，由调用方决定输出位置
pub fn info(msg: &str, colored: bool) -> String {
    status_line(Status::Info, msg, colored)
}

/// Progress line such as `[2/3] Generating commit message...`
pub fn step(step: &str, msg: &str, colored: bool) {
    let tag = format!("[{}]", step);
    if colored {
        println!("{} {}", tag.bright_black().bold(), msg.bright_black());
    } else {
        println!("{} {}", tag, msg);
    }
}

/// Formats the committed message block shown after a successful commit
pub fn format_commit_message(message: &str, colored: bool) -> String {
    let header = "Successfully committed changes with message:";
    if colored {
        format!("{}\n{}", header.green().bold(), message.cyan())
    } else {
        format!("{}\n{}", header, message)
    }
}
