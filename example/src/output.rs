use console::style;

const STATUS_WIDTH: usize = 12;

pub fn status(label: &str, message: impl AsRef<str>) {
    eprintln!(
        "{:>width$} {}",
        style(label).green().bold(),
        message.as_ref(),
        width = STATUS_WIDTH
    );
}

pub fn note(message: impl AsRef<str>) {
    eprintln!("{}: {}", style("note").blue().bold(), message.as_ref());
}
