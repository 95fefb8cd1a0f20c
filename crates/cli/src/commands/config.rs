use dealcheck_core::config::{AppConfig, LoadOptions};
use secrecy::ExposeSecret;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];

    lines.push(render_line(
        "chat.channel_secret",
        &redact_token(config.chat.channel_secret.expose_secret()),
    ));
    lines.push(render_line(
        "chat.channel_token",
        &redact_token(config.chat.channel_token.expose_secret()),
    ));
    lines.push(render_line("locale.currency_marker", &config.locale.currency_marker));
    lines.push(render_line("locale.advantage_two", &config.locale.catalog.advantage_two));
    lines.push(render_line("locale.advantage_many", &config.locale.catalog.advantage_many));
    lines.push(render_line("locale.loss_clause", &config.locale.catalog.loss_clause));
    lines.push(render_line("locale.fallback", &config.locale.catalog.fallback));
    lines.push(render_line("logging.level", &config.logging.level));
    lines.push(render_line("logging.format", &format!("{:?}", config.logging.format)));

    lines.join("\n")
}

fn render_line(key: &str, value: &str) -> String {
    format!("  {key} = {value}")
}

fn redact_token(token: &str) -> String {
    if token.is_empty() {
        return "<unset>".to_string();
    }
    if token.chars().count() <= 4 {
        return "****".to_string();
    }
    let prefix: String = token.chars().take(4).collect();
    format!("{prefix}****")
}
