use dealcheck_core::compute_best_deal;
use dealcheck_core::config::{AppConfig, ConfigError, LoadOptions, LocaleConfig};

use crate::commands::CommandResult;

pub fn run(text: &str, marker_override: Option<&str>) -> CommandResult {
    // eval only needs the locale section; a missing credential config must not
    // block a local engine run.
    let locale = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config.locale,
        Err(ConfigError::Validation(message)) if message.contains("chat.") => {
            AppConfig::default().locale
        }
        Err(error) => return CommandResult::failure("eval", "config", error.to_string(), 2),
    };

    run_with_locale(text, marker_override, &locale)
}

pub fn run_with_locale(
    text: &str,
    marker_override: Option<&str>,
    locale: &LocaleConfig,
) -> CommandResult {
    let marker = marker_override.unwrap_or(&locale.currency_marker);

    match compute_best_deal(text, marker, &locale.catalog) {
        Ok(message) => CommandResult::success("eval", message),
        Err(error) => CommandResult::failure("eval", error.class(), error.to_string(), 1),
    }
}

#[cfg(test)]
mod tests {
    use dealcheck_core::config::AppConfig;

    use super::run_with_locale;

    #[test]
    fn eval_prints_the_verdict_for_valid_text() {
        let locale = AppConfig::default().locale;
        let result = run_with_locale("500ml 150円 350ml 128円", None, &locale);

        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("500mlの方が90mlオトク"));
        assert!(result.output.contains("\"status\":\"ok\""));
    }

    #[test]
    fn eval_honors_the_marker_flag() {
        let locale = AppConfig::default().locale;
        let result = run_with_locale("500ml 150yen 350ml 128yen", Some("yen"), &locale);

        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("500ml"));
    }

    #[test]
    fn eval_reports_engine_errors_with_a_class_and_nonzero_exit() {
        let locale = AppConfig::default().locale;
        let result = run_with_locale("nothing to compare", None, &locale);

        assert_eq!(result.exit_code, 1);
        assert!(result.output.contains("no_items_recognized"));
        assert!(result.output.contains("\"status\":\"error\""));
    }
}
