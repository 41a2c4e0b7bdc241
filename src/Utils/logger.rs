use chrono::Local;
use log::{info, warn};
use simplelog::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Maps a loglevel setting to a filter; "off" and "none" mean no logging at all.
pub fn parse_loglevel(loglevel: &str) -> Result<Option<LevelFilter>, String> {
    let level = match loglevel.trim().to_lowercase().as_str() {
        "off" | "none" => return Ok(None),
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        other => {
            return Err(format!(
                "loglevel must be trace, debug, info, warn, error or off, got '{}'",
                other
            ));
        }
    };
    Ok(Some(level))
}

/// Starts terminal logging and, if asked, a copy into log_<date>_<time>.txt.
///
/// Default level is info. A logger that is already installed is kept as is.
pub fn init_logger(loglevel: Option<&str>, log_to_file: bool) -> Result<(), String> {
    let log_dir = if log_to_file { Some(Path::new(".")) } else { None };
    start_logging(loglevel, log_dir)
}

fn start_logging(loglevel: Option<&str>, log_dir: Option<&Path>) -> Result<(), String> {
    let log_option = match loglevel {
        Some(level) => match parse_loglevel(level)? {
            Some(filter) => filter,
            None => return Ok(()),
        },
        None => LevelFilter::Info,
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    let mut log_path: Option<PathBuf> = None;
    if let Some(dir) = log_dir {
        let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let path = dir.join(format!("log_{}.txt", date_and_time));
        let file = File::create(&path)
            .map_err(|e| format!("cannot create {}: {}", path.display(), e))?;
        loggers.push(WriteLogger::new(log_option, Config::default(), file));
        log_path = Some(path);
    }
    match CombinedLogger::init(loggers) {
        Ok(()) => {
            info!("Program started with loglevel: {}", log_option);
            Ok(())
        }
        Err(_) => {
            // the installed logger stays, the new file would stay empty
            if let Some(path) = log_path {
                warn!(
                    "a logger is already running, not writing to {}",
                    path.display()
                );
                let _ = fs::remove_file(&path);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_loglevel() {
        assert_eq!(parse_loglevel("debug"), Ok(Some(LevelFilter::Debug)));
        assert_eq!(parse_loglevel(" WARN "), Ok(Some(LevelFilter::Warn)));
        assert_eq!(parse_loglevel("off"), Ok(None));
        assert_eq!(parse_loglevel("none"), Ok(None));
        assert!(parse_loglevel("verbose").is_err());
    }

    #[test]
    fn test_init_logger_twice_is_fine() {
        assert!(init_logger(Some("info"), false).is_ok());
        assert!(init_logger(None, false).is_ok());
        assert!(init_logger(Some("off"), false).is_ok());
        assert!(init_logger(Some("loud"), false).is_err());
    }

    #[test]
    fn test_no_log_file_left_when_logger_is_running() {
        init_logger(Some("info"), false).unwrap();
        let dir = tempfile::tempdir().unwrap();
        assert!(start_logging(Some("debug"), Some(dir.path())).is_ok());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
