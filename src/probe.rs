use std::io::IsTerminal;

use indicatif::ProgressBar;

/// Sentinel appended to the box list so the user can always point at a
/// box that isn't installed locally.
pub const OTHER_BOX: &str = "Other";

/// Choice lists gathered from the local `vagrant` and `knife` tools.
///
/// The questionnaire only ever sees this struct, so tests build one
/// directly instead of shelling out.
pub struct ProbedOptions {
    pub boxes: Vec<String>,
    pub roles: Vec<String>,
    pub environments: Vec<String>,
}

/// Run all three probes and return the assembled choice lists.
pub async fn probe_all() -> ProbedOptions {
    let use_spinner = std::io::stderr().is_terminal();

    let spinner = if use_spinner {
        let s = ProgressBar::new_spinner();
        s.set_message("Asking vagrant and knife what's available...");
        s.enable_steady_tick(std::time::Duration::from_millis(80));
        Some(s)
    } else {
        None
    };

    let (boxes, roles, environments) =
        tokio::join!(list_boxes(), list_roles(), list_environments());

    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    ProbedOptions {
        boxes,
        roles,
        environments,
    }
}

/// Installed Vagrant boxes, one label per line of `vagrant box list`,
/// always followed by the `"Other"` sentinel.
pub async fn list_boxes() -> Vec<String> {
    let stdout = capture_stdout("vagrant", &["box", "list"]).await;
    let mut boxes = non_empty_lines(&stdout.unwrap_or_default());
    boxes.push(OTHER_BOX.to_string());
    boxes
}

/// Role names known to the Chef server, per `knife role list`.
pub async fn list_roles() -> Vec<String> {
    let stdout = capture_stdout("knife", &["role", "list"]).await;
    non_empty_lines(&stdout.unwrap_or_default())
}

/// Environment names known to the Chef server, per `knife environment list`.
pub async fn list_environments() -> Vec<String> {
    let stdout = capture_stdout("knife", &["environment", "list"]).await;
    non_empty_lines(&stdout.unwrap_or_default())
}

/// Run an external command and return its stdout, or `None` when the
/// command is missing or exits non-zero. Failures degrade the choice
/// list instead of aborting the run.
async fn capture_stdout(program: &str, args: &[&str]) -> Option<String> {
    match tokio::process::Command::new(program).args(args).output().await {
        Ok(output) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(output) => {
            tracing::warn!(
                command = %format!("{program} {}", args.join(" ")),
                status = %output.status,
                "command failed, continuing with an empty list"
            );
            None
        }
        Err(e) => {
            tracing::warn!(
                command = %format!("{program} {}", args.join(" ")),
                error = %e,
                "could not run command, continuing with an empty list"
            );
            None
        }
    }
}

/// Split command output into lines (any newline style) and drop the
/// empty ones, preserving order.
pub fn non_empty_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_lines_keeps_order() {
        let lines = non_empty_lines("first\nsecond\nthird\n");
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn non_empty_lines_handles_crlf() {
        let lines = non_empty_lines("web (virtualbox, 1.0)\r\ndb\r\n");
        assert_eq!(lines, vec!["web (virtualbox, 1.0)", "db"]);
    }

    #[test]
    fn non_empty_lines_drops_blanks() {
        let lines = non_empty_lines("a\n\n\nb\n\n");
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn non_empty_lines_empty_input() {
        assert!(non_empty_lines("").is_empty());
    }

    #[tokio::test]
    async fn missing_command_yields_none() {
        assert!(capture_stdout("grog-no-such-command", &[]).await.is_none());
    }

    #[tokio::test]
    async fn failing_command_yields_none() {
        assert!(capture_stdout("false", &[]).await.is_none());
    }

    #[tokio::test]
    async fn successful_command_yields_stdout() {
        let out = capture_stdout("echo", &["hello"]).await;
        assert_eq!(out.as_deref(), Some("hello\n"));
    }
}
