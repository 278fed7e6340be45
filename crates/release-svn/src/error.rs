use thiserror::Error;

#[derive(Debug, Error)]
pub enum SvnError {
    #[error("failed to run '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' {}: {stderr}", describe_exit(.status))]
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },
}

fn describe_exit(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}
