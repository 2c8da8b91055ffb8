use serde::Serialize;
use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("MONKEY_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json { OutputMode::Json } else { OutputMode::Human }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, OutputMode::Human)
    }
}

/// Envelope written in JSON mode
#[derive(Debug, Serialize)]
pub struct Envelope<'a, T: Serialize> {
    pub status: &'static str,
    pub command: &'a str,
    pub data: T,
}

pub fn success_envelope<T: Serialize>(command: &str, data: T) -> anyhow::Result<String> {
    let envelope = Envelope {
        status: "ok",
        command,
        data,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

pub fn error_envelope(command: &str, message: &str) -> anyhow::Result<String> {
    let envelope = Envelope {
        status: "error",
        command,
        data: serde_json::json!({ "message": message }),
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Print `data` as a JSON success envelope; no-op in human mode
pub fn emit_success<T: Serialize>(mode: OutputMode, command: &str, data: T) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        println!("{}", success_envelope(command, data)?);
    }
    Ok(())
}
