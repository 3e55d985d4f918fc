pub mod hook;
pub mod sequence;

use streaming_core::config::Config;

/// Everything a command needs, resolved once in `main`.
pub struct Context {
    pub config: Config,
    /// `false` when `--no-hook` was passed.
    pub hook: bool,
}

/// Clap value parser for the break length argument.
pub fn parse_seconds(arg: &str) -> Result<u64, String> {
    match arg.trim().parse::<u64>() {
        Ok(seconds) if seconds > 0 => Ok(seconds),
        _ => Err(format!("invalid number of seconds: {arg}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(parse_seconds("90"), Ok(90));
        assert_eq!(parse_seconds("1"), Ok(1));
    }

    #[test]
    fn rejects_everything_else() {
        for arg in ["", "0", "-5", "1.5", "ten", "60s"] {
            assert_eq!(
                parse_seconds(arg),
                Err(format!("invalid number of seconds: {arg}")),
                "expected rejection of {arg:?}"
            );
        }
    }
}
