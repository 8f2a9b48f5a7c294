//! Run-mode flag parsing.
//!
//! The flag grammar is deliberately loose: only the first two
//! characters of an argument are significant, so `-b`, `-basic` and
//! `-basicmode` all switch on basic mode. Each mode may be set at most
//! once and anything else is fatal. That grammar (single-dash long
//! flags matched by prefix) does not fit a derive-style argument
//! parser, so it is parsed by hand here.

use thiserror::Error;

/// A command-line argument that is not a recognized mode flag, or a
/// mode flag given twice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid command-line argument. Terminating program...")]
pub struct InvalidArgument(pub String);

/// The three run modes, fixed at startup and immutable afterwards.
///
/// Only the driver looks at these; the graph library never sees them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modes {
    /// Build the initial web and report on it, but skip the
    /// modification phase.
    pub basic: bool,

    /// Print the full web after every mutation.
    pub debug: bool,

    /// Suppress prompt text (data output is unaffected).
    pub quiet: bool,
}

impl Modes {
    /// Parses mode flags from the program arguments (without argv[0]).
    pub fn parse<I>(args: I) -> Result<Self, InvalidArgument>
    where
        I: IntoIterator<Item = String>,
    {
        let mut modes = Modes::default();

        for arg in args {
            let flag = match arg.as_bytes() {
                [b'-', b'b', ..] => &mut modes.basic,
                [b'-', b'd', ..] => &mut modes.debug,
                [b'-', b'q', ..] => &mut modes.quiet,
                _ => return Err(InvalidArgument(arg)),
            };
            if *flag {
                return Err(InvalidArgument(arg));
            }
            *flag = true;
        }

        Ok(modes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Modes, InvalidArgument> {
        Modes::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_all_off() {
        let modes = parse(&[]).unwrap();
        assert_eq!(modes, Modes::default());
    }

    #[test]
    fn test_short_flags() {
        let modes = parse(&["-b", "-q"]).unwrap();
        assert!(modes.basic);
        assert!(!modes.debug);
        assert!(modes.quiet);
    }

    #[test]
    fn test_prefix_matching() {
        let modes = parse(&["-basic", "-debugmode", "-q999"]).unwrap();
        assert!(modes.basic);
        assert!(modes.debug);
        assert!(modes.quiet);
    }

    #[test]
    fn test_unknown_flag_is_fatal() {
        assert_eq!(parse(&["-z"]), Err(InvalidArgument("-z".to_string())));
        assert!(parse(&["web.txt"]).is_err());
        assert!(parse(&["-"]).is_err());
    }

    #[test]
    fn test_duplicate_flag_is_fatal() {
        assert_eq!(parse(&["-d", "-debug"]), Err(InvalidArgument("-debug".to_string())));
        assert!(parse(&["-q", "-q"]).is_err());
    }

    #[test]
    fn test_error_message_text() {
        let err = parse(&["-z"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid command-line argument. Terminating program..."
        );
    }
}
