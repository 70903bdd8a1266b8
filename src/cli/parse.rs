use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--digits" => flags.digits = true,
            "--symbols" => flags.symbols = true,
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(parse_value(args, i)?);
            }
            "-n" | "--number" => {
                i += 1;
                flags.number = Some(parse_value(args, i)?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn parse_value(args: &[String], i: usize) -> Result<usize, ParseError> {
    let Some(value) = args.get(i) else {
        return Err(ParseError::MissingValue(args[i - 1].clone()));
    };
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}
