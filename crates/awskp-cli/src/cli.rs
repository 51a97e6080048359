use std::path::PathBuf;

use clap::{builder::NonEmptyStringValueParser, Parser};

/// CLI surface definition: one command, no subcommands.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "awskp",
    about = "Retrieve the private key of an EC2 keypair.",
    long_about = "awskp retrieves the private key of an EC2 keypair created with \
                  CloudFormation or CDK, which is stored in SSM Parameter Store \
                  under /ec2/keypair/<key-id>.",
    version
)]
pub struct Cli {
    /// The region the keypair resides in.
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub region: String,

    /// The id of the key pair (e.g. key-0123456789abcdef0).
    #[arg(short, long = "key-id", value_parser = NonEmptyStringValueParser::new())]
    pub key_id: String,

    /// The file to write the private key to; printed to stdout when absent or empty.
    #[arg(short, long)]
    pub outfile: Option<String>,

    /// Named AWS profile to use instead of the default credential chain.
    #[arg(short, long)]
    pub profile: Option<String>,
}

impl Cli {
    /// Output path, treating an empty `--outfile` as absent.
    pub fn outfile_path(&self) -> Option<PathBuf> {
        self.outfile
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    }
}

/// Parse process arguments. Usage errors exit with status 1; help and version exit 0.
pub fn parse_or_exit() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(exit_code(&err));
        }
    }
}

/// Process status for a parse outcome that stops the run.
fn exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn parses_long_flags() {
        let cli = Cli::try_parse_from([
            "awskp",
            "--region",
            "us-east-1",
            "--key-id",
            "my-key",
            "--outfile",
            "my-key.pem",
        ])
        .expect("parse should succeed");
        assert_eq!(cli.region, "us-east-1");
        assert_eq!(cli.key_id, "my-key");
        assert_eq!(cli.outfile_path(), Some(PathBuf::from("my-key.pem")));
        assert_eq!(cli.profile, None);
    }

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from(["awskp", "-r", "eu-west-2", "-k", "k1", "-p", "ops"])
            .expect("parse should succeed");
        assert_eq!(cli.region, "eu-west-2");
        assert_eq!(cli.key_id, "k1");
        assert_eq!(cli.outfile_path(), None);
        assert_eq!(cli.profile.as_deref(), Some("ops"));
    }

    #[test]
    fn missing_region_fails() {
        let err = Cli::try_parse_from(["awskp", "-k", "my-key"]).expect_err("region required");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn missing_key_id_fails() {
        let err =
            Cli::try_parse_from(["awskp", "-r", "us-east-1"]).expect_err("key-id required");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn empty_values_are_rejected() {
        let err = Cli::try_parse_from(["awskp", "-r", "", "-k", "my-key"])
            .expect_err("empty region");
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn empty_outfile_means_stdout() {
        let cli = Cli::try_parse_from(["awskp", "-r", "us-east-1", "-k", "my-key", "-o", ""])
            .expect("parse should succeed");
        assert_eq!(cli.outfile_path(), None);
    }

    #[test]
    fn usage_errors_exit_one() {
        let err = Cli::try_parse_from(["awskp", "-k", "my-key"]).expect_err("region required");
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn help_and_version_exit_zero() {
        let err = Cli::try_parse_from(["awskp", "--help"]).expect_err("help stops parsing");
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(exit_code(&err), 0);

        let err = Cli::try_parse_from(["awskp", "--version"]).expect_err("version stops parsing");
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert_eq!(exit_code(&err), 0);
    }
}
