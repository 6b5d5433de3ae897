use crate::core::{ChainId, NetworkType};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "nip7-qr", about = "Build and read NIP-7 QR code payloads")]
pub struct Opt {
    #[arg(
        long,
        global = true,
        help = "Target network: main_net, test_net, mijin, mijin_test or a numeric code"
    )]
    pub network: Option<NetworkType>,
    #[arg(long = "chain-id", global = true, help = "64 character hex genesis hash")]
    pub chain_id: Option<ChainId>,
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Pretty-print JSON output")]
    pub pretty: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "export-object", about = "Wrap a JSON value in an export-object QR")]
    ExportObject {
        #[arg(help = "JSON value to export")]
        json: String,
    },
    #[command(name = "export-account", about = "Export your own account")]
    ExportAccount {
        #[arg(help = "Account address or public identifier")]
        account: String,
    },
    #[command(name = "add-contact", about = "Share an account to add as a contact")]
    AddContact {
        #[arg(help = "Account address or public identifier")]
        account: String,
    },
    #[command(name = "request-transaction", about = "Request a transfer transaction")]
    RequestTransaction {
        #[arg(help = "Recipient account")]
        recipient: String,
        #[arg(help = "Amount to transfer in micro units")]
        amount: u64,
        #[arg(long, default_value_t = 0, help = "Maximum fee")]
        fee: u64,
        #[arg(long, default_value = "", help = "Plain message attached to the transfer")]
        message: String,
        #[arg(
            long = "deadline-secs",
            default_value_t = 7200,
            help = "Seconds from now until the request expires"
        )]
        deadline_secs: u64,
    },
    #[command(name = "decode", about = "Read QR text and describe its payload")]
    Decode {
        #[arg(help = "Envelope JSON, or '-' to read standard input")]
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export_object() {
        let opt = Opt::try_parse_from(["nip7-qr", "export-object", r#"{"a":1}"#]).unwrap();
        assert!(opt.network.is_none());
        match opt.command {
            Command::ExportObject { json } => assert_eq!(json, r#"{"a":1}"#),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let opt = Opt::try_parse_from([
            "nip7-qr",
            "add-contact",
            "alice",
            "--network",
            "main_net",
            "--pretty",
        ])
        .unwrap();
        assert_eq!(opt.network, Some(NetworkType::MainNet));
        assert!(opt.pretty);
    }

    #[test]
    fn test_parse_request_transaction_defaults() {
        let opt = Opt::try_parse_from(["nip7-qr", "request-transaction", "bob", "10"]).unwrap();
        match opt.command {
            Command::RequestTransaction {
                recipient,
                amount,
                fee,
                message,
                deadline_secs,
            } => {
                assert_eq!(recipient, "bob");
                assert_eq!(amount, 10);
                assert_eq!(fee, 0);
                assert!(message.is_empty());
                assert_eq!(deadline_secs, 7200);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_chain_id() {
        let result = Opt::try_parse_from(["nip7-qr", "--chain-id", "abc", "decode", "-"]);
        assert!(result.is_err());
    }
}
