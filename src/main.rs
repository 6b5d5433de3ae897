// This is my entry point for the nip7-qr command line tool
// I use it to build NIP-7 QR payloads from the shell and to read them back
use clap::Parser;
use log::{error, info, warn, LevelFilter};
use nip7_qr::utils::current_timestamp;
use nip7_qr::{
    Account, Command, HexTransactionMapping, Opt, QrCode, QrCodeGenerator, QrError, Transaction,
    GLOBAL_CONFIG,
};
use std::io::Read;
use std::process;

// I pass this instead of the envelope text when I want to pipe it in
const STDIN_MARKER: &str = "-";

fn main() {
    // I initialize logging at Info so I can see what the tool is doing
    // RUST_LOG still wins when I set it, which is handy for debugging config loading
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    // I parse the command line arguments using clap
    let opt = Opt::parse();

    // If anything goes wrong I log the error and exit with code 1
    if let Err(e) = run_command(opt) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// This is where I handle every subcommand
// Each one either builds an envelope and prints it, or reads one and describes it
fn run_command(opt: Opt) -> Result<(), Box<dyn std::error::Error>> {
    // I layer the configuration: config file first, then the flags on top
    if let Some(path) = &opt.config {
        GLOBAL_CONFIG.load_file(path)?;
    }
    if let Some(network_type) = opt.network {
        GLOBAL_CONFIG.set_network_type(network_type);
    }
    if let Some(chain_id) = opt.chain_id.clone() {
        GLOBAL_CONFIG.set_chain_id(chain_id);
    }
    if opt.pretty {
        GLOBAL_CONFIG.set_pretty(true);
    }

    // I take one snapshot so every value below comes from the same settings
    let settings = GLOBAL_CONFIG.snapshot();
    let network = Some(settings.network_type);
    let chain_id = Some(settings.chain_id.clone());

    let qr: QrCode = match opt.command {
        // When I want to share an arbitrary JSON value
        Command::ExportObject { json } => {
            // I reject bad JSON here so the user sees the same error the decoder would give
            let object = serde_json::from_str(&json)
                .map_err(|e| QrError::MalformedJson(e.to_string()))?;
            QrCodeGenerator::create_export_object(object, network, chain_id).into()
        }
        // When I want to export my own account
        Command::ExportAccount { account } => {
            let account = checked_account(account);
            QrCodeGenerator::create_export_account(account, network, chain_id).into()
        }
        // When I want someone to add an account to their contacts
        Command::AddContact { account } => {
            let account = checked_account(account);
            QrCodeGenerator::create_add_contact(account, network, chain_id).into()
        }
        // When I want to ask someone to send me a transfer
        Command::RequestTransaction {
            recipient,
            amount,
            fee,
            message,
            deadline_secs,
        } => {
            // The deadline is relative on the command line, so I anchor it to now
            let deadline = current_timestamp()?.saturating_add(deadline_secs);
            let transaction = Transaction::new_transfer(
                settings.network_type,
                checked_account(recipient),
                amount,
                fee,
                deadline,
                &message,
            )?;
            info!("Transaction id {}", hex::encode(transaction.get_id()));
            QrCodeGenerator::create_transaction_request(transaction, network, chain_id).into()
        }
        // When I scanned a QR code and want to know what is inside
        Command::Decode { text } => {
            let text = if text == STDIN_MARKER {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                // Shells and editors add a trailing newline, which I strip
                buffer.trim_end().to_string()
            } else {
                text
            };
            let qr = QrCodeGenerator::from_json(&text)?;
            describe(&qr);
            return Ok(());
        }
    };

    // Every building command ends here: I print the envelope text for the QR renderer
    let value = qr.to_json(&HexTransactionMapping)?;
    let output = if settings.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{output}");
    Ok(())
}

// I accept any identifier, but I warn when it does not look like a real address
fn checked_account(identifier: String) -> Account {
    let account = Account::new(identifier);
    if !account.is_valid_address() {
        warn!("{account} is not a base58check address, using it as given");
    }
    account
}

// I print a human readable summary of a decoded QR payload
fn describe(qr: &QrCode) {
    println!("Type:       {} ({})", qr.kind(), qr.kind().code());
    println!("Network:    {} ({})", qr.network_type(), qr.network_type().code());
    println!("Chain id:   {}", qr.chain_id());
    match qr {
        QrCode::AddContact(contact) => println!("Account:    {}", contact.get_account()),
        QrCode::ExportAccount(account) => println!("Account:    {}", account.get_account()),
        QrCode::RequestTransaction(request) => {
            let tx = request.get_transaction();
            println!("Tx id:      {}", hex::encode(tx.get_id()));
            println!("Recipient:  {}", tx.get_recipient());
            println!("Amount:     {}", tx.get_amount());
            println!("Fee:        {}", tx.get_fee());
            println!("Deadline:   {}", tx.get_deadline());
            if !tx.get_message().is_empty() {
                println!("Message:    {}", tx.get_message());
            }
            // I recompute the id so a tampered payload does not go unnoticed
            if !tx.verify_id() {
                warn!("Transaction id does not match its contents");
            }
        }
        QrCode::ExportObject(object) => println!("Object:     {}", object.get_object()),
    }
}
