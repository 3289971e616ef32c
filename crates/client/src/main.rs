//! Hushdrop CLI
//!
//! Verwendung:
//! ```text
//! hushdrop send <PFAD> [--code CODE]
//! hushdrop receive <CODE> [--out VERZEICHNIS]
//! hushdrop code
//! ```
//!
//! Relay-Adresse per `--relay` oder `HUSHDROP_RELAY`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use hushdrop_client::{
    receive, send, ClientError, HttpTransport, Packer, TarGzPacker, STANDARD_RELAY_URL,
};
use hushdrop_crypto::{generate_code, parse_code};

#[derive(Parser)]
#[command(name = "hushdrop")]
#[command(version, about = "Verschluesselte Einmal-Transfers ueber einen Relay", long_about = None)]
struct Cli {
    /// Basis-URL des Relays
    #[arg(long, global = true, env = "HUSHDROP_RELAY", default_value = STANDARD_RELAY_URL)]
    relay: String,

    /// Log-Level (trace/debug/info/warn/error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    befehl: Befehl,
}

#[derive(Subcommand)]
enum Befehl {
    /// Datei oder Verzeichnis senden, gibt den Code aus
    Send {
        pfad: PathBuf,

        /// Eigenen Code verwenden statt einen zu erzeugen
        #[arg(long)]
        code: Option<String>,
    },

    /// Transfer zu einem Code abholen und entpacken
    Receive {
        code: String,

        /// Zielverzeichnis
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// Nur einen neuen Code erzeugen
    Code,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    hushdrop_observability::logging_initialisieren(&cli.log_level, "text");
    ausfuehren(cli)
}

fn ausfuehren(cli: Cli) -> Result<()> {
    match cli.befehl {
        Befehl::Code => {
            println!("{}", generate_code());
        }
        Befehl::Send { pfad, code } => {
            // Code vor dem Packen pruefen, damit ein Tippfehler nichts kostet
            let code = code.as_deref().map(parse_code).transpose()?;
            let packer = TarGzPacker;
            let blob = packer.packen(&pfad)?;
            let transport = HttpTransport::neu(&cli.relay)?;

            match send(&transport, &blob, code, Some(packer.format())) {
                Ok(code) => {
                    eprintln!("Auf der Gegenseite ausfuehren:");
                    eprintln!("  hushdrop receive {code}");
                    println!("{code}");
                }
                Err(ClientError::Konflikt) => {
                    anyhow::bail!(
                        "Code ist auf dem Relay bereits belegt, bitte ohne --code erneut senden"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }
        Befehl::Receive { code, out } => {
            let transport = HttpTransport::neu(&cli.relay)?;
            let empfang = receive(&transport, code.trim())?;

            let packer = TarGzPacker;
            match empfang.meta.as_deref() {
                None => {}
                Some(format) if format == packer.format() => {}
                Some(format) => {
                    return Err(ClientError::Eingabe(format!(
                        "unbekanntes Paketformat '{format}'"
                    ))
                    .into())
                }
            }
            packer.entpacken(&empfang.daten, &out)?;
            eprintln!("Empfangen nach {}", out.display());
        }
    }
    Ok(())
}
